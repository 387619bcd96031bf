//! Input validation for process sets.
//!
//! Checks structural integrity of processes before simulation. Detects:
//! - Empty or duplicate IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Empty process sets (on run)
//!
//! Validation happens here, before the simulator runs; the simulator
//! assumes a pre-validated set and has no recoverable error path.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
    /// A simulation was requested over an empty process set.
    EmptyProcessSet,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single process against the already-accepted set.
///
/// Checks:
/// 1. Non-empty ID
/// 2. ID not already in `existing`
/// 3. `burst > 0`
/// 4. `arrival >= 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_process(process: &Process, existing: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    check_fields(process, &mut errors);

    if existing.iter().any(|p| p.id == process.id) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateId,
            format!("Process ID already exists: {}", process.id),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a complete process set before a simulation run.
///
/// Checks:
/// 1. The set is non-empty
/// 2. No duplicate IDs
/// 3. Every process passes the field checks (non-empty ID, burst > 0,
///    arrival >= 0)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_process_set(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "No processes to simulate",
        ));
    }

    let mut ids = HashSet::new();
    for process in processes {
        check_fields(process, &mut errors);
        if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_fields(process: &Process, errors: &mut Vec<ValidationError>) {
    if process.id.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Process ID must be non-empty",
        ));
    }
    if process.burst <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!(
                "Process '{}' has non-positive burst time {}",
                process.id, process.burst
            ),
        ));
    }
    if process.arrival < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!(
                "Process '{}' has negative arrival time {}",
                process.id, process.arrival
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_set() {
        let processes = vec![
            Process::new("P1", 5, 0),
            Process::new("P2", 3, 1),
            Process::new("P3", 2, 2),
        ];
        assert!(validate_process_set(&processes).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_process_set(&[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 5, 0), Process::new("P1", 3, 1)];
        let errors = validate_process_set(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_burst() {
        let errors = validate_process_set(&[Process::new("P1", 0, 0)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));

        let errors = validate_process_set(&[Process::new("P1", -3, 0)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_process_set(&[Process::new("P1", 5, -1)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_empty_id() {
        let errors = validate_process_set(&[Process::new("", 5, 0)]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_single_process_against_existing() {
        let existing = vec![Process::new("P1", 5, 0)];
        assert!(validate_process(&Process::new("P2", 3, 1), &existing).is_ok());

        let errors = validate_process(&Process::new("P1", 3, 1), &existing).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_multiple_errors_collected() {
        // Bad burst + bad arrival + duplicate, all reported at once
        let processes = vec![
            Process::new("P1", 5, 0),
            Process::new("P1", -1, -2),
        ];
        let errors = validate_process_set(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
