//! Simulation session: the command/query facade.
//!
//! Owns the submitted process set, the latest `SimulationResult`, and the
//! playback engine as one explicit value; callers hold the session rather
//! than sharing ambient globals. UI collaborators issue commands through
//! it (`submit_process`, `run`, `reset_simulation`, `clear_all`, playback
//! commands via [`SimulationSession::playback_mut`]) and read results and
//! statistics back through its queries.

use crate::models::{Process, SimulationResult};
use crate::playback::PlaybackEngine;
use crate::simulator::{EmptyResultError, SimulationStats, SjfSimulator};
use crate::validation::{validate_process, validate_process_set, ValidationError};

/// One simulation session: process set, latest result, playback cursor.
///
/// A new run atomically replaces the previous result and resets playback
/// to the new span. A failed run (validation error) leaves any prior
/// result untouched.
///
/// # Example
///
/// ```
/// use sjf_sim::session::SimulationSession;
///
/// let mut session = SimulationSession::new();
/// session.submit_process("P1", 5, 0).unwrap();
/// session.submit_process("P2", 3, 1).unwrap();
/// session.submit_process("P3", 2, 2).unwrap();
///
/// let result = session.run().unwrap();
/// assert_eq!(result.total_span(), 10);
///
/// let stats = session.stats().unwrap();
/// assert!((stats.avg_waiting - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationSession {
    processes: Vec<Process>,
    result: Option<SimulationResult>,
    playback: PlaybackEngine,
}

impl SimulationSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and adds a process to the set.
    ///
    /// A blank (or whitespace-only) ID is auto-named `P{n+1}` from the
    /// current set size. On error nothing is added.
    ///
    /// # Errors
    /// All detected [`ValidationError`]s (bad fields, duplicate ID).
    pub fn submit_process(
        &mut self,
        id: impl Into<String>,
        burst: i64,
        arrival: i64,
    ) -> Result<&Process, Vec<ValidationError>> {
        let mut id = id.into();
        if id.trim().is_empty() {
            id = format!("P{}", self.processes.len() + 1);
        }

        let process = Process::new(id, burst, arrival);
        validate_process(&process, &self.processes)?;

        self.processes.push(process);
        Ok(&self.processes[self.processes.len() - 1])
    }

    /// Runs the SJF simulation over the current process set.
    ///
    /// On success the previous result is replaced wholesale and the
    /// playback engine is reset to the new span. On validation failure
    /// (including an empty set) the prior result and playback are left
    /// untouched.
    ///
    /// # Errors
    /// All detected [`ValidationError`]s for the set.
    pub fn run(&mut self) -> Result<&SimulationResult, Vec<ValidationError>> {
        validate_process_set(&self.processes)?;

        let result = SjfSimulator::new().simulate(&self.processes);
        self.playback.load_span(result.total_span());
        Ok(self.result.insert(result))
    }

    /// Summary statistics for the latest run.
    ///
    /// # Errors
    /// [`EmptyResultError`] before any successful run.
    pub fn stats(&self) -> Result<SimulationStats, EmptyResultError> {
        match &self.result {
            Some(result) => SimulationStats::calculate(result, &self.processes),
            None => Err(EmptyResultError),
        }
    }

    /// Discards the result and playback state, keeping the process set.
    pub fn reset_simulation(&mut self) {
        self.result = None;
        self.playback = PlaybackEngine::new();
    }

    /// Discards everything: processes, result, and playback state.
    pub fn clear_all(&mut self) {
        self.processes.clear();
        self.reset_simulation();
    }

    /// The submitted process set, in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// The latest simulation result, if any run has succeeded.
    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    /// Read access to the playback cursor.
    pub fn playback(&self) -> &PlaybackEngine {
        &self.playback
    }

    /// Command access to the playback engine (play/pause/step/seek/...).
    pub fn playback_mut(&mut self) -> &mut PlaybackEngine {
        &mut self.playback
    }
}
