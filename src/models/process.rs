//! Process (scheduling input) model.
//!
//! A process is a unit of CPU demand: it becomes eligible at its arrival
//! time and needs `burst` contiguous time units of CPU.
//!
//! # Reference
//! Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable once submitted to a simulation run; the simulator works on
/// its own copy and never writes back into the submitted set.
///
/// # Time Representation
/// `burst` and `arrival` are integer simulated time units relative to
/// the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (non-empty).
    pub id: String,
    /// Total CPU time required (units, > 0).
    pub burst: i64,
    /// Time at which the process becomes eligible to run (units, >= 0).
    pub arrival: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, burst: i64, arrival: i64) -> Self {
        Self {
            id: id.into(),
            burst,
            arrival,
        }
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst: i64) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }
}
