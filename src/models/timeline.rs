//! Simulation output models.
//!
//! A `SimulationResult` is the complete outcome of one SJF run: the
//! ordered Gantt timeline, per-process statistics, and the chronological
//! event log. It is owned by the run that created it; a new run replaces
//! it wholesale, so partial results are never observable.
//!
//! # Reference
//! Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One contiguous span of simulated time during which a single process
/// occupies the CPU.
///
/// In a non-preemptive schedule each process appears exactly once.
/// Intervals are ordered by `start`, never overlap, and are contiguous
/// except across explicitly logged idle gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttInterval {
    /// Process occupying the CPU.
    pub process_id: String,
    /// Start of execution (units, >= 0).
    pub start: i64,
    /// End of execution (units, > start).
    pub end: i64,
}

impl GanttInterval {
    /// Creates a new interval.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Interval length (end - start) in units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Visual completion fraction at cursor time `t`.
    ///
    /// Returns 0.0 if `t <= start`, 1.0 if `t >= end`, and the linear
    /// interpolation `(t - start) / (end - start)` in between. Monotonic
    /// and continuous in `t`; this is the contract renderers use to draw
    /// partially executed bars.
    pub fn completion_at(&self, t: f64) -> f64 {
        let start = self.start as f64;
        let end = self.end as f64;
        if t <= start {
            0.0
        } else if t >= end {
            1.0
        } else {
            (t - start) / (end - start)
        }
    }
}

/// Per-process timing statistics derived from a completed run.
///
/// Invariants: `waiting >= 0`, `turnaround = waiting + burst`. Response
/// time equals waiting time under non-preemptive scheduling (a process
/// runs the moment it is first dispatched).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process this row describes.
    pub process_id: String,
    /// Time the process started executing.
    pub start: i64,
    /// Time the process finished.
    pub finish: i64,
    /// Time spent ready but not running (start - arrival).
    pub waiting: i64,
    /// Total time from arrival to completion (finish - arrival).
    pub turnaround: i64,
    /// Time from arrival to first dispatch (start - arrival).
    pub response: i64,
}

/// One entry in the chronological event log.
///
/// Events are appended in order of occurrence in simulated time; the
/// `time` field records the simulation clock at the moment of logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Simulation clock when the event occurred (units).
    pub time: i64,
    /// Human-readable description.
    pub text: String,
}

impl SimulationEvent {
    /// Creates a new event.
    pub fn new(time: i64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }
}

/// Complete outcome of one simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution timeline, ordered by start time.
    pub intervals: Vec<GanttInterval>,
    /// Per-process statistics, keyed by process ID.
    pub stats: HashMap<String, ProcessStats>,
    /// Chronological event log.
    pub events: Vec<SimulationEvent>,
}

impl SimulationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the last interval, or 0 if the timeline is empty.
    ///
    /// This is the playback span: the cursor ranges over `[0, total_span]`.
    pub fn total_span(&self) -> i64 {
        self.intervals.last().map(|iv| iv.end).unwrap_or(0)
    }

    /// Sum of interval durations (units the CPU spent executing).
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|iv| iv.duration()).sum()
    }

    /// Finds the interval for a given process.
    pub fn interval_for(&self, process_id: &str) -> Option<&GanttInterval> {
        self.intervals
            .iter()
            .find(|iv| iv.process_id == process_id)
    }

    /// Number of scheduled processes.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }
}
