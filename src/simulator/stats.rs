//! Summary statistics over a completed simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(start - arrival) |
//! | Avg Turnaround | mean(finish - arrival) |
//! | Avg Response | mean(start - arrival), == waiting (non-preemptive) |
//! | CPU Utilization | busy / total × 100 |
//! | Throughput | processes / total time |
//! | Idle Time | max(0, total - busy) |
//!
//! # Reference
//! Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5.2

use crate::models::{Process, SimulationResult};

/// Statistics were requested before any successful simulation run.
///
/// A caller-contract violation, surfaced rather than silently defaulted;
/// UI collaborators may render placeholders on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResultError;

/// Summary performance metrics for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationStats {
    /// Mean waiting time (units).
    pub avg_waiting: f64,
    /// Mean turnaround time (units).
    pub avg_turnaround: f64,
    /// Mean response time (units).
    pub avg_response: f64,
    /// CPU utilization as a percentage (0..=100).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Units the CPU spent executing.
    pub busy_time: i64,
    /// Units the CPU spent idle (total - busy).
    pub idle_time: i64,
    /// End of the schedule (last interval's end).
    pub total_time: i64,
}

impl SimulationStats {
    /// Computes summary metrics from a result and its originating set.
    ///
    /// # Arguments
    /// * `result` - The completed simulation result.
    /// * `processes` - The input processes the result was produced from.
    ///
    /// # Errors
    /// [`EmptyResultError`] if the result contains no intervals.
    pub fn calculate(
        result: &SimulationResult,
        processes: &[Process],
    ) -> Result<Self, EmptyResultError> {
        if result.intervals.is_empty() {
            return Err(EmptyResultError);
        }

        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_response: i64 = 0;
        let mut counted: usize = 0;

        for process in processes {
            if let Some(stats) = result.stats.get(&process.id) {
                total_waiting += stats.waiting;
                total_turnaround += stats.turnaround;
                total_response += stats.response;
                counted += 1;
            }
        }

        let total_time = result.total_span();
        let busy_time = result.busy_time();
        let idle_time = (total_time - busy_time).max(0);
        let n = counted.max(1) as f64;

        Ok(Self {
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            avg_response: total_response as f64 / n,
            cpu_utilization: busy_time as f64 / total_time as f64 * 100.0,
            throughput: counted as f64 / total_time as f64,
            busy_time,
            idle_time,
            total_time,
        })
    }
}
