//! SJF simulation and summary statistics.
//!
//! `SjfSimulator` runs the non-preemptive Shortest-Job-First algorithm
//! to completion over a validated process set. `SimulationStats` derives
//! summary metrics (averages, utilization, throughput, idle time) from
//! the finished result.
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5.3.2
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod sjf;
mod stats;

pub use sjf::SjfSimulator;
pub use stats::{EmptyResultError, SimulationStats};
