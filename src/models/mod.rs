//! Simulation domain models.
//!
//! Provides the core data types for representing SJF scheduling inputs
//! and outputs. All simulated times are integer time units relative to
//! the simulation epoch (t=0); the consumer defines what one unit means.
//!
//! Input (`Process`) and output (`SimulationResult` and its parts) are
//! separate types: the simulator never mutates the submitted process set.

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{GanttInterval, ProcessStats, SimulationEvent, SimulationResult};
