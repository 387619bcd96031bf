//! Non-preemptive Shortest-Job-First (SJF) CPU scheduling simulator.
//!
//! Simulates SJF scheduling over a user-supplied set of processes
//! (arrival time, burst time) and produces an ordered execution timeline
//! (Gantt intervals), derived performance statistics, a chronological
//! event log, and a scrubbable playback cursor for visualization.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `GanttInterval`, `ProcessStats`,
//!   `SimulationEvent`, `SimulationResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, invalid burst/arrival)
//! - **`simulator`**: The SJF algorithm and summary statistics
//! - **`playback`**: Time-cursor state machine (play/pause/step/seek)
//! - **`session`**: Command/query facade owning processes, result, and playback
//!
//! # Architecture
//!
//! The simulator runs to completion synchronously and atomically replaces
//! the previous result. Rendering consumers (tables, canvas) are external
//! collaborators that read `SimulationResult`, `SimulationStats`, and the
//! playback cursor on demand; nothing in this crate draws anything.
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod playback;
pub mod session;
pub mod simulator;
pub mod validation;
