//! Non-preemptive Shortest-Job-First scheduler.
//!
//! # Algorithm
//!
//! 1. If no process has arrived at t=0, advance the clock to the first
//!    arrival and log the idle gap.
//! 2. At each decision point, admit every arrived process into the ready
//!    set, then dispatch the ready process with the smallest burst;
//!    ties broken by earliest arrival, then by input order.
//! 3. If nothing is ready, jump the clock to the next arrival and log
//!    the idle gap.
//!
//! Once dispatched a process runs to completion (non-preemptive), so the
//! Gantt timeline contains exactly one interval per process, ordered by
//! construction.
//!
//! # Complexity
//! O(n^2) dispatch scans over n processes; the sets involved are tiny.
//!
//! # Reference
//! Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use crate::models::{GanttInterval, Process, ProcessStats, SimulationEvent, SimulationResult};

/// Per-process lifecycle during a run.
///
/// Explicit state per input index instead of identity scans over arrays:
/// membership tests are a lookup, and the input index doubles as the
/// final dispatch tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProcState {
    /// Not yet arrived.
    Pending,
    /// Arrived, waiting to be dispatched.
    Ready,
    /// Dispatched and run to completion.
    Done,
}

/// Non-preemptive SJF simulator.
///
/// Deterministic and total over valid input: every loop iteration either
/// advances the clock or completes a process, so termination is
/// guaranteed. The input set is only read, never mutated.
///
/// The simulator assumes a pre-validated set (unique non-empty IDs,
/// `burst > 0`, `arrival >= 0`, see [`crate::validation`]). It has no
/// error path of its own.
///
/// # Example
///
/// ```
/// use sjf_sim::models::Process;
/// use sjf_sim::simulator::SjfSimulator;
///
/// let processes = vec![
///     Process::new("P1", 5, 0),
///     Process::new("P2", 3, 1),
///     Process::new("P3", 2, 2),
/// ];
/// let result = SjfSimulator::new().simulate(&processes);
/// assert_eq!(result.interval_count(), 3);
/// assert_eq!(result.total_span(), 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfSimulator;

impl SjfSimulator {
    /// Creates a new simulator.
    pub fn new() -> Self {
        Self
    }

    /// Runs the simulation to completion and returns the result.
    pub fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let mut result = SimulationResult::new();
        let mut time: i64 = 0;
        let mut state = vec![ProcState::Pending; processes.len()];
        let mut completed = 0usize;

        // Input indices in arrival order, for admission and idle-gap jumps.
        let mut by_arrival: Vec<usize> = (0..processes.len()).collect();
        by_arrival.sort_by_key(|&i| processes[i].arrival);

        result.events.push(SimulationEvent::new(
            time,
            format!("Simulation started with {} processes.", processes.len()),
        ));

        if let Some(&first) = by_arrival.first() {
            let first_arrival = processes[first].arrival;
            if first_arrival > 0 {
                result.events.push(SimulationEvent::new(
                    time,
                    format!("CPU idle until t={first_arrival}"),
                ));
                time = first_arrival;
            }
        }

        while completed < processes.len() {
            // Admit arrivals, in increasing arrival order.
            for &i in &by_arrival {
                if state[i] == ProcState::Pending && processes[i].arrival <= time {
                    state[i] = ProcState::Ready;
                    result.events.push(SimulationEvent::new(
                        time,
                        format!("t={time} → Process {} arrived", processes[i].id),
                    ));
                }
            }

            // Smallest burst, then earliest arrival, then input order.
            let next = (0..processes.len())
                .filter(|&i| state[i] == ProcState::Ready)
                .min_by_key(|&i| (processes[i].burst, processes[i].arrival, i));

            if let Some(i) = next {
                let process = &processes[i];
                // Already arrived, so start == time; max guards the invariant.
                let start = time.max(process.arrival);
                let finish = start + process.burst;

                result
                    .intervals
                    .push(GanttInterval::new(process.id.as_str(), start, finish));
                result.stats.insert(
                    process.id.clone(),
                    ProcessStats {
                        process_id: process.id.clone(),
                        start,
                        finish,
                        waiting: start - process.arrival,
                        turnaround: finish - process.arrival,
                        response: start - process.arrival,
                    },
                );

                result.events.push(SimulationEvent::new(
                    start,
                    format!("t={start} → {} started (burst={})", process.id, process.burst),
                ));
                result.events.push(SimulationEvent::new(
                    finish,
                    format!("t={finish} → {} completed", process.id),
                ));

                state[i] = ProcState::Done;
                completed += 1;
                time = finish;
            } else {
                // Nothing ready: jump to the next pending arrival.
                let next_pending = by_arrival
                    .iter()
                    .copied()
                    .find(|&i| state[i] == ProcState::Pending);
                if let Some(i) = next_pending {
                    let arrival = processes[i].arrival;
                    result.events.push(SimulationEvent::new(
                        time,
                        format!("t={time} → CPU idle until t={arrival}"),
                    ));
                    time = arrival;
                } else {
                    // Unreachable with a valid set; guards against spinning.
                    time += 1;
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulate(processes: &[Process]) -> SimulationResult {
        SjfSimulator::new().simulate(processes)
    }

    #[test]
    fn test_single_process() {
        let result = simulate(&[Process::new("P1", 4, 0)]);
        assert_eq!(result.intervals, vec![GanttInterval::new("P1", 0, 4)]);

        let s = &result.stats["P1"];
        assert_eq!(s.waiting, 0);
        assert_eq!(s.turnaround, 4);
        assert_eq!(s.response, 0);
    }

    #[test]
    fn test_reference_scenario() {
        // P1 is the only process ready at t=0 and runs [0,5); at t=5 both
        // P2 and P3 are ready and P3 (burst 2) wins; P2 runs last.
        let processes = vec![
            Process::new("P1", 5, 0),
            Process::new("P2", 3, 1),
            Process::new("P3", 2, 2),
        ];
        let result = simulate(&processes);

        assert_eq!(
            result.intervals,
            vec![
                GanttInterval::new("P1", 0, 5),
                GanttInterval::new("P3", 5, 7),
                GanttInterval::new("P2", 7, 10),
            ]
        );
        assert_eq!(result.total_span(), 10);
        assert_eq!(result.stats["P1"].waiting, 0);
        assert_eq!(result.stats["P2"].waiting, 6);
        assert_eq!(result.stats["P3"].waiting, 3);
    }

    #[test]
    fn test_leading_idle_gap() {
        let result = simulate(&[Process::new("P1", 4, 3)]);
        assert_eq!(result.intervals, vec![GanttInterval::new("P1", 3, 7)]);
        assert!(result
            .events
            .iter()
            .any(|e| e.time == 0 && e.text == "CPU idle until t=3"));
    }

    #[test]
    fn test_interior_idle_gap() {
        // P1 runs [0,2); nothing arrives until t=5.
        let processes = vec![Process::new("P1", 2, 0), Process::new("P2", 1, 5)];
        let result = simulate(&processes);

        assert_eq!(
            result.intervals,
            vec![
                GanttInterval::new("P1", 0, 2),
                GanttInterval::new("P2", 5, 6),
            ]
        );
        assert!(result
            .events
            .iter()
            .any(|e| e.text == "t=2 → CPU idle until t=5"));
    }

    #[test]
    fn test_shortest_burst_wins() {
        let processes = vec![
            Process::new("long", 9, 0),
            Process::new("short", 1, 0),
            Process::new("medium", 4, 0),
        ];
        let result = simulate(&processes);
        let order: Vec<&str> = result
            .intervals
            .iter()
            .map(|iv| iv.process_id.as_str())
            .collect();
        assert_eq!(order, vec!["short", "medium", "long"]);
    }

    #[test]
    fn test_equal_burst_earlier_arrival_first() {
        // Both ready at t=3 (after P0 finishes); equal burst → earlier arrival.
        let processes = vec![
            Process::new("P0", 3, 0),
            Process::new("late", 2, 2),
            Process::new("early", 2, 1),
        ];
        let result = simulate(&processes);
        let order: Vec<&str> = result
            .intervals
            .iter()
            .map(|iv| iv.process_id.as_str())
            .collect();
        assert_eq!(order, vec!["P0", "early", "late"]);
    }

    #[test]
    fn test_full_tie_uses_input_order() {
        // Equal burst and equal arrival → stable input-order tie-break.
        let processes = vec![
            Process::new("first", 2, 0),
            Process::new("second", 2, 0),
            Process::new("third", 2, 0),
        ];
        let result = simulate(&processes);
        let order: Vec<&str> = result
            .intervals
            .iter()
            .map(|iv| iv.process_id.as_str())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let processes = vec![Process::new("P1", 5, 0), Process::new("P2", 3, 1)];
        let before = processes.clone();
        let _ = simulate(&processes);
        assert_eq!(processes, before);
    }

    #[test]
    fn test_stats_identities() {
        let processes = vec![
            Process::new("P1", 5, 0),
            Process::new("P2", 3, 1),
            Process::new("P3", 2, 2),
        ];
        let result = simulate(&processes);

        for p in &processes {
            let s = &result.stats[&p.id];
            assert!(s.waiting >= 0);
            assert_eq!(s.turnaround, s.waiting + p.burst);
            assert_eq!(s.turnaround, s.finish - p.arrival);
            assert_eq!(s.response, s.waiting);
        }
    }

    #[test]
    fn test_intervals_ordered_and_disjoint() {
        let processes = vec![
            Process::new("a", 3, 4),
            Process::new("b", 7, 0),
            Process::new("c", 1, 6),
            Process::new("d", 2, 12),
        ];
        let result = simulate(&processes);

        assert_eq!(result.interval_count(), processes.len());
        for w in result.intervals.windows(2) {
            assert!(w[0].end <= w[1].start);
        }
    }

    #[test]
    fn test_gaps_are_logged() {
        // Every gap between consecutive intervals must have an idle event.
        let processes = vec![Process::new("a", 1, 0), Process::new("b", 1, 10)];
        let result = simulate(&processes);

        for w in result.intervals.windows(2) {
            if w[0].end < w[1].start {
                let expected = format!("t={} → CPU idle until t={}", w[0].end, w[1].start);
                assert!(result.events.iter().any(|e| e.text == expected));
            }
        }
    }

    #[test]
    fn test_event_log_order() {
        let processes = vec![Process::new("P1", 2, 1)];
        let result = simulate(&processes);

        let texts: Vec<&str> = result.events.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Simulation started with 1 processes.",
                "CPU idle until t=1",
                "t=1 → Process P1 arrived",
                "t=1 → P1 started (burst=2)",
                "t=3 → P1 completed",
            ]
        );
        // Event times never decrease.
        for w in result.events.windows(2) {
            assert!(w[0].time <= w[1].time);
        }
    }

    #[test]
    fn test_random_sets_hold_invariants() {
        use rand::Rng;
        let mut rng = rand::rng();

        for _ in 0..50 {
            let n = rng.random_range(1..=12);
            let processes: Vec<Process> = (0..n)
                .map(|i| {
                    Process::new(
                        format!("P{i}"),
                        rng.random_range(1..=9),
                        rng.random_range(0..=20),
                    )
                })
                .collect();

            let result = simulate(&processes);
            assert_eq!(result.interval_count(), n);

            // Ordered, disjoint, and every gap covered by an idle event.
            for w in result.intervals.windows(2) {
                assert!(w[0].end <= w[1].start);
                if w[0].end < w[1].start {
                    let expected =
                        format!("t={} → CPU idle until t={}", w[0].end, w[1].start);
                    assert!(result.events.iter().any(|e| e.text == expected));
                }
            }

            for p in &processes {
                let iv = result.interval_for(&p.id).unwrap();
                assert!(iv.start >= p.arrival);
                assert_eq!(iv.duration(), p.burst);
                let s = &result.stats[&p.id];
                assert!(s.waiting >= 0);
                assert_eq!(s.turnaround, s.waiting + p.burst);
            }
        }
    }
}
