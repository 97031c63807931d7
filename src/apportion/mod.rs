//! Huntington–Hill apportionment.
//!
//! Every state holds one guaranteed seat. The remaining seats are handed
//! out one at a time to whichever state currently has the highest priority
//! value `population / sqrt(n * (n - 1))`, `n` being the seat number the
//! state would receive next.

use crate::model::{ApportionmentRun, SeatEvent, StateAllocation, StateRecord};
use crate::{ApportionError, Result};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::convert::TryFrom;

pub mod replay;
pub mod stats;

/// Size of the U.S. House since 1913.
pub const DEFAULT_TOTAL_SEATS: u32 = 435;

/// Apportionment options
#[derive(Debug, Clone)]
pub struct ApportionOptions {
    pub total_seats: u32,
}

impl Default for ApportionOptions {
    fn default() -> Self {
        Self {
            total_seats: DEFAULT_TOTAL_SEATS,
        }
    }
}

/// Priority value of a state with `population` for its seat number `seat`.
///
/// Seat 1 is guaranteed, so anything below 2 yields infinity.
pub fn priority(population: u64, seat: u32) -> f64 {
    let n = f64::from(seat);
    population as f64 / (n * (n - 1.0)).sqrt()
}

/// A state's standing claim on the next seat.
///
/// Ordered by priority; on an exact tie the state earlier in input order
/// ranks higher.
#[derive(Debug, Clone, Copy)]
struct Claim {
    priority: f64,
    index: usize,
}

impl Ord for Claim {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| Reverse(self.index).cmp(&Reverse(other.index)))
    }
}

impl PartialOrd for Claim {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Claim {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Claim {}

/// Run the full apportionment and record every seat handed out by priority.
pub fn apportion(records: &[StateRecord], options: &ApportionOptions) -> Result<ApportionmentRun> {
    let state_count = validate(records, options.total_seats)?;

    let populations: Vec<u64> = records.iter().map(|r| r.population as u64).collect();
    let mut seats = vec![1u32; records.len()];

    let mut queue: BinaryHeap<Claim> = populations
        .iter()
        .enumerate()
        .map(|(index, &population)| Claim {
            priority: priority(population, 2),
            index,
        })
        .collect();

    let to_assign = (options.total_seats - state_count) as usize;
    let mut events = Vec::with_capacity(to_assign);

    while events.len() < to_assign {
        let claim = match queue.pop() {
            Some(claim) => claim,
            None => break,
        };
        let index = claim.index;
        seats[index] += 1;

        events.push(SeatEvent {
            seat: state_count + events.len() as u32 + 1,
            state: records[index].name.clone(),
            state_index: index,
            priority: claim.priority,
            state_seats: seats[index],
        });

        queue.push(Claim {
            priority: priority(populations[index], seats[index] + 1),
            index,
        });
    }

    let states = records
        .iter()
        .zip(populations.iter().zip(seats.iter()))
        .map(|(record, (&population, &seats))| StateAllocation {
            name: record.name.clone(),
            population,
            seats,
            pop_per_rep: population as f64 / f64::from(seats),
            next_priority: priority(population, seats + 1),
        })
        .collect();

    Ok(ApportionmentRun {
        total_seats: options.total_seats,
        states,
        events,
    })
}

/// Check the input before any seat is handed out. Returns the state count.
pub fn validate(records: &[StateRecord], total_seats: u32) -> Result<u32> {
    if records.is_empty() {
        return Err(ApportionError::InvalidInput(
            "population data contains no states".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for record in records {
        if record.population <= 0 {
            return Err(ApportionError::InvalidInput(format!(
                "population of {} must be positive, got {}",
                record.name, record.population
            )));
        }
        if !seen.insert(record.name.as_str()) {
            return Err(ApportionError::InvalidInput(format!(
                "state {} appears more than once",
                record.name
            )));
        }
    }

    let state_count = u32::try_from(records.len()).map_err(|_| {
        ApportionError::InvalidInput(format!("too many states: {}", records.len()))
    })?;

    if total_seats < state_count {
        return Err(ApportionError::InvalidInput(format!(
            "{} seats cannot cover {} states with one guaranteed seat each",
            total_seats, state_count
        )));
    }

    Ok(state_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(&str, i64)]) -> Vec<StateRecord> {
        rows.iter()
            .map(|(name, population)| StateRecord::new(*name, *population))
            .collect()
    }

    fn seats(total_seats: u32) -> ApportionOptions {
        ApportionOptions { total_seats }
    }

    #[test]
    fn worked_example() {
        let input = records(&[("A", 1000), ("B", 900), ("C", 100)]);
        let run = apportion(&input, &seats(5)).unwrap();

        assert_eq!(run.events.len(), 2);

        assert_eq!(run.events[0].seat, 4);
        assert_eq!(run.events[0].state, "A");
        assert!((run.events[0].priority - 707.1068).abs() < 1e-3);

        assert_eq!(run.events[1].seat, 5);
        assert_eq!(run.events[1].state, "B");
        assert!((run.events[1].priority - 636.3961).abs() < 1e-3);

        assert_eq!(run.seats_for("A"), Some(2));
        assert_eq!(run.seats_for("B"), Some(2));
        assert_eq!(run.seats_for("C"), Some(1));
        assert!((run.states[0].next_priority - 1000.0 / 6f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn priority_formula() {
        assert!((priority(1000, 2) - 1000.0 / 2f64.sqrt()).abs() < 1e-9);
        assert!((priority(1000, 3) - 1000.0 / 6f64.sqrt()).abs() < 1e-9);
        assert!(priority(1000, 1).is_infinite());
    }

    #[test]
    fn seats_sum_to_total_and_every_state_keeps_one() {
        let input = records(&[
            ("Alpha", 39_538_223),
            ("Beta", 29_145_505),
            ("Gamma", 21_538_187),
            ("Delta", 576_851),
            ("Epsilon", 643_077),
            ("Zeta", 8_000_000),
        ]);
        let run = apportion(&input, &seats(100)).unwrap();

        assert_eq!(run.states.iter().map(|s| s.seats).sum::<u32>(), 100);
        assert!(run.states.iter().all(|s| s.seats >= 1));
        assert_eq!(run.events.len(), 100 - input.len());
        assert!(run
            .events
            .iter()
            .all(|e| input[e.state_index].name == e.state));
    }

    #[test]
    fn seat_counts_never_decrease_and_priorities_never_rise() {
        let input = records(&[("A", 5_000), ("B", 3_100), ("C", 1_700), ("D", 260)]);
        let run = apportion(&input, &seats(40)).unwrap();

        let mut counts = vec![1u32; input.len()];
        for (offset, event) in run.events.iter().enumerate() {
            assert_eq!(event.seat, input.len() as u32 + offset as u32 + 1);
            counts[event.state_index] += 1;
            assert_eq!(counts[event.state_index], event.state_seats);
        }
        for pair in run.events.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
        assert_eq!(counts, run.states.iter().map(|s| s.seats).collect::<Vec<_>>());
    }

    #[test]
    fn identical_input_gives_identical_run() {
        let input = records(&[("A", 7_919), ("B", 6_007), ("C", 2_003)]);
        let first = apportion(&input, &seats(25)).unwrap();
        let second = apportion(&input, &seats(25)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ties_go_to_earlier_input() {
        let input = records(&[("B", 500), ("A", 500), ("C", 500)]);
        let run = apportion(&input, &seats(5)).unwrap();
        assert_eq!(run.events[0].state, "B");
        assert_eq!(run.events[1].state, "A");
        assert_eq!(run.seats_for("C"), Some(1));
    }

    #[test]
    fn exact_seat_count_assigns_nothing() {
        let input = records(&[("A", 10), ("B", 20)]);
        let run = apportion(&input, &seats(2)).unwrap();
        assert!(run.events.is_empty());
        assert!(run.states.iter().all(|s| s.seats == 1));
    }

    #[test]
    fn default_is_full_house() {
        assert_eq!(ApportionOptions::default().total_seats, 435);
    }

    #[test]
    fn too_few_seats_is_invalid() {
        let input = records(&[("A", 10), ("B", 20), ("C", 30)]);
        assert!(matches!(
            apportion(&input, &seats(2)),
            Err(ApportionError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(
            apportion(&[], &seats(435)),
            Err(ApportionError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_positive_population_is_invalid() {
        for population in &[0, -12] {
            let input = records(&[("A", 10), ("B", *population)]);
            assert!(matches!(
                apportion(&input, &seats(4)),
                Err(ApportionError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn duplicate_names_are_invalid() {
        let input = records(&[("A", 10), ("A", 20)]);
        assert!(matches!(
            apportion(&input, &seats(4)),
            Err(ApportionError::InvalidInput(_))
        ));
    }
}
