//! Stepping through a finished run.
//!
//! The event log is computed up front; a `Playback` only moves a cursor
//! over it, so pacing, pausing and rewinding are left to the caller.

use super::stats::{pop_per_rep, representation_stats, RepresentationStats};
use crate::model::{ApportionmentRun, SeatEvent};

pub struct Playback<'a> {
    run: &'a ApportionmentRun,
    populations: Vec<u64>,
    seats: Vec<u32>,
    position: usize,
}

impl<'a> Playback<'a> {
    /// Start at the guaranteed allocation, before any event.
    pub fn new(run: &'a ApportionmentRun) -> Self {
        Self {
            run,
            populations: run.states.iter().map(|s| s.population).collect(),
            seats: vec![1; run.states.len()],
            position: 0,
        }
    }

    /// Number of events already applied.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.run.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.run.events.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.run.events.len()
    }

    pub fn step_forward(&mut self) -> Option<&'a SeatEvent> {
        let event = self.run.events.get(self.position)?;
        self.seats[event.state_index] += 1;
        self.position += 1;
        Some(event)
    }

    /// Undo the most recent event and return it.
    pub fn step_back(&mut self) -> Option<&'a SeatEvent> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        let event = &self.run.events[self.position];
        self.seats[event.state_index] -= 1;
        Some(event)
    }

    /// Move so that `position` events are applied, clamped to the log.
    pub fn seek(&mut self, position: usize) {
        let target = position.min(self.run.events.len());
        while self.position < target {
            self.step_forward();
        }
        while self.position > target {
            self.step_back();
        }
    }

    pub fn rewind(&mut self) {
        self.seek(0);
    }

    pub fn current_seats(&self) -> &[u32] {
        &self.seats
    }

    /// Most recently applied event.
    pub fn last_event(&self) -> Option<&'a SeatEvent> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.run.events.get(i))
    }

    /// Event that will be applied next, i.e. the current priority leader.
    pub fn next_event(&self) -> Option<&'a SeatEvent> {
        self.run.events.get(self.position)
    }

    pub fn snapshot_stats(&self) -> Option<RepresentationStats> {
        representation_stats(&pop_per_rep(&self.populations, &self.seats))
    }
}
