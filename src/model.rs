use serde::{Deserialize, Serialize};

/// A row of the population table, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    pub name: String,
    pub population: i64,
}

impl StateRecord {
    pub fn new(name: impl Into<String>, population: i64) -> StateRecord {
        StateRecord {
            name: name.into(),
            population,
        }
    }
}

/// One seat handed out by priority. Seat numbers continue after the
/// guaranteed seats, so the first event of a 50 state run is seat 51.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatEvent {
    pub seat: u32,
    pub state: String,
    pub state_index: usize,
    pub priority: f64,
    /// Recipient's seat count after this assignment.
    pub state_seats: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateAllocation {
    pub name: String,
    pub population: u64,
    pub seats: u32,
    pub pop_per_rep: f64,
    /// Priority value this state would claim its next seat with.
    pub next_priority: f64,
}

/// Finished apportionment: final allocation plus the ordered event log.
#[derive(Debug, Clone, PartialEq)]
pub struct ApportionmentRun {
    pub total_seats: u32,
    pub states: Vec<StateAllocation>,
    pub events: Vec<SeatEvent>,
}

impl ApportionmentRun {
    /// Number of seats every state held before any event.
    pub fn guaranteed_seats(&self) -> u32 {
        self.states.len() as u32
    }

    pub fn total_population(&self) -> u64 {
        self.states.iter().map(|s| s.population).sum()
    }

    pub fn seats_for(&self, name: &str) -> Option<u32> {
        self.states.iter().find(|s| s.name == name).map(|s| s.seats)
    }
}
