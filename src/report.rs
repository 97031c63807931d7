use crate::apportion::stats::{representation_stats, RepresentationStats};
use crate::model::{ApportionmentRun, SeatEvent, StateAllocation};
use serde::{Deserialize, Serialize};

pub const METHOD_NAME: &str = "huntington-hill";

/// Full apportionment report as written to JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ApportionmentReport {
    pub info: ReportInfo,
    pub states: Vec<StateAllocation>,
    pub events: Vec<SeatEvent>,
    pub summary: ReportSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportInfo {
    pub source: String,
    #[serde(rename = "sourceHash")]
    pub source_hash: Option<String>,
    pub method: String,
    #[serde(rename = "totalSeats")]
    pub total_seats: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(rename = "stateCount")]
    pub state_count: usize,
    #[serde(rename = "totalPopulation")]
    pub total_population: u64,
    #[serde(rename = "seatsByPriority")]
    pub seats_by_priority: usize,
    /// Last seat handed out, the one decided by the smallest margin.
    #[serde(rename = "lastSeat")]
    pub last_seat: Option<SeatEvent>,
    #[serde(rename = "popPerRep")]
    pub pop_per_rep: Option<RepresentationStats>,
}

pub fn build_report(
    run: &ApportionmentRun,
    source: &str,
    source_hash: Option<String>,
) -> ApportionmentReport {
    let pop_per_rep: Vec<f64> = run.states.iter().map(|s| s.pop_per_rep).collect();

    let summary = ReportSummary {
        state_count: run.states.len(),
        total_population: run.total_population(),
        seats_by_priority: run.events.len(),
        last_seat: run.events.last().cloned(),
        pop_per_rep: representation_stats(&pop_per_rep),
    };

    ApportionmentReport {
        info: ReportInfo {
            source: source.to_string(),
            source_hash,
            method: METHOD_NAME.to_string(),
            total_seats: run.total_seats,
        },
        states: run.states.clone(),
        events: run.events.clone(),
        summary,
    }
}
