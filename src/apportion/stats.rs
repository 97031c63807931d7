use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

/// Spread of people-per-representative across states at one point of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentationStats {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub range: f64,
    pub geometric_mean: f64,
}

/// Population over seats for every state.
pub fn pop_per_rep(populations: &[u64], seats: &[u32]) -> Vec<f64> {
    populations
        .iter()
        .zip(seats)
        .map(|(&population, &seats)| population as f64 / f64::from(seats))
        .collect()
}

pub fn representation_stats(values: &[f64]) -> Option<RepresentationStats> {
    let (min, max) = match values.iter().copied().minmax() {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    let geometric_mean = (values.iter().map(|v| v.ln()).sum::<f64>() / count).exp();

    Some(RepresentationStats {
        mean,
        std_dev: variance.sqrt(),
        range: max - min,
        geometric_mean,
    })
}
