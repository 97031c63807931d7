use super::group_thousands;
use apportionment::apportion::validate;
use apportionment::formats::{read_population, ReaderOptions};
use colored::Colorize;
use itertools::Itertools;
use std::error::Error;
use std::path::Path;

/// Validate a population table and dump it, largest state first.
pub fn info(input: &Path, reader: &ReaderOptions) -> Result<(), Box<dyn Error>> {
    println!("🔍 Reading {}", input.display().to_string().cyan());

    let records = read_population(input, reader)?;
    let state_count = validate(&records, u32::MAX)?;
    let total: u64 = records.iter().map(|r| r.population as u64).sum();

    for (rank, record) in records
        .iter()
        .sorted_by(|a, b| b.population.cmp(&a.population).then_with(|| a.name.cmp(&b.name)))
        .enumerate()
    {
        println!(
            "{:>4}. {:<24} {:>14} {:>6.2}%",
            rank + 1,
            record.name,
            group_thousands(record.population as u64),
            record.population as f64 * 100.0 / total as f64
        );
    }

    println!(
        "✅ {} states, total population {}",
        state_count.to_string().bright_green(),
        group_thousands(total).bright_green()
    );

    Ok(())
}
