use super::{group_thousands, group_thousands_f64};
use apportionment::apportion::{self as engine, ApportionOptions};
use apportionment::formats::{read_population, ReaderOptions};
use apportionment::model::ApportionmentRun;
use apportionment::report::build_report;
use apportionment::util::{hash_file, write_serialized};
use colored::*;
use instant::Instant;
use itertools::Itertools;
use std::error::Error;
use std::path::Path;

pub fn apportion(
    input: &Path,
    reader: &ReaderOptions,
    options: &ApportionOptions,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    println!(
        "🚀 Apportioning {} seats from {}",
        options.total_seats.to_string().bright_cyan(),
        input.display().to_string().bright_cyan()
    );

    let start = Instant::now();
    let records = read_population(input, reader)?;
    let run = engine::apportion(&records, options)?;
    let elapsed = start.elapsed();

    print_allocation(&run);

    if let Some(output) = output {
        let report = build_report(&run, &input.display().to_string(), Some(hash_file(input)?));
        write_serialized(output, &report)?;
        println!(
            "📝 Report written to {}",
            output.display().to_string().bright_green()
        );
    }

    println!(
        "✅ {} states, {} seats by priority in {:.3} ms",
        run.states.len().to_string().bright_green().bold(),
        run.events.len().to_string().bright_green().bold(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}

fn print_allocation(run: &ApportionmentRun) {
    println!("\n{}", "📊 Final Allocation".bright_cyan().bold());
    println!("{}", "=".repeat(72).bright_cyan());
    println!(
        "{:<24} {:>14} {:>6} {:>16} {:>8}",
        "State".bright_white().bold(),
        "Population".bright_white().bold(),
        "Seats".bright_white().bold(),
        "People/Rep".bright_white().bold(),
        "Share".bright_white().bold()
    );

    let total_population = run.total_population() as f64;
    for state in run
        .states
        .iter()
        .sorted_by(|a, b| b.seats.cmp(&a.seats).then_with(|| a.name.cmp(&b.name)))
    {
        println!(
            "{:<24} {:>14} {:>6} {:>16} {:>7.2}%",
            state.name,
            group_thousands(state.population),
            state.seats.to_string().bright_yellow(),
            group_thousands_f64(state.pop_per_rep),
            state.population as f64 * 100.0 / total_population
        );
    }
    println!("{}", "-".repeat(72).bright_cyan());

    if let Some(last) = run.events.last() {
        println!(
            "{}: #{} to {} (priority {})",
            "Last Seat".bright_white().bold(),
            last.seat,
            last.state.bright_yellow(),
            group_thousands_f64(last.priority)
        );
    }

    // Highest priority left without a seat.
    if let Some(runner_up) = run
        .states
        .iter()
        .max_by(|a, b| a.next_priority.total_cmp(&b.next_priority))
    {
        println!(
            "{}: {} (priority {})",
            "Next In Line".bright_white().bold(),
            runner_up.name.bright_yellow(),
            group_thousands_f64(runner_up.next_priority)
        );
    }
    println!();
}
