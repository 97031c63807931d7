use super::group_thousands_f64;
use apportionment::apportion::replay::Playback;
use apportionment::apportion::{apportion, ApportionOptions};
use apportionment::formats::{read_population, ReaderOptions};
use colored::*;
use std::error::Error;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Print the seat events one by one, `interval` apart.
///
/// `from_seat` skips ahead silently to the given seat number.
pub fn replay(
    input: &Path,
    reader: &ReaderOptions,
    options: &ApportionOptions,
    interval: Duration,
    from_seat: Option<u32>,
) -> Result<(), Box<dyn Error>> {
    let records = read_population(input, reader)?;
    let run = apportion(&records, options)?;

    let mut playback = Playback::new(&run);
    if let Some(seat) = from_seat {
        let first_seat = run.guaranteed_seats() + 1;
        playback.seek(seat.saturating_sub(first_seat) as usize);
    }

    println!(
        "🎬 Replaying {} of {} seats ({} guaranteed)",
        (playback.len() - playback.position()).to_string().bright_cyan(),
        run.total_seats.to_string().bright_cyan(),
        run.guaranteed_seats()
    );

    while let Some(event) = playback.step_forward() {
        let stats = playback.snapshot_stats();
        println!(
            "Seat# {:>4}  {:<24} priority {:>16}  seats {:>3}{}",
            event.seat.to_string().bright_white().bold(),
            event.state.bright_yellow(),
            group_thousands_f64(event.priority),
            event.state_seats,
            stats
                .map(|s| format!(
                    "  mean {}  std. dev. {}  range {}  geo. mean {}",
                    group_thousands_f64(s.mean),
                    group_thousands_f64(s.std_dev),
                    group_thousands_f64(s.range),
                    group_thousands_f64(s.geometric_mean)
                ))
                .unwrap_or_default()
        );

        if !playback.is_finished() && !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    println!("✅ {}", "Replay complete".bright_green());
    Ok(())
}
