use apportionment::apportion::replay::Playback;
use apportionment::apportion::{apportion, ApportionOptions};
use apportionment::formats::{read_population, ReaderOptions};
use apportionment::report::build_report;
use apportionment::ApportionError;
use std::path::Path;

fn data_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data/states_2020.csv"))
}

#[test]
fn full_house_from_census_table() {
    let records = read_population(data_path(), &ReaderOptions::default()).unwrap();
    assert_eq!(records.len(), 50);

    let run = apportion(&records, &ApportionOptions::default()).unwrap();
    assert_eq!(run.states.iter().map(|s| s.seats).sum::<u32>(), 435);
    assert_eq!(run.events.len(), 385);
    assert_eq!(run.events.first().map(|e| e.seat), Some(51));
    assert_eq!(run.events.last().map(|e| e.seat), Some(435));

    // The largest state takes the first seat handed out by priority.
    assert_eq!(run.events[0].state, "California");
    assert_eq!(run.seats_for("Wyoming"), Some(1));
    assert!(run.seats_for("California") > run.seats_for("Texas"));

    let mut playback = Playback::new(&run);
    playback.seek(usize::MAX);
    let final_seats: Vec<u32> = run.states.iter().map(|s| s.seats).collect();
    assert_eq!(playback.current_seats(), final_seats.as_slice());

    let report = build_report(&run, "states_2020.csv", None);
    assert_eq!(report.summary.total_population, 330_759_736);
}

#[test]
fn smaller_house_keeps_guarantees() {
    let records = read_population(data_path(), &ReaderOptions::default()).unwrap();
    let run = apportion(&records, &ApportionOptions { total_seats: 50 }).unwrap();
    assert!(run.events.is_empty());

    let err = apportion(&records, &ApportionOptions { total_seats: 49 }).unwrap_err();
    assert!(matches!(err, ApportionError::InvalidInput(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = read_population(Path::new("no/such/file.csv"), &ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, ApportionError::Io(_)));
}
