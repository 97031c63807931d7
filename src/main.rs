mod commands;

use crate::commands::{apportion, info, replay};
use apportionment::apportion::{ApportionOptions, DEFAULT_TOTAL_SEATS};
use apportionment::formats::ReaderOptions;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[clap(about = "Huntington–Hill apportionment of House seats")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and dump a population table.
    Info {
        /// Population table (.csv, .xlsx, .xls or .ods)
        input: PathBuf,
        /// The first row is data, not column labels
        #[clap(long)]
        no_header: bool,
    },
    /// Compute the final allocation.
    Apportion {
        /// Population table (.csv, .xlsx, .xls or .ods)
        input: PathBuf,
        /// Total number of seats to distribute
        #[clap(long, default_value_t = DEFAULT_TOTAL_SEATS)]
        seats: u32,
        /// The first row is data, not column labels
        #[clap(long)]
        no_header: bool,
        /// Write a JSON report to this path
        #[clap(long)]
        output: Option<PathBuf>,
    },
    /// Step through the seat assignments one at a time.
    Replay {
        /// Population table (.csv, .xlsx, .xls or .ods)
        input: PathBuf,
        /// Total number of seats to distribute
        #[clap(long, default_value_t = DEFAULT_TOTAL_SEATS)]
        seats: u32,
        /// The first row is data, not column labels
        #[clap(long)]
        no_header: bool,
        /// Delay between seats in milliseconds
        #[clap(long, default_value_t = 170)]
        interval_ms: u64,
        /// Skip ahead to this seat number
        #[clap(long)]
        from: Option<u32>,
    },
}

fn reader_options(no_header: bool) -> ReaderOptions {
    ReaderOptions {
        has_header: !no_header,
    }
}

fn main() {
    let opts = Opts::parse();

    let result = match opts.command {
        Command::Info { input, no_header } => info(&input, &reader_options(no_header)),
        Command::Apportion {
            input,
            seats,
            no_header,
            output,
        } => apportion(
            &input,
            &reader_options(no_header),
            &ApportionOptions { total_seats: seats },
            output.as_deref(),
        ),
        Command::Replay {
            input,
            seats,
            no_header,
            interval_ms,
            from,
        } => replay(
            &input,
            &reader_options(no_header),
            &ApportionOptions { total_seats: seats },
            Duration::from_millis(interval_ms),
            from,
        ),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e.to_string().red());
        std::process::exit(1);
    }
}
