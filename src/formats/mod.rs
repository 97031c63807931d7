//! Population table readers.
//!
//! Every format yields rows of exactly two cells, state name then
//! population, which are turned into `StateRecord`s by `RowParser`.

use crate::model::StateRecord;
use crate::{ApportionError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

pub mod delimited;
pub mod spreadsheet;

#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Whether the first row holds column labels instead of data.
    pub has_header: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { has_header: true }
    }
}

/// Read a population table, picking the reader from the file extension.
pub fn read_population(path: &Path, options: &ReaderOptions) -> Result<Vec<StateRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx") | Some("xlsm") | Some("xls") | Some("ods") => {
            spreadsheet::read_spreadsheet(path, options)
        }
        _ => delimited::read_csv_file(path, options),
    }
}

/// Parse a population cell. Accepts plain digits and US thousands grouping.
pub fn parse_population(raw: &str) -> Option<i64> {
    lazy_static! {
        static ref POPULATION_RX: Regex = Regex::new(r"^-?(\d+|\d{1,3}(,\d{3})+)$").unwrap();
    }

    let raw = raw.trim();
    if !POPULATION_RX.is_match(raw) {
        return None;
    }
    raw.replace(',', "").parse().ok()
}

/// Collects rows from any reader and enforces the two column layout.
pub struct RowParser {
    records: Vec<StateRecord>,
}

impl RowParser {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add one row. `row` is 1-based and counts the header when present.
    pub fn push_row(&mut self, row: usize, cells: &[&str]) -> Result<()> {
        if cells.iter().all(|c| c.trim().is_empty()) {
            return Ok(());
        }

        if cells.len() != 2 {
            return Err(ApportionError::MalformedData(format!(
                "row {}: expected 2 columns (name, population), found {}",
                row,
                cells.len()
            )));
        }

        let name = cells[0].trim();
        if name.is_empty() {
            return Err(ApportionError::MalformedData(format!(
                "row {}: state name is empty",
                row
            )));
        }

        let population = parse_population(cells[1]).ok_or_else(|| {
            ApportionError::MalformedData(format!(
                "row {}: population {:?} for {} is not an integer",
                row,
                cells[1].trim(),
                name
            ))
        })?;

        self.records.push(StateRecord::new(name, population));
        Ok(())
    }

    pub fn finish(self) -> Vec<StateRecord> {
        self.records
    }
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new()
    }
}
