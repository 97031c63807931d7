use super::{ReaderOptions, RowParser};
use crate::model::StateRecord;
use crate::{ApportionError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_csv_file(path: &Path, options: &ReaderOptions) -> Result<Vec<StateRecord>> {
    let file = File::open(path)?;
    read_csv(file, options)
}

/// Read `name,population` rows. Field count is checked per row by
/// `RowParser`, so the reader itself runs in flexible mode.
pub fn read_csv<R: Read>(source: R, options: &ReaderOptions) -> Result<Vec<StateRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut parser = RowParser::new();

    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ApportionError::MalformedData(e.to_string()))?;
        if i == 0 && options.has_header {
            continue;
        }

        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);
        let cells: Vec<&str> = record.iter().collect();
        parser.push_row(row, &cells)?;
    }

    Ok(parser.finish())
}
