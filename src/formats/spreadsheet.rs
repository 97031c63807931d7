use super::{ReaderOptions, RowParser};
use crate::model::StateRecord;
use crate::{ApportionError, Result};
use calamine::{open_workbook_auto, DataType, Range, Reader};
use std::path::Path;

/// Read the first sheet of a workbook as a `name, population` table.
pub fn read_spreadsheet(path: &Path, options: &ReaderOptions) -> Result<Vec<StateRecord>> {
    let mut workbook = open_workbook_auto(path)?;
    let first_sheet = workbook.sheet_names().first().cloned().ok_or_else(|| {
        ApportionError::MalformedData(format!("{} contains no sheets", path.display()))
    })?;

    let sheet = match workbook.worksheet_range(&first_sheet) {
        Some(Ok(sheet)) => sheet,
        Some(Err(e)) => return Err(e.into()),
        None => {
            return Err(ApportionError::MalformedData(format!(
                "sheet {} in {} is empty",
                first_sheet,
                path.display()
            )))
        }
    };

    read_range(&sheet, options)
}

pub fn read_range(sheet: &Range<DataType>, options: &ReaderOptions) -> Result<Vec<StateRecord>> {
    let mut parser = RowParser::new();
    // Row numbers as shown by spreadsheet applications.
    let first_row = sheet.start().map(|(row, _)| row as usize + 1).unwrap_or(1);

    for (i, row) in sheet.rows().enumerate() {
        if i == 0 && options.has_header {
            continue;
        }

        let texts: Vec<String> = row.iter().map(cell_text).collect();
        // The range is as wide as its widest row; drop the padding.
        let width = texts
            .iter()
            .rposition(|t| !t.trim().is_empty())
            .map_or(0, |last| last + 1);
        let cells: Vec<&str> = texts[..width].iter().map(String::as_str).collect();

        parser.push_row(first_row + i, &cells)?;
    }

    Ok(parser.finish())
}

fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        DataType::Int(value) => value.to_string(),
        DataType::Float(value) if value.fract() == 0.0 => format!("{:.0}", value),
        other => other.to_string(),
    }
}
