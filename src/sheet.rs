// src/sheet.rs
// First worksheet -> header row + Option<String> cells. Values come out the
// way a spreadsheet UI would display them; blank and error cells are None.

use std::error::Error;
use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Parse the first worksheet of an Excel file held in memory.
pub fn parse_first_sheet(bytes: &[u8]) -> Result<SheetTable, Box<dyn Error>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let names = workbook.sheet_names();
    let name = names.first().cloned().ok_or("workbook has no sheets")?;
    let range = workbook.worksheet_range(&name)?;

    let mut rows_iter = range.rows();
    let headers = match rows_iter.next() {
        Some(row) => row
            .iter()
            .map(|c| cell_to_string(c).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    };
    let rows = rows_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(SheetTable { headers, rows })
}

/// Display-style cell text. Integral floats drop the decimal point; the
/// sheet stores ZIP and district numbers as numeric cells.
pub fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(s!(if *b { "TRUE" } else { "FALSE" })),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_float_renders_without_decimal_point() {
        assert_eq!(cell_to_string(&Data::Float(10001.0)).as_deref(), Some("10001"));
        assert_eq!(cell_to_string(&Data::Float(0.0)).as_deref(), Some("0"));
    }

    #[test]
    fn fractional_float_keeps_its_digits() {
        assert_eq!(cell_to_string(&Data::Float(0.5)).as_deref(), Some("0.5"));
    }

    #[test]
    fn blank_and_error_cells_are_none() {
        assert_eq!(cell_to_string(&Data::Empty), None);
        assert_eq!(
            cell_to_string(&Data::Error(calamine::CellErrorType::NA)),
            None
        );
    }

    #[test]
    fn text_passes_through_verbatim() {
        let c = Data::String(s!(" NEW YORK "));
        assert_eq!(cell_to_string(&c).as_deref(), Some(" NEW YORK "));
    }
}
