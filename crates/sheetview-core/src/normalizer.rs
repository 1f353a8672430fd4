//! Normalizer — turns a raw cell grid into typed [`Record`] values.
//!
//! Row 0 supplies field names, row 1 is a human-written documentation row and
//! is dropped, every later row becomes one record. Cells are typed one at a
//! time by [`coerce_cell`]; a column may mix numbers and text.

use crate::types::{CellValue, Record, ValuesResponse};
use std::collections::HashSet;

/// Rows before the first data row: header plus documentation row.
pub const HEADER_ROWS: usize = 2;

/// Failure to find a grid in a values response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("No data values found in sheet response")]
    MissingValues,
}

/// Coerce one cell to a [`CellValue`].
///
/// A cell is numeric when, after trimming, it is non-empty and consists only
/// of decimal digits (Unicode `Nd`, so `٤٢` and `４２` count) once a single `.`
/// is removed. Anything else, including `-42`, `1e5`, `1,000`, `½` and `²`,
/// is kept verbatim as text. A cell that passes the digit check but does not
/// parse to a finite `f64` is also kept as text.
pub fn coerce_cell(raw: &str) -> CellValue {
    let Some(digits) = ascii_digits(raw.trim()) else {
        return CellValue::Text(raw.to_string());
    };
    match digits.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(raw.to_string()),
    }
}

/// `trimmed` respelled with ASCII digits, or `None` unless it is decimal
/// digits with at most one `.` somewhere among them.
fn ascii_digits(trimmed: &str) -> Option<String> {
    let mut out = String::with_capacity(trimmed.len());
    let mut seen_dot = false;
    for c in trimmed.chars() {
        if c == '.' && !seen_dot {
            seen_dot = true;
            out.push('.');
            continue;
        }
        let digit = decimal_value(c)?;
        out.push(char::from_digit(digit, 10)?);
    }
    (out.len() > usize::from(seen_dot)).then_some(out)
}

/// First code point of every run of ten `Nd` digits outside ASCII, sorted.
const DIGIT_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810,
    0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0,
    0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730,
    0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50,
    0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950,
    0x1FBF0,
];

/// Value of `c` as a decimal digit, in any script.
fn decimal_value(c: char) -> Option<u32> {
    if c.is_ascii() {
        return c.to_digit(10);
    }
    let cp = u32::from(c);
    let run = DIGIT_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let offset = cp - DIGIT_ZEROS[run];
    (offset < 10).then_some(offset)
}

/// Normalise a grid into records, one per data row.
///
/// Grids with fewer than [`HEADER_ROWS`] rows produce no records. Every record
/// carries exactly one entry per header column: cells past the header width
/// are ignored and cells missing from short rows become [`CellValue::Null`].
/// When a header name repeats, the later column's value wins and the field
/// stays where the name first appeared.
pub fn normalize_grid(grid: &[Vec<String>]) -> Vec<Record> {
    let Some(headers) = grid.first() else {
        return Vec::new();
    };
    let unique = headers.iter().collect::<HashSet<_>>().len() == headers.len();

    grid.iter()
        .skip(HEADER_ROWS)
        .map(|row| {
            let mut record = Record::with_capacity(headers.len());
            for (i, header) in headers.iter().enumerate() {
                let value = row.get(i).map_or(CellValue::Null, |cell| coerce_cell(cell));
                if unique {
                    record.push_new(header.as_str(), value);
                } else {
                    record.insert(header.as_str(), value);
                }
            }
            record
        })
        .collect()
}

/// Normalise the grid carried by a values response.
///
/// A response without a `values` field is reported as
/// [`NormalizeError::MissingValues`] so the caller can surface a notice.
pub fn normalize_response(response: &ValuesResponse) -> Result<Vec<Record>, NormalizeError> {
    response
        .values
        .as_deref()
        .map(normalize_grid)
        .ok_or(NormalizeError::MissingValues)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
