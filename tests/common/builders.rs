//! Test builders — ergonomic constructors for grids and expected records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use sheetview::{CellValue, Record, SheetsConfig};

// ---------------------------------------------------------------------------
// GridBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw grids.
///
/// # Example
///
/// ```rust
/// let grid = GridBuilder::new(&["Name", "Score"])
///     .row(&["Alice", "10"])
///     .row(&["Bob"])
///     .build();
/// ```
pub struct GridBuilder {
    rows: Vec<Vec<String>>,
}

impl GridBuilder {
    /// Start a grid with `header` and a placeholder documentation row.
    pub fn new(header: &[&str]) -> Self {
        let doc = header.iter().map(|h| format!("about {h}")).collect();
        Self {
            rows: vec![owned(header), doc],
        }
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(owned(cells));
        self
    }

    pub fn build(self) -> Vec<Vec<String>> {
        self.rows
    }
}

fn owned(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an expected record from `(field, value)` pairs.
pub fn record<const N: usize>(pairs: [(&str, CellValue); N]) -> Record {
    pairs.into_iter().collect()
}

pub fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

pub fn text(s: &str) -> CellValue {
    CellValue::from(s)
}

/// A Sheets configuration pointing at a local fake API.
pub fn sheets_config(base_url: &str) -> SheetsConfig {
    SheetsConfig::new("test-api-key", "sheet-123", "'dev'!B1:P100000").with_base_url(base_url)
}
