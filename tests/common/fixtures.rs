//! Static sheet corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static [&'static str]]`: row 0 is the header,
//! row 1 the documentation row, the rest data. Convert with [`to_grid`].

/// The two-column example used throughout the docs.
pub const SHEET_SCORES: &[&[&str]] = &[
    &["Name", "Score"],
    &["n/a", "n/a"],
    &["Alice", "10"],
    &["Bob"],
];

/// A research-catalogue sheet: ragged rows, mixed columns, multi-line text.
pub const SHEET_CATALOGUE: &[&[&str]] = &[
    &["paper", "authors", "year", "num parameters", "num simulations", "research area"],
    &[
        "Title of the paper",
        "Last, First; Last, First",
        "Publication year",
        "Dimensionality of the parameter space",
        "Simulation budget",
        "statistics, astrophysics, neuroscience, ...",
    ],
    &["Neural posterior estimation", "Smith, A.; Jones, B.", "2020", "5", "10000", "statistics"],
    &["Gravitational waves", "Lee, C.", "2021", "15", "1e6", "astrophysics"],
    &["Cortical circuits", "Kim, D.\nPark, E.\nCho, F.", "2019", "31", "", "neuroscience"],
    &["Unfinished entry", "Doe, J."],
    &["Climate emulator", "Ng, G.", "2022", "-3", "2.5.1", "climate science", "stray cell"],
];

/// Header and documentation row only.
pub const SHEET_NO_DATA: &[&[&str]] = &[&["a", "b"], &["doc a", "doc b"]];

/// Convert a static corpus into an owned grid.
pub fn to_grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// The JSON body the values endpoint returns for `rows`.
pub fn values_body(rows: &[&[&str]]) -> serde_json::Value {
    serde_json::json!({
        "range": "'dev'!B1:P100000",
        "majorDimension": "ROWS",
        "values": rows,
    })
}
