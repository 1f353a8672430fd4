//! sheetview-core — shared types, configuration and the sheet normalizer.
//!
//! # Architecture
//!
//! ```text
//! Sheets API ──► ValuesResponse ──► normalizer ──► Vec<Record> ──► page / JSON
//! ```
//!
//! Everything here is synchronous and free of I/O except [`config::Config::load`].

pub mod config;
pub mod normalizer;
pub mod types;

pub use normalizer::{coerce_cell, normalize_grid, normalize_response, NormalizeError};
pub use types::{CellValue, RawGrid, Record, ValuesResponse};
