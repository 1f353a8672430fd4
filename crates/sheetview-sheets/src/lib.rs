//! sheetview-sheets — the spreadsheet side of sheetview.
//!
//! [`SheetsClient`] talks to the Google Sheets v4 `values` endpoint and returns
//! the raw [`ValuesResponse`]. [`load_dataset`] is the fetch boundary: it runs a
//! [`ValuesSource`], normalises the grid, and turns every failure into a
//! [`Notice`] next to an empty record list so rendering always proceeds.

pub mod client;
pub mod dataset;

use sheetview_core::ValuesResponse;
use std::future::Future;

pub use client::SheetsClient;
pub use dataset::{load_dataset, Dataset, Notice};

/// Anything that can produce a values response. Implemented by
/// [`SheetsClient`] and by in-memory sources in tests.
pub trait ValuesSource: Send + Sync {
    fn fetch_values(&self) -> impl Future<Output = Result<ValuesResponse, FetchError>> + Send;
}

/// Why a values response could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    MissingCredentials(#[from] sheetview_core::config::ConfigError),
    #[error("invalid spreadsheet URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request to the Sheets API failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("Sheets API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("could not decode Sheets API response: {0}")]
    Decode(#[source] reqwest::Error),
}
