//! sheetview — render Google Sheets rows as a self-contained dashboard page.
//!
//! The binary and the integration harnesses share the pieces exposed here.
//!
//! # Architecture
//!
//! ```text
//! Config ──► SheetsClient ──► load_dataset ──► render_page ──► HTML
//!                                   │
//!                                   └──────────► /data (JSON)
//! ```
//!
//! Every page load fetches and normalises from scratch; nothing is cached.

pub mod server;

pub use sheetview_core::config::{Config, PageConfig, SheetsConfig};
pub use sheetview_core::{CellValue, Record, ValuesResponse};
pub use sheetview_page::render_page;
pub use sheetview_sheets::{load_dataset, Dataset, Notice, SheetsClient, ValuesSource};

/// Build the Sheets client for `config`, or the notice to show instead when
/// the configuration is unusable.
pub fn client_from_config(config: &SheetsConfig) -> Result<SheetsClient, Notice> {
    SheetsClient::new(config.clone()).map_err(|err| {
        tracing::warn!(error = %err, "sheets client unavailable");
        Notice::from(err)
    })
}

/// One fetch-and-normalise pass for the CLI paths.
pub async fn fetch_dataset(config: &SheetsConfig) -> Dataset {
    match client_from_config(config) {
        Ok(client) => load_dataset(&client).await,
        Err(notice) => Dataset::failed(notice),
    }
}
