//! The fetch boundary: whatever goes wrong upstream, callers get a
//! [`Dataset`] they can render.

use crate::{FetchError, ValuesSource};
use sheetview_core::{normalize_response, NormalizeError, Record};
use tracing::{error, info, warn};

/// A message for the page viewer explaining why no (or no fresh) data is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }

    fn fetch_failed(err: &FetchError) -> Self {
        Self(format!("Error fetching data: {err}"))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizeError> for Notice {
    fn from(err: NormalizeError) -> Self {
        Self(err.to_string())
    }
}

impl From<FetchError> for Notice {
    fn from(err: FetchError) -> Self {
        Self::fetch_failed(&err)
    }
}

/// Normalised records for one render, plus a notice when they could not be
/// obtained. A dataset with a notice always has no records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub notice: Option<Notice>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            notice: None,
        }
    }

    /// An empty dataset carrying `notice`.
    pub fn failed(notice: impl Into<Notice>) -> Self {
        Self {
            records: Vec::new(),
            notice: Some(notice.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.notice.is_none()
    }
}

/// Fetch once from `source` and normalise. Never fails: errors are logged and
/// come back as [`Dataset::notice`].
pub async fn load_dataset<S: ValuesSource>(source: &S) -> Dataset {
    let response = match source.fetch_values().await {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "fetching sheet values failed");
            return Dataset::failed(err);
        }
    };

    match normalize_response(&response) {
        Ok(records) => {
            info!(records = records.len(), "normalised sheet");
            Dataset::from_records(records)
        }
        Err(err) => {
            warn!(error = %err, "sheet response had no values");
            Dataset::failed(err)
        }
    }
}
