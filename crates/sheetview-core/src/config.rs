//! Configuration types for sheetview.
//!
//! [`Config::load`] layers three sources, later ones winning:
//!
//! 1. the built-in defaults below,
//! 2. the environment (`GOOGLE_API_KEY`, `SPREADSHEET_ID`,
//!    `SPREADSHEET_RANGE`, `PORT`),
//! 3. the secrets file, normally `.streamlit/secrets.toml` under the working
//!    directory.
//!
//! [`Config::defaults`] returns the built-in defaults without touching the
//! filesystem or the environment (useful in tests).

use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[google_sheets]
api_key        = ""
spreadsheet_id = ""
range          = "'dev'!B1:P100000"
base_url       = "https://sheets.googleapis.com/v4/spreadsheets"

[page]
title  = "Sheet dashboard"
height = 600

[server]
host = "127.0.0.1"
port = 3000
"#;

/// Where the secrets file is looked for when no path is given.
pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";

/// Environment variable → config key (with `__` as the section separator).
const ENV_KEYS: &[(&str, &str)] = &[
    ("GOOGLE_API_KEY", "GOOGLE_SHEETS__API_KEY"),
    ("SPREADSHEET_ID", "GOOGLE_SHEETS__SPREADSHEET_ID"),
    ("SPREADSHEET_RANGE", "GOOGLE_SHEETS__RANGE"),
    ("PORT", "SERVER__PORT"),
];

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub google_sheets: SheetsConfig,
    pub page: PageConfig,
    pub server: ServerConfig,
}

/// `[google_sheets]` section: everything the values client needs.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct SheetsConfig {
    pub api_key: String,
    pub spreadsheet_id: String,
    /// A1-notation range, e.g. `'dev'!B1:P100000`.
    pub range: String,
    /// Base of the spreadsheets collection. Overridden in tests to point at a
    /// local fake.
    pub base_url: String,
}

/// `[page]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    /// Minimum height of the chart container, in CSS pixels.
    pub height: u32,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// A configuration that cannot be used to reach the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing Google API key (set GOOGLE_API_KEY or google_sheets.api_key)")]
    MissingApiKey,
    #[error("missing spreadsheet id (set SPREADSHEET_ID or google_sheets.spreadsheet_id)")]
    MissingSpreadsheetId,
}

impl SheetsConfig {
    pub fn new(
        api_key: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
            ..Config::defaults().google_sheets
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Both credentials must be present before a request is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::MissingSpreadsheetId);
        }
        Ok(())
    }

    /// First five characters of the API key, for log lines.
    pub fn masked_key(&self) -> String {
        mask(&self.api_key)
    }

    pub fn masked_spreadsheet_id(&self) -> String {
        mask(&self.spreadsheet_id)
    }
}

// The key must never reach logs through a derived Debug.
impl std::fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("api_key", &self.masked_key())
            .field("spreadsheet_id", &self.masked_spreadsheet_id())
            .field("range", &self.range)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let prefix: String = secret.chars().take(5).collect();
    format!("{prefix}...")
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load using the process environment and the secrets file at `secrets`.
    /// A missing secrets file is not an error.
    pub fn load(secrets: &Path) -> anyhow::Result<Self> {
        Self::from_sources(secrets, std::env::vars())
    }

    /// Load from an explicit environment instead of the process one.
    pub fn from_sources(
        secrets: &Path,
        env: impl IntoIterator<Item = (String, String)>,
    ) -> anyhow::Result<Self> {
        let env: config::Map<String, String> = env
            .into_iter()
            .filter_map(|(name, value)| {
                ENV_KEYS
                    .iter()
                    .find(|(var, _)| *var == name)
                    .map(|(_, key)| (key.to_string(), value))
            })
            .collect();

        let secrets = secrets.to_string_lossy();
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .ignore_empty(true)
                    .source(Some(env)),
            )
            .add_source(config::File::new(&secrets, config::FileFormat::Toml).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
