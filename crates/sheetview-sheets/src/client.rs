//! HTTP client for `GET {base}/{spreadsheet_id}/values/{range}?key={api_key}`.

use crate::{FetchError, ValuesSource};
use std::fmt;
use reqwest::Client;
use sheetview_core::{config::SheetsConfig, ValuesResponse};
use tracing::{debug, info};
use url::Url;

/// Longest error body kept in [`FetchError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Reads one range of one spreadsheet with an API key.
///
/// Construction validates the configuration and builds the request URL once;
/// every [`fetch_values`](ValuesSource::fetch_values) call then issues a fresh
/// request.
#[derive(Clone)]
pub struct SheetsClient {
    http: Client,
    config: SheetsConfig,
    url: Url,
}

// The URL carries the key in its query, so it is left out. The config's own
// `Debug` masks its credentials.
impl fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Result<Self, FetchError> {
        config.validate()?;
        let url = values_url(&config)?;
        info!(
            api_key = %config.masked_key(),
            spreadsheet_id = %config.masked_spreadsheet_id(),
            range = %config.range,
            "sheets client configured"
        );
        Ok(Self {
            http: Client::new(),
            config,
            url,
        })
    }

    /// Use a preconfigured `reqwest` client (proxies, timeouts, ...).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// The full request URL. Contains the API key; do not log it.
    pub fn values_url(&self) -> &Url {
        &self.url
    }
}

/// Build the values URL for `config`. The range is percent-encoded as a
/// single path segment, so `/` and `?` inside a sheet name are safe.
pub fn values_url(config: &SheetsConfig) -> Result<Url, FetchError> {
    let mut url = Url::parse(&config.base_url)?;
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push(&config.spreadsheet_id)
        .push("values")
        .push(&config.range);
    url.query_pairs_mut().append_pair("key", &config.api_key);
    Ok(url)
}

impl ValuesSource for SheetsClient {
    async fn fetch_values(&self) -> Result<ValuesResponse, FetchError> {
        debug!(range = %self.config.range, "requesting sheet values");

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e.without_url(), "could not read error body");
                    String::new()
                }
            };
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(FetchError::Status { status, body });
        }

        let values = response
            .json::<ValuesResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.without_url()))?;
        debug!(
            rows = values.values.as_ref().map_or(0, Vec::len),
            "received sheet values"
        );
        Ok(values)
    }
}
