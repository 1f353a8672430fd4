//! Fake Google Sheets values API for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /v4/spreadsheets/{id}/values/{range}?key=...` — the configured reply
//!
//! Every request is recorded so tests can check what the client sent. Point a
//! `SheetsConfig` at [`FakeSheetsApi::base_url`].
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeSheetsApi::start().await.unwrap();
//! api.reply_json(values_body(SHEET_SCORES)).await;
//! let config = sheets_config(&api.base_url());
//! ```

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// One request as seen by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub spreadsheet_id: String,
    pub range: String,
    pub key: Option<String>,
}

#[derive(Clone)]
enum Reply {
    Json(serde_json::Value),
    Raw(StatusCode, String),
}

/// State shared between the router and test code.
struct ApiState {
    reply: Reply,
    seen: Vec<SeenRequest>,
}

/// Handle to the running fake Sheets API server.
pub struct FakeSheetsApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeSheetsApi {
    /// Start the fake on a random port. Until configured it answers with an
    /// empty JSON object (no `values`).
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            reply: Reply::Json(serde_json::json!({})),
            seen: Vec::new(),
        }));

        let app = Router::new()
            .route("/v4/spreadsheets/{id}/values/{range}", get(values))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL of the spreadsheets collection, for `SheetsConfig::base_url`.
    pub fn base_url(&self) -> String {
        format!("http://{}/v4/spreadsheets", self.addr)
    }

    /// Answer every request with `200` and `body`.
    pub async fn reply_json(&self, body: serde_json::Value) {
        self.state.lock().await.reply = Reply::Json(body);
    }

    /// Answer every request with `status` and a raw `body`.
    pub async fn reply_raw(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state.lock().await.reply = Reply::Raw(status, body.to_string());
    }

    pub async fn requests(&self) -> Vec<SeenRequest> {
        self.state.lock().await.seen.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn values(
    Path((id, range)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    State(state): State<Arc<Mutex<ApiState>>>,
) -> Response {
    let mut state = state.lock().await;
    state.seen.push(SeenRequest {
        spreadsheet_id: id,
        range,
        key: query.get("key").cloned(),
    });

    match state.reply.clone() {
        Reply::Json(body) => axum::Json(body).into_response(),
        Reply::Raw(status, body) => (status, body).into_response(),
    }
}
