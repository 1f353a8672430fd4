//! HTTP surface for `sheetview serve`.
//!
//! | Route       | Response                                                  |
//! |-------------|-----------------------------------------------------------|
//! | `GET /`     | freshly rendered page; failures appear as a notice banner |
//! | `GET /data` | records as JSON, or `500 Error fetching data`             |

use crate::{load_dataset, Dataset, Notice, ValuesSource};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sheetview_core::config::PageConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Immutable state shared by all requests.
pub struct AppState<S> {
    source: Result<S, Notice>,
    page: PageConfig,
}

impl<S: ValuesSource> AppState<S> {
    pub fn new(source: S, page: PageConfig) -> Self {
        Self {
            source: Ok(source),
            page,
        }
    }

    /// State for a server whose source could not be built; every request
    /// shows `notice`.
    pub fn unavailable(notice: Notice, page: PageConfig) -> Self {
        Self {
            source: Err(notice),
            page,
        }
    }

    pub fn from_source(source: Result<S, Notice>, page: PageConfig) -> Self {
        Self { source, page }
    }

    async fn dataset(&self) -> Dataset {
        match &self.source {
            Ok(source) => load_dataset(source).await,
            Err(notice) => Dataset::failed(notice.clone()),
        }
    }
}

pub fn router<S: ValuesSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(page::<S>))
        .route("/data", get(data::<S>))
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve<S: ValuesSource + 'static>(
    state: AppState<S>,
    addr: SocketAddr,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving dashboard");
    axum::serve(listener, router(state)).await
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn page<S: ValuesSource>(State(state): State<Arc<AppState<S>>>) -> Response {
    let dataset = state.dataset().await;
    match sheetview_page::render_page(&dataset, &state.page, chrono::Utc::now()) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(error = %err, "rendering page failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error loading application: {err}"),
            )
                .into_response()
        }
    }
}

async fn data<S: ValuesSource>(State(state): State<Arc<AppState<S>>>) -> Response {
    let dataset = state.dataset().await;
    if dataset.notice.is_some() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching data").into_response();
    }
    Json(dataset.records).into_response()
}
