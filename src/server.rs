//! HTTP surface of the service.
//!
//! Routes:
//! - `POST /upload/` - multipart batch of chat exports and media files
//! - `POST /feedback/` - persist one feedback document
//! - `GET /static/{filename}` - serve uploaded media verbatim
//! - `/` - the single-page client (GET and HEAD)

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::error::Result;
use crate::store::{FeedbackStore, MediaStore};
use crate::upload::{process_batch, UploadOutcome};

/// Single-page client served at `/`.
static INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Uploaded media files and their on-disk paths.
    pub media: Arc<MediaStore>,
    /// Append-only feedback documents.
    pub feedback: Arc<FeedbackStore>,
}

/// Body of a `POST /feedback/` request. The field is required; any string
/// content is accepted, empty included.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    /// Free-text feedback.
    pub feedback: String,
}

/// Builds the application router.
///
/// `/static` serves straight from the media store's upload directory, so
/// files survive a restart even though the in-memory filename map does not.
pub fn create_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(state.media.root());

    Router::new()
        .route("/", get(home_page))
        .route("/upload/", post(upload_files))
        .route("/feedback/", post(submit_feedback))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serves the client page. Registered as GET, which also answers HEAD.
async fn home_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Accepts a multipart batch under the `files` field and returns the
/// aggregated parse/store outcome.
///
/// The whole batch is read before processing; any failure aborts the
/// request without rolling back files already written.
#[instrument(skip_all)]
async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadOutcome>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("files") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        files.push((filename, bytes.to_vec()));
    }

    info!(count = files.len(), "processing upload batch");
    let outcome = process_batch(files, &state.media)?;
    Ok(Json(outcome))
}

/// Persists one feedback document and acknowledges with the fixed message.
#[instrument(skip_all)]
async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<serde_json::Value>> {
    state.feedback.insert(&request.feedback)?;
    Ok(Json(serde_json::json!({
        "message": "Feedback submitted successfully!"
    })))
}

/// Binds `addr` and serves the router until shutdown completes.
pub async fn start_server(
    state: AppState,
    addr: &str,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let router = create_router(state);

    info!(address = %addr, "starting HTTP server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    Ok(())
}

/// Convenience constructor wiring both stores from their on-disk locations.
pub fn build_state(upload_dir: &Path, feedback_db: &Path) -> Result<AppState> {
    Ok(AppState {
        media: Arc::new(MediaStore::new(upload_dir)?),
        feedback: Arc::new(FeedbackStore::open(feedback_db)?),
    })
}
