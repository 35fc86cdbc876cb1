//! HTTP routes and server handle
//!
//! Router construction, the two request handlers, and `ApiServer`, a small
//! handle that serves on an ephemeral port (used by the integration tests;
//! the binary serves on the configured address directly).

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use investigacion_core::{build_document, ResearchProjectDraft};
use investigacion_pdf::Renderer;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio_util::io::ReaderStream;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::debug;

use crate::error::ApiError;
use crate::store::DownloadStore;

/// Shared state injected at router construction
pub struct AppState {
    store: DownloadStore,
    renderer: Renderer,
}

impl AppState {
    /// Create state with an empty download store
    pub fn new(renderer: Renderer) -> Self {
        Self {
            store: DownloadStore::new(),
            renderer,
        }
    }
}

/// Body returned by the generate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub message: String,
    pub file_path: String,
}

/// Build the application router around shared state
pub fn router(state: Arc<AppState>) -> Router {
    // A wildcard origin cannot be combined with credentials on the wire;
    // mirroring the request yields the same permissive policy.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/api/research/generate", post(generate_handler))
        .route("/api/research/download/{file_name}", get(download_handler))
        // Section text carries no length cap, so the request body must not either;
        // axum's default limit would turn large submissions into 413.
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .with_state(state)
}

/// Public download path for a generated file name
fn download_path(file_name: &str) -> String {
    format!("/api/research/download/{file_name}")
}

/// POST /api/research/generate: validate, build, render, record.
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ResearchProjectDraft>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let project = draft.validate().map_err(ApiError::Validation)?;

    // Typst compilation is CPU-bound; keep it off the worker threads
    let render_state = state.clone();
    let rendered = tokio::task::spawn_blocking(move || {
        let doc = build_document(&project);
        render_state.renderer.render_to_file(&doc)
    })
    .await
    .map_err(|e| anyhow::anyhow!("render task failed: {e}"))?
    .map_err(|e| anyhow::Error::new(e).context("rendering PDF"))?;

    state
        .store
        .record(rendered.file_name.clone(), rendered.path.clone());
    debug!(
        "generated {} at {}",
        rendered.file_name,
        rendered.path.display()
    );

    Ok(Json(GenerateResponse {
        message: "PDF generado exitosamente".to_string(),
        file_path: download_path(&rendered.file_name),
    }))
}

/// GET /api/research/download/{file_name}: resolve and stream the file.
async fn download_handler(
    State(state): State<Arc<AppState>>,
    Path(file_name): Path<String>,
) -> Result<Response, ApiError> {
    let path = state.store.resolve(&file_name)?;

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| anyhow::Error::new(e).context(format!("opening {}", path.display())))?;
    let len = file
        .metadata()
        .await
        .map_err(|e| anyhow::Error::new(e).context(format!("sizing {}", path.display())))?
        .len();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
            .map_err(|e| anyhow::anyhow!("invalid disposition header: {e}"))?,
    );

    debug!("serving {} ({} bytes)", file_name, len);
    let body = Body::from_stream(ReaderStream::new(file));
    Ok((StatusCode::OK, headers, body).into_response())
}

/// A running API server bound to an ephemeral local port
pub struct ApiServer {
    port: u16,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl ApiServer {
    /// Start the server on a random port, returning a handle.
    pub async fn start(state: Arc<AppState>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let app = router(state);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        Ok(Self {
            port,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Absolute URL for a server path.
    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    /// Shut the server down gracefully.
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
