//! investigacion-server - HTTP surface for research-project PDF generation
//!
//! Two endpoints: `POST /api/research/generate` validates the request body,
//! builds and renders the PDF, and records it in the download store;
//! `GET /api/research/download/{file_name}` resolves the store and streams
//! the file. All shared state is injected at router construction; nothing
//! is global.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

// Re-export the types the binary and the integration tests drive
pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{router, ApiServer, AppState, GenerateResponse};
pub use store::{DownloadStore, ResolveError};
