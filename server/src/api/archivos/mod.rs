//! Archivos Routes
//!
//! File listing and download endpoints over the per-category sandboxes.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// File router - public access (no authentication, as in the original API)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/files/{tipo}", get(handler::list_files))
        .route("/files/{tipo}/{nombre}", get(handler::download_file))
}
