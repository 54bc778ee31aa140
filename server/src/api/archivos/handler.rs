//! Archivos API Handlers

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use http::header;

use crate::core::ServerState;
use crate::services::TipoArchivo;
use crate::utils::{AppError, AppResult};

/// GET /files/{tipo} - list the filenames of a category sandbox
pub async fn list_files(
    State(state): State<ServerState>,
    Path(tipo): Path<i64>,
) -> AppResult<Json<Vec<String>>> {
    // Unknown categories are rejected before any filesystem access
    let tipo = TipoArchivo::from_code(tipo).ok_or_else(|| AppError::unknown_category(tipo))?;

    let nombres = state.archivos.listar(tipo).await?;
    Ok(Json(nombres))
}

/// GET /files/{tipo}/{nombre} - download a file from a category sandbox
///
/// The resolved path must stay inside the category's base directory;
/// traversal attempts are rejected with 400.
pub async fn download_file(
    State(state): State<ServerState>,
    Path((tipo, nombre)): Path<(i64, String)>,
) -> AppResult<Response> {
    let tipo = TipoArchivo::from_code(tipo).ok_or_else(|| AppError::unknown_category(tipo))?;

    let path = state.archivos.resolver(tipo, &nombre).await?;

    let content = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::internal(format!("Failed to read file: {}", e)))?;

    tracing::info!(nombre = %nombre, size = content.len(), "Serving file download");

    let mime = mime_guess::from_path(&nombre).first_or_octet_stream();

    Ok((
        http::StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", nombre),
            ),
        ],
        content,
    )
        .into_response())
}
