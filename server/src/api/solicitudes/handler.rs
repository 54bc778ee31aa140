//! SolicitudAdopcion API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::CountResponse;
use crate::core::ServerState;
use crate::db::models::{SolicitudAdopcion, SolicitudCreate, SolicitudUpdate};
use crate::db::repository::SolicitudRepository;
use crate::utils::{AppError, AppResult};

/// GET /solicitudes - list all solicitudes, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SolicitudAdopcion>>> {
    let repo = SolicitudRepository::new(state.pool.clone());
    let solicitudes = repo.find_all().await?;
    Ok(Json(solicitudes))
}

/// GET /solicitudes/count
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = SolicitudRepository::new(state.pool.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /solicitudes/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SolicitudAdopcion>> {
    let repo = SolicitudRepository::new(state.pool.clone());
    let solicitud = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Solicitud {} not found", id)))?;
    Ok(Json(solicitud))
}

/// POST /solicitudes - file an adoption request
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SolicitudCreate>,
) -> AppResult<Json<SolicitudAdopcion>> {
    let repo = SolicitudRepository::new(state.pool.clone());
    let solicitud = repo.create(payload).await?;

    tracing::info!(
        solicitud_id = %solicitud.id,
        persona_id = %solicitud.persona_id,
        mascota_id = %solicitud.mascota_id,
        "Solicitud de adopción created"
    );

    Ok(Json(solicitud))
}

/// PATCH /solicitudes - bulk partial update, returns the affected count
pub async fn update_all(
    State(state): State<ServerState>,
    Json(payload): Json<SolicitudUpdate>,
) -> AppResult<Json<CountResponse>> {
    let repo = SolicitudRepository::new(state.pool.clone());
    let affected = repo.update_all(payload).await?;
    Ok(Json(CountResponse {
        count: affected as i64,
    }))
}

/// PATCH /solicitudes/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SolicitudUpdate>,
) -> AppResult<StatusCode> {
    let repo = SolicitudRepository::new(state.pool.clone());
    repo.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /solicitudes/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let repo = SolicitudRepository::new(state.pool.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
