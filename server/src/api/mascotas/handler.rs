//! Mascota API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::CountResponse;
use crate::core::ServerState;
use crate::db::models::{Mascota, MascotaCreate, MascotaReplace, MascotaUpdate, SolicitudAdopcion};
use crate::db::repository::{MascotaRepository, RazaRepository};
use crate::utils::{AppError, AppResult};

/// GET /mascotas - list all mascotas (public)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Mascota>>> {
    let repo = MascotaRepository::new(state.pool.clone());
    let mascotas = repo.find_all().await?;
    Ok(Json(mascotas))
}

/// GET /mascotas/en-adopcion - list mascotas currently up for adoption
pub async fn list_en_adopcion(State(state): State<ServerState>) -> AppResult<Json<Vec<Mascota>>> {
    let repo = MascotaRepository::new(state.pool.clone());
    let mascotas = repo.find_en_adopcion().await?;
    Ok(Json(mascotas))
}

/// GET /mascotas/count
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = MascotaRepository::new(state.pool.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /mascotas/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Mascota>> {
    let repo = MascotaRepository::new(state.pool.clone());
    let mascota = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Mascota {} not found", id)))?;
    Ok(Json(mascota))
}

/// GET /mascotas/{id}/solicitudes - adoption requests targeting a mascota
pub async fn list_solicitudes(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<SolicitudAdopcion>>> {
    let repo = MascotaRepository::new(state.pool.clone());
    let solicitudes = repo.find_solicitudes(id).await?;
    Ok(Json(solicitudes))
}

/// POST /mascotas - create a mascota
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MascotaCreate>,
) -> AppResult<Json<Mascota>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // The referenced raza must exist
    RazaRepository::new(state.pool.clone())
        .find_by_id(payload.raza_id)
        .await?
        .ok_or_else(|| AppError::validation(format!("Raza {} not found", payload.raza_id)))?;

    let repo = MascotaRepository::new(state.pool.clone());
    let mascota = repo.create(payload).await?;

    tracing::info!(mascota_id = %mascota.id, nombre = %mascota.nombre, "Mascota created");

    Ok(Json(mascota))
}

/// PATCH /mascotas - bulk partial update, returns the affected count
pub async fn update_all(
    State(state): State<ServerState>,
    Json(payload): Json<MascotaUpdate>,
) -> AppResult<Json<CountResponse>> {
    let repo = MascotaRepository::new(state.pool.clone());
    let affected = repo.update_all(payload).await?;
    Ok(Json(CountResponse {
        count: affected as i64,
    }))
}

/// PATCH /mascotas/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MascotaUpdate>,
) -> AppResult<StatusCode> {
    let repo = MascotaRepository::new(state.pool.clone());
    repo.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /mascotas/{id}
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MascotaReplace>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = MascotaRepository::new(state.pool.clone());
    repo.replace(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /mascotas/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let repo = MascotaRepository::new(state.pool.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
