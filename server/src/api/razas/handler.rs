//! Raza API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::CountResponse;
use crate::core::ServerState;
use crate::db::models::{Mascota, Raza, RazaCreate, RazaUpdate};
use crate::db::repository::RazaRepository;
use crate::utils::{AppError, AppResult};

/// GET /razas - list all razas
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Raza>>> {
    let repo = RazaRepository::new(state.pool.clone());
    let razas = repo.find_all().await?;
    Ok(Json(razas))
}

/// GET /razas/count
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = RazaRepository::new(state.pool.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /razas/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Raza>> {
    let repo = RazaRepository::new(state.pool.clone());
    let raza = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Raza {} not found", id)))?;
    Ok(Json(raza))
}

/// GET /razas/{id}/mascotas - mascotas of a raza
pub async fn list_mascotas(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Mascota>>> {
    let repo = RazaRepository::new(state.pool.clone());
    let mascotas = repo.find_mascotas(id).await?;
    Ok(Json(mascotas))
}

/// POST /razas - create a raza
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RazaCreate>,
) -> AppResult<Json<Raza>> {
    let repo = RazaRepository::new(state.pool.clone());
    let raza = repo.create(payload).await?;

    tracing::info!(raza_id = %raza.id, nombre = %raza.nombre, "Raza created");

    Ok(Json(raza))
}

/// PATCH /razas - bulk partial update, returns the affected count
pub async fn update_all(
    State(state): State<ServerState>,
    Json(payload): Json<RazaUpdate>,
) -> AppResult<Json<CountResponse>> {
    let repo = RazaRepository::new(state.pool.clone());
    let affected = repo.update_all(payload).await?;
    Ok(Json(CountResponse {
        count: affected as i64,
    }))
}

/// PATCH /razas/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RazaUpdate>,
) -> AppResult<StatusCode> {
    let repo = RazaRepository::new(state.pool.clone());
    repo.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /razas/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let repo = RazaRepository::new(state.pool.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
