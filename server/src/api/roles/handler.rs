//! Rol API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Rol, RolCreate, RolUpdate};
use crate::db::repository::RolRepository;
use crate::utils::{AppError, AppResult};

/// GET /roles - list all roles
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Rol>>> {
    let repo = RolRepository::new(state.pool.clone());
    let roles = repo.find_all().await?;
    Ok(Json(roles))
}

/// GET /roles/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Rol>> {
    let repo = RolRepository::new(state.pool.clone());
    let rol = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Rol {} not found", id)))?;
    Ok(Json(rol))
}

/// POST /roles - create a rol
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RolCreate>,
) -> AppResult<Json<Rol>> {
    let repo = RolRepository::new(state.pool.clone());
    let rol = repo.create(payload).await?;

    tracing::info!(rol_id = %rol.id, nombre = %rol.nombre, "Rol created");

    Ok(Json(rol))
}

/// PATCH /roles/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RolUpdate>,
) -> AppResult<StatusCode> {
    let repo = RolRepository::new(state.pool.clone());
    repo.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /roles/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let repo = RolRepository::new(state.pool.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
