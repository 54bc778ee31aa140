//! Persona API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::CountResponse;
use crate::core::ServerState;
use crate::db::models::{Persona, PersonaCreate, PersonaReplace, PersonaUpdate, SolicitudAdopcion};
use crate::db::repository::PersonaRepository;
use crate::utils::{AppError, AppResult};

/// GET /personas - list all personas
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Persona>>> {
    let repo = PersonaRepository::new(state.pool.clone());
    let personas = repo.find_all().await?;
    Ok(Json(personas))
}

/// GET /personas/count
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = PersonaRepository::new(state.pool.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /personas/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Persona>> {
    let repo = PersonaRepository::new(state.pool.clone());
    let persona = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Persona {} not found", id)))?;
    Ok(Json(persona))
}

/// GET /personas/{id}/solicitudes - adoption requests filed by a persona
pub async fn list_solicitudes(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<SolicitudAdopcion>>> {
    let repo = PersonaRepository::new(state.pool.clone());
    let solicitudes = repo.find_solicitudes(id).await?;
    Ok(Json(solicitudes))
}

/// POST /personas - create a persona
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PersonaCreate>,
) -> AppResult<Json<Persona>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = PersonaRepository::new(state.pool.clone());
    let persona = repo.create(payload).await?;

    tracing::info!(persona_id = %persona.id, "Persona created");

    Ok(Json(persona))
}

/// PATCH /personas - bulk partial update, returns the affected count
pub async fn update_all(
    State(state): State<ServerState>,
    Json(payload): Json<PersonaUpdate>,
) -> AppResult<Json<CountResponse>> {
    let repo = PersonaRepository::new(state.pool.clone());
    let affected = repo.update_all(payload).await?;
    Ok(Json(CountResponse {
        count: affected as i64,
    }))
}

/// PATCH /personas/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PersonaUpdate>,
) -> AppResult<StatusCode> {
    let repo = PersonaRepository::new(state.pool.clone());
    repo.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /personas/{id}
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PersonaReplace>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = PersonaRepository::new(state.pool.clone());
    repo.replace(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /personas/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let repo = PersonaRepository::new(state.pool.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
