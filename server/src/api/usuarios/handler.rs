//! Usuario API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::CountResponse;
use crate::core::ServerState;
use crate::db::models::{Usuario, UsuarioCreate, UsuarioReplace, UsuarioUpdate};
use crate::db::repository::{RolRepository, UsuarioRepository};
use crate::utils::{AppError, AppResult};

/// Password reset payload
#[derive(Debug, Deserialize)]
pub struct ResetearClave {
    pub email: String,
}

/// Password reset outcome: whether the SMS notification was delivered
#[derive(Debug, Serialize)]
pub struct EnviadoResponse {
    pub enviado: &'static str,
}

/// GET /usuarios - list all usuarios (admin)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Usuario>>> {
    let repo = UsuarioRepository::new(state.pool.clone());
    let usuarios = repo.find_all().await?;
    Ok(Json(usuarios))
}

/// GET /usuarios/count - count usuarios (admin)
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = UsuarioRepository::new(state.pool.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /usuarios/{id} - get a single usuario (admin)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Usuario>> {
    let repo = UsuarioRepository::new(state.pool.clone());
    let usuario = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Usuario {} not found", id)))?;
    Ok(Json(usuario))
}

/// POST /usuarios - register a usuario
///
/// The clave is generated server side, stored as an Argon2 hash, and
/// delivered exactly once via email. It is never logged.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UsuarioCreate>,
) -> AppResult<Json<Usuario>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // The referenced rol must exist
    RolRepository::new(state.pool.clone())
        .find_by_id(payload.rol_id)
        .await?
        .ok_or_else(|| AppError::validation(format!("Rol {} not found", payload.rol_id)))?;

    let clave = state.autenticacion().generar_clave();
    let clave_hash = Usuario::hash_clave(&clave)
        .map_err(|e| AppError::internal(format!("Failed to hash clave: {}", e)))?;

    let repo = UsuarioRepository::new(state.pool.clone());
    let usuario = repo.create(payload, clave_hash).await?;

    // Welcome email carrying the one-time clave, best-effort
    let cuerpo = format!(
        "<strong>Hola, bienvenid@</strong><br />\
         Su correo ha sido registrado en el sistema de mascotas. \
         Sus datos de acceso son:<br/><br/>\
         <ul><li>Usuario: {}</li><li>Clave: {}</li></ul>",
        usuario.user_name, clave
    );
    let enviado = state
        .notificacion
        .send_email(&usuario.user_name, "Registro en el sistema de mascotas", &cuerpo)
        .await;
    if !enviado {
        tracing::warn!(user_id = %usuario.id, "Welcome email could not be delivered");
    }

    tracing::info!(
        user_id = %usuario.id,
        username = %usuario.user_name,
        "Usuario created"
    );

    Ok(Json(usuario))
}

/// PATCH /usuarios - bulk partial update (admin), returns the affected count
pub async fn update_all(
    State(state): State<ServerState>,
    Json(payload): Json<UsuarioUpdate>,
) -> AppResult<Json<CountResponse>> {
    let repo = UsuarioRepository::new(state.pool.clone());
    let affected = repo.update_all(payload).await?;
    Ok(Json(CountResponse {
        count: affected as i64,
    }))
}

/// PATCH /usuarios/{id} - partially update a usuario (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UsuarioUpdate>,
) -> AppResult<StatusCode> {
    let repo = UsuarioRepository::new(state.pool.clone());
    repo.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /usuarios/{id} - replace a usuario (admin), stored clave is kept
pub async fn replace(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UsuarioReplace>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = UsuarioRepository::new(state.pool.clone());
    repo.replace(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /usuarios/{id} - delete a usuario (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let repo = UsuarioRepository::new(state.pool.clone());
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /reset-password - regenerate the clave and notify via SMS
///
/// The new clave replaces the stored hash immediately; the old clave no
/// longer verifies. Delivery failure degrades to `{"enviado":"KO"}`
/// instead of failing the request.
pub async fn reset_password(
    State(state): State<ServerState>,
    Json(payload): Json<ResetearClave>,
) -> AppResult<Json<EnviadoResponse>> {
    let repo = UsuarioRepository::new(state.pool.clone());
    let usuario = repo
        .find_by_user_name(&payload.email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    let clave = state.autenticacion().generar_clave();
    let clave_hash = Usuario::hash_clave(&clave)
        .map_err(|e| AppError::internal(format!("Failed to hash clave: {}", e)))?;

    repo.update_clave_hash(usuario.id, &clave_hash).await?;

    tracing::info!(user_id = %usuario.id, "Clave reset, notifying via SMS");

    let contenido = format!(
        "Hola, hemos reseteado tu clave. Usuario: {} y clave: {}",
        usuario.user_name, clave
    );
    let enviado = state.notificacion.send_sms(&usuario.telefono, &contenido).await;

    Ok(Json(EnviadoResponse {
        enviado: if enviado { "ok" } else { "KO" },
    }))
}
