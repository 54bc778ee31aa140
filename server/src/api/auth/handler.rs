//! Authentication Handlers
//!
//! Handles credential verification and token issuance

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;

/// Credentials payload (transient, never persisted)
#[derive(Debug, Deserialize)]
pub struct Credenciales {
    pub usuario: String,
    pub clave: String,
}

/// Identified user summary embedded in the login response
#[derive(Debug, Serialize)]
pub struct UsuarioResumen {
    pub id: i64,
    #[serde(rename = "uName")]
    pub u_name: String,
    pub role: String,
}

/// Login response: user summary plus signed token
#[derive(Debug, Serialize)]
pub struct IdentificacionResponse {
    pub data: UsuarioResumen,
    pub tk: String,
}

/// Login handler
///
/// Verifies credentials and returns a JWT token. Unknown username and
/// wrong clave produce the identical generic 401.
pub async fn identificar(
    State(state): State<ServerState>,
    Json(credenciales): Json<Credenciales>,
) -> Result<Json<IdentificacionResponse>, AppError> {
    let (usuario, rol) = state
        .autenticacion()
        .identificar(&credenciales.usuario, &credenciales.clave)
        .await?;

    // Generate JWT token
    let token = state
        .get_jwt_service()
        .generate_token(&usuario.id.to_string(), &usuario.user_name, &rol.nombre)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = %usuario.id,
        username = %usuario.user_name,
        role = %rol.nombre,
        "User logged in successfully"
    );

    Ok(Json(IdentificacionResponse {
        data: UsuarioResumen {
            id: usuario.id,
            u_name: usuario.user_name,
            role: rol.nombre,
        },
        tk: token,
    }))
}

/// Get current user info (from validated token claims)
pub async fn me(user: CurrentUser) -> Json<CurrentUser> {
    Json(user)
}
