//! Rol Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rol model matching the `rol` table
///
/// Coarse permission label ("admin", "persona") used for route-level
/// authorization and embedded as a claim in issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rol {
    pub id: i64,
    /// Name of the role
    pub nombre: String,
    pub descripcion: Option<String>,
    pub created_at: i64,
}

/// Create rol request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolCreate {
    pub nombre: String,
    pub descripcion: Option<String>,
}

/// Update rol request
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RolUpdate {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}
