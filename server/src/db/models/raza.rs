//! Raza Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raza (breed) model matching the `raza` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Raza {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
}

/// Create raza request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RazaCreate {
    pub nombre: String,
    pub descripcion: Option<String>,
}

/// Update raza request
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RazaUpdate {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}
