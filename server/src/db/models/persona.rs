//! Persona Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Persona model matching the `persona` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: i64,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub telefono: String,
    pub direccion: Option<String>,
    pub created_at: i64,
}

/// Create persona payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonaCreate {
    #[validate(length(min = 1, max = 80))]
    pub nombre: String,
    #[validate(length(min = 1, max = 120))]
    pub apellidos: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 7, max = 20))]
    pub telefono: String,
    pub direccion: Option<String>,
}

/// Partial update persona payload
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonaUpdate {
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}

/// Full replace persona payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonaReplace {
    #[validate(length(min = 1, max = 80))]
    pub nombre: String,
    #[validate(length(min = 1, max = 120))]
    pub apellidos: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 7, max = 20))]
    pub telefono: String,
    pub direccion: Option<String>,
}
