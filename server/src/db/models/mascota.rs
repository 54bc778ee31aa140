//! Mascota Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Mascota model matching the `mascota` table
///
/// `foto` holds the filename inside the mascotas file sandbox; the bytes
/// are served through the files API. `persona_id` is set once the pet has
/// been adopted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Mascota {
    pub id: i64,
    pub nombre: String,
    pub foto: Option<String>,
    pub edad: Option<i64>,
    pub descripcion: Option<String>,
    pub raza_id: i64,
    pub persona_id: Option<i64>,
    pub en_adopcion: bool,
    pub created_at: i64,
}

/// Create mascota payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MascotaCreate {
    #[validate(length(min = 1, max = 80))]
    pub nombre: String,
    pub foto: Option<String>,
    #[validate(range(min = 0, max = 40))]
    pub edad: Option<i64>,
    pub descripcion: Option<String>,
    pub raza_id: i64,
    pub persona_id: Option<i64>,
    pub en_adopcion: Option<bool>,
}

/// Partial update mascota payload
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MascotaUpdate {
    pub nombre: Option<String>,
    pub foto: Option<String>,
    pub edad: Option<i64>,
    pub descripcion: Option<String>,
    pub raza_id: Option<i64>,
    pub persona_id: Option<i64>,
    pub en_adopcion: Option<bool>,
}

/// Full replace mascota payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MascotaReplace {
    #[validate(length(min = 1, max = 80))]
    pub nombre: String,
    pub foto: Option<String>,
    #[validate(range(min = 0, max = 40))]
    pub edad: Option<i64>,
    pub descripcion: Option<String>,
    pub raza_id: i64,
    pub persona_id: Option<i64>,
    pub en_adopcion: bool,
}
