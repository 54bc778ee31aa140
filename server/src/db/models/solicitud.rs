//! SolicitudAdopcion Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Adoption request states
pub const ESTADOS: &[&str] = &["pendiente", "aprobada", "rechazada"];

/// SolicitudAdopcion model matching the `solicitud_adopcion` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudAdopcion {
    pub id: i64,
    pub persona_id: i64,
    pub mascota_id: i64,
    pub estado: String,
    pub comentario: Option<String>,
    pub created_at: i64,
}

/// Create solicitud payload
///
/// New requests always start in "pendiente".
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudCreate {
    pub persona_id: i64,
    pub mascota_id: i64,
    pub comentario: Option<String>,
}

/// Update solicitud payload
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SolicitudUpdate {
    pub estado: Option<String>,
    pub comentario: Option<String>,
}
