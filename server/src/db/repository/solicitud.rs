//! SolicitudAdopcion Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{SolicitudAdopcion, SolicitudCreate, SolicitudUpdate, solicitud::ESTADOS};

#[derive(Clone)]
pub struct SolicitudRepository {
    pool: SqlitePool,
}

impl SolicitudRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all solicitudes, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<SolicitudAdopcion>> {
        let solicitudes = sqlx::query_as::<_, SolicitudAdopcion>(
            "SELECT * FROM solicitud_adopcion ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(solicitudes)
    }

    /// Find solicitud by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<SolicitudAdopcion>> {
        let solicitud =
            sqlx::query_as::<_, SolicitudAdopcion>("SELECT * FROM solicitud_adopcion WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(solicitud)
    }

    /// Count solicitudes
    pub async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM solicitud_adopcion")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Create a new solicitud (always starts in "pendiente")
    pub async fn create(&self, data: SolicitudCreate) -> RepoResult<SolicitudAdopcion> {
        // The referenced persona and mascota must exist
        let persona = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM persona WHERE id = ?")
            .bind(data.persona_id)
            .fetch_one(&self.pool)
            .await?;
        if persona == 0 {
            return Err(RepoError::NotFound(format!(
                "Persona {} not found",
                data.persona_id
            )));
        }

        let mascota = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mascota WHERE id = ?")
            .bind(data.mascota_id)
            .fetch_one(&self.pool)
            .await?;
        if mascota == 0 {
            return Err(RepoError::NotFound(format!(
                "Mascota {} not found",
                data.mascota_id
            )));
        }

        let created = sqlx::query_as::<_, SolicitudAdopcion>(
            r#"INSERT INTO solicitud_adopcion (persona_id, mascota_id, estado, comentario)
               VALUES (?, ?, 'pendiente', ?)
               RETURNING *"#,
        )
        .bind(data.persona_id)
        .bind(data.mascota_id)
        .bind(&data.comentario)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update estado/comentario of a solicitud
    pub async fn update(&self, id: i64, data: SolicitudUpdate) -> RepoResult<SolicitudAdopcion> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Solicitud {} not found", id)))?;

        if let Some(ref estado) = data.estado
            && !ESTADOS.contains(&estado.as_str())
        {
            return Err(RepoError::Validation(format!(
                "Invalid estado '{}', expected one of: {}",
                estado,
                ESTADOS.join(", ")
            )));
        }

        let updated = sqlx::query_as::<_, SolicitudAdopcion>(
            r#"UPDATE solicitud_adopcion SET
                   estado = COALESCE(?, estado),
                   comentario = COALESCE(?, comentario)
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(data.estado)
        .bind(data.comentario)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Bulk partial update over all solicitudes, returns the affected count
    pub async fn update_all(&self, data: SolicitudUpdate) -> RepoResult<u64> {
        if let Some(ref estado) = data.estado
            && !ESTADOS.contains(&estado.as_str())
        {
            return Err(RepoError::Validation(format!(
                "Invalid estado '{}', expected one of: {}",
                estado,
                ESTADOS.join(", ")
            )));
        }

        let result = sqlx::query(
            r#"UPDATE solicitud_adopcion SET
                   estado = COALESCE(?, estado),
                   comentario = COALESCE(?, comentario)"#,
        )
        .bind(data.estado)
        .bind(data.comentario)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete a solicitud
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Solicitud {} not found", id)))?;

        sqlx::query("DELETE FROM solicitud_adopcion WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(true)
    }
}
