//! Raza Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Mascota, Raza, RazaCreate, RazaUpdate};

#[derive(Clone)]
pub struct RazaRepository {
    pool: SqlitePool,
}

impl RazaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all razas ordered by nombre
    pub async fn find_all(&self) -> RepoResult<Vec<Raza>> {
        let razas = sqlx::query_as::<_, Raza>("SELECT * FROM raza ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;
        Ok(razas)
    }

    /// Find raza by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Raza>> {
        let raza = sqlx::query_as::<_, Raza>("SELECT * FROM raza WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(raza)
    }

    /// Find raza by nombre
    pub async fn find_by_nombre(&self, nombre: &str) -> RepoResult<Option<Raza>> {
        let raza = sqlx::query_as::<_, Raza>("SELECT * FROM raza WHERE nombre = ? LIMIT 1")
            .bind(nombre)
            .fetch_optional(&self.pool)
            .await?;
        Ok(raza)
    }

    /// Count razas
    pub async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM raza")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Mascotas of a raza (explicit join method)
    pub async fn find_mascotas(&self, id: i64) -> RepoResult<Vec<Mascota>> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Raza {} not found", id)))?;

        let mascotas = sqlx::query_as::<_, Mascota>(
            "SELECT * FROM mascota WHERE raza_id = ? ORDER BY nombre",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(mascotas)
    }

    /// Create a new raza
    pub async fn create(&self, data: RazaCreate) -> RepoResult<Raza> {
        if self.find_by_nombre(&data.nombre).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Raza '{}' already exists",
                data.nombre
            )));
        }

        let created = sqlx::query_as::<_, Raza>(
            "INSERT INTO raza (nombre, descripcion) VALUES (?, ?) RETURNING *",
        )
        .bind(&data.nombre)
        .bind(&data.descripcion)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update a raza
    pub async fn update(&self, id: i64, data: RazaUpdate) -> RepoResult<Raza> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Raza {} not found", id)))?;

        if let Some(ref new_nombre) = data.nombre
            && new_nombre != &existing.nombre
            && self.find_by_nombre(new_nombre).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Raza '{}' already exists",
                new_nombre
            )));
        }

        let updated = sqlx::query_as::<_, Raza>(
            r#"UPDATE raza SET
                   nombre = COALESCE(?, nombre),
                   descripcion = COALESCE(?, descripcion)
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(data.nombre)
        .bind(data.descripcion)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Bulk partial update over all razas, returns the affected count
    pub async fn update_all(&self, data: RazaUpdate) -> RepoResult<u64> {
        let result = sqlx::query("UPDATE raza SET descripcion = COALESCE(?, descripcion)")
            .bind(data.descripcion)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete a raza
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Raza {} not found", id)))?;

        // Check if raza has mascotas
        let mascotas = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mascota WHERE raza_id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        if mascotas > 0 {
            return Err(RepoError::Validation(
                "Cannot delete raza with registered mascotas".to_string(),
            ));
        }

        sqlx::query("DELETE FROM raza WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(true)
    }
}
