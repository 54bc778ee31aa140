//! Rol Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Rol, RolCreate, RolUpdate};

#[derive(Clone)]
pub struct RolRepository {
    pool: SqlitePool,
}

impl RolRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all roles ordered by nombre
    pub async fn find_all(&self) -> RepoResult<Vec<Rol>> {
        let roles = sqlx::query_as::<_, Rol>("SELECT * FROM rol ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }

    /// Find rol by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Rol>> {
        let rol = sqlx::query_as::<_, Rol>("SELECT * FROM rol WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(rol)
    }

    /// Find rol by nombre
    pub async fn find_by_nombre(&self, nombre: &str) -> RepoResult<Option<Rol>> {
        let rol = sqlx::query_as::<_, Rol>("SELECT * FROM rol WHERE nombre = ? LIMIT 1")
            .bind(nombre)
            .fetch_optional(&self.pool)
            .await?;
        Ok(rol)
    }

    /// Create a new rol
    pub async fn create(&self, data: RolCreate) -> RepoResult<Rol> {
        if self.find_by_nombre(&data.nombre).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Rol '{}' already exists",
                data.nombre
            )));
        }

        let created = sqlx::query_as::<_, Rol>(
            "INSERT INTO rol (nombre, descripcion) VALUES (?, ?) RETURNING *",
        )
        .bind(&data.nombre)
        .bind(&data.descripcion)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update a rol
    pub async fn update(&self, id: i64, data: RolUpdate) -> RepoResult<Rol> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Rol {} not found", id)))?;

        if let Some(ref new_nombre) = data.nombre
            && new_nombre != &existing.nombre
            && self.find_by_nombre(new_nombre).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Rol '{}' already exists",
                new_nombre
            )));
        }

        let updated = sqlx::query_as::<_, Rol>(
            r#"UPDATE rol SET
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

    /// Hard delete a rol
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Rol {} not found", id)))?;

        // Check for usuarios still referencing the rol
        let usuarios = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM usuario WHERE rol_id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        if usuarios > 0 {
            return Err(RepoError::Validation(
                "Cannot delete rol with assigned usuarios".to_string(),
            ));
        }

        sqlx::query("DELETE FROM rol WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(true)
    }
}
