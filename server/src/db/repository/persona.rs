//! Persona Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Persona, PersonaCreate, PersonaReplace, PersonaUpdate, SolicitudAdopcion};

#[derive(Clone)]
pub struct PersonaRepository {
    pool: SqlitePool,
}

impl PersonaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all personas ordered by apellidos
    pub async fn find_all(&self) -> RepoResult<Vec<Persona>> {
        let personas =
            sqlx::query_as::<_, Persona>("SELECT * FROM persona ORDER BY apellidos, nombre")
                .fetch_all(&self.pool)
                .await?;
        Ok(personas)
    }

    /// Find persona by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Persona>> {
        let persona = sqlx::query_as::<_, Persona>("SELECT * FROM persona WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(persona)
    }

    /// Find persona by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Persona>> {
        let persona = sqlx::query_as::<_, Persona>("SELECT * FROM persona WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(persona)
    }

    /// Count personas
    pub async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM persona")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Adoption requests filed by a persona (explicit join method)
    pub async fn find_solicitudes(&self, id: i64) -> RepoResult<Vec<SolicitudAdopcion>> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Persona {} not found", id)))?;

        let solicitudes = sqlx::query_as::<_, SolicitudAdopcion>(
            "SELECT * FROM solicitud_adopcion WHERE persona_id = ? ORDER BY created_at DESC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(solicitudes)
    }

    /// Create a new persona
    pub async fn create(&self, data: PersonaCreate) -> RepoResult<Persona> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Persona with email '{}' already exists",
                data.email
            )));
        }

        let created = sqlx::query_as::<_, Persona>(
            r#"INSERT INTO persona (nombre, apellidos, email, telefono, direccion)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&data.nombre)
        .bind(&data.apellidos)
        .bind(&data.email)
        .bind(&data.telefono)
        .bind(&data.direccion)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Partially update a persona
    pub async fn update(&self, id: i64, data: PersonaUpdate) -> RepoResult<Persona> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Persona {} not found", id)))?;

        if let Some(ref new_email) = data.email
            && new_email != &existing.email
            && self.find_by_email(new_email).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Persona with email '{}' already exists",
                new_email
            )));
        }

        let updated = sqlx::query_as::<_, Persona>(
            r#"UPDATE persona SET
                   nombre = COALESCE(?, nombre),
                   apellidos = COALESCE(?, apellidos),
                   email = COALESCE(?, email),
                   telefono = COALESCE(?, telefono),
                   direccion = COALESCE(?, direccion)
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(data.nombre)
        .bind(data.apellidos)
        .bind(data.email)
        .bind(data.telefono)
        .bind(data.direccion)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Replace a persona
    pub async fn replace(&self, id: i64, data: PersonaReplace) -> RepoResult<Persona> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Persona {} not found", id)))?;

        if data.email != existing.email && self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Persona with email '{}' already exists",
                data.email
            )));
        }

        let replaced = sqlx::query_as::<_, Persona>(
            r#"UPDATE persona SET
                   nombre = ?,
                   apellidos = ?,
                   email = ?,
                   telefono = ?,
                   direccion = ?
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(&data.nombre)
        .bind(&data.apellidos)
        .bind(&data.email)
        .bind(&data.telefono)
        .bind(&data.direccion)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(replaced)
    }

    /// Bulk partial update over all personas, returns the affected count
    ///
    /// Unique fields (email) are excluded: they cannot hold one value
    /// across rows.
    pub async fn update_all(&self, data: PersonaUpdate) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"UPDATE persona SET
                   telefono = COALESCE(?, telefono),
                   direccion = COALESCE(?, direccion)"#,
        )
        .bind(data.telefono)
        .bind(data.direccion)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete a persona
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Persona {} not found", id)))?;

        sqlx::query("DELETE FROM persona WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(true)
    }
}
