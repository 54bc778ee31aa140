//! Usuario Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Usuario, UsuarioCreate, UsuarioReplace, UsuarioUpdate};

#[derive(Clone)]
pub struct UsuarioRepository {
    pool: SqlitePool,
}

impl UsuarioRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all usuarios
    pub async fn find_all(&self) -> RepoResult<Vec<Usuario>> {
        let usuarios = sqlx::query_as::<_, Usuario>("SELECT * FROM usuario ORDER BY user_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(usuarios)
    }

    /// Find usuario by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuario WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(usuario)
    }

    /// Find usuario by user_name
    pub async fn find_by_user_name(&self, user_name: &str) -> RepoResult<Option<Usuario>> {
        let usuario =
            sqlx::query_as::<_, Usuario>("SELECT * FROM usuario WHERE user_name = ? LIMIT 1")
                .bind(user_name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(usuario)
    }

    /// Count usuarios
    pub async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM usuario")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Create a new usuario with an already-hashed clave
    pub async fn create(&self, data: UsuarioCreate, clave_hash: String) -> RepoResult<Usuario> {
        // Check duplicate user_name
        if self.find_by_user_name(&data.user_name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Usuario '{}' already exists",
                data.user_name
            )));
        }

        let created = sqlx::query_as::<_, Usuario>(
            r#"INSERT INTO usuario (user_name, clave_hash, telefono, persona_id, rol_id)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&data.user_name)
        .bind(&clave_hash)
        .bind(&data.telefono)
        .bind(data.persona_id)
        .bind(data.rol_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Partially update a usuario (clave_hash is untouched)
    pub async fn update(&self, id: i64, data: UsuarioUpdate) -> RepoResult<Usuario> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Usuario {} not found", id)))?;

        // Check duplicate user_name if changing
        if let Some(ref new_user_name) = data.user_name
            && new_user_name != &existing.user_name
            && self.find_by_user_name(new_user_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Usuario '{}' already exists",
                new_user_name
            )));
        }

        let updated = sqlx::query_as::<_, Usuario>(
            r#"UPDATE usuario SET
                   user_name = COALESCE(?, user_name),
                   telefono = COALESCE(?, telefono),
                   persona_id = COALESCE(?, persona_id),
                   rol_id = COALESCE(?, rol_id)
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(data.user_name)
        .bind(data.telefono)
        .bind(data.persona_id)
        .bind(data.rol_id)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Replace a usuario (clave_hash is kept, secrets only change via reset)
    pub async fn replace(&self, id: i64, data: UsuarioReplace) -> RepoResult<Usuario> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Usuario {} not found", id)))?;

        if data.user_name != existing.user_name
            && self.find_by_user_name(&data.user_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Usuario '{}' already exists",
                data.user_name
            )));
        }

        let replaced = sqlx::query_as::<_, Usuario>(
            r#"UPDATE usuario SET
                   user_name = ?,
                   telefono = ?,
                   persona_id = ?,
                   rol_id = ?
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(&data.user_name)
        .bind(&data.telefono)
        .bind(data.persona_id)
        .bind(data.rol_id)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(replaced)
    }

    /// Replace the stored clave hash (password reset)
    pub async fn update_clave_hash(&self, id: i64, clave_hash: &str) -> RepoResult<()> {
        let result = sqlx::query("UPDATE usuario SET clave_hash = ? WHERE id = ?")
            .bind(clave_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Usuario {} not found", id)));
        }
        Ok(())
    }

    /// Bulk partial update over all usuarios, returns the affected count
    pub async fn update_all(&self, data: UsuarioUpdate) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"UPDATE usuario SET
                   telefono = COALESCE(?, telefono),
                   persona_id = COALESCE(?, persona_id),
                   rol_id = COALESCE(?, rol_id)"#,
        )
        .bind(data.telefono)
        .bind(data.persona_id)
        .bind(data.rol_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete a usuario
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Usuario {} not found", id)))?;

        sqlx::query("DELETE FROM usuario WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(true)
    }
}
