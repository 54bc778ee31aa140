//! Mascota Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Mascota, MascotaCreate, MascotaReplace, MascotaUpdate, SolicitudAdopcion};

#[derive(Clone)]
pub struct MascotaRepository {
    pool: SqlitePool,
}

impl MascotaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all mascotas ordered by nombre
    pub async fn find_all(&self) -> RepoResult<Vec<Mascota>> {
        let mascotas = sqlx::query_as::<_, Mascota>("SELECT * FROM mascota ORDER BY nombre")
            .fetch_all(&self.pool)
            .await?;
        Ok(mascotas)
    }

    /// Find mascotas currently up for adoption
    pub async fn find_en_adopcion(&self) -> RepoResult<Vec<Mascota>> {
        let mascotas = sqlx::query_as::<_, Mascota>(
            "SELECT * FROM mascota WHERE en_adopcion = 1 ORDER BY nombre",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(mascotas)
    }

    /// Find mascota by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Mascota>> {
        let mascota = sqlx::query_as::<_, Mascota>("SELECT * FROM mascota WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(mascota)
    }

    /// Count mascotas
    pub async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mascota")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Adoption requests targeting a mascota (explicit join method)
    pub async fn find_solicitudes(&self, id: i64) -> RepoResult<Vec<SolicitudAdopcion>> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Mascota {} not found", id)))?;

        let solicitudes = sqlx::query_as::<_, SolicitudAdopcion>(
            "SELECT * FROM solicitud_adopcion WHERE mascota_id = ? ORDER BY created_at DESC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(solicitudes)
    }

    /// Create a new mascota
    pub async fn create(&self, data: MascotaCreate) -> RepoResult<Mascota> {
        let created = sqlx::query_as::<_, Mascota>(
            r#"INSERT INTO mascota (nombre, foto, edad, descripcion, raza_id, persona_id, en_adopcion)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&data.nombre)
        .bind(&data.foto)
        .bind(data.edad)
        .bind(&data.descripcion)
        .bind(data.raza_id)
        .bind(data.persona_id)
        .bind(data.en_adopcion.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Partially update a mascota
    pub async fn update(&self, id: i64, data: MascotaUpdate) -> RepoResult<Mascota> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Mascota {} not found", id)))?;

        let updated = sqlx::query_as::<_, Mascota>(
            r#"UPDATE mascota SET
                   nombre = COALESCE(?, nombre),
                   foto = COALESCE(?, foto),
                   edad = COALESCE(?, edad),
                   descripcion = COALESCE(?, descripcion),
                   raza_id = COALESCE(?, raza_id),
                   persona_id = COALESCE(?, persona_id),
                   en_adopcion = COALESCE(?, en_adopcion)
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(data.nombre)
        .bind(data.foto)
        .bind(data.edad)
        .bind(data.descripcion)
        .bind(data.raza_id)
        .bind(data.persona_id)
        .bind(data.en_adopcion)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Replace a mascota
    pub async fn replace(&self, id: i64, data: MascotaReplace) -> RepoResult<Mascota> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Mascota {} not found", id)))?;

        let replaced = sqlx::query_as::<_, Mascota>(
            r#"UPDATE mascota SET
                   nombre = ?,
                   foto = ?,
                   edad = ?,
                   descripcion = ?,
                   raza_id = ?,
                   persona_id = ?,
                   en_adopcion = ?
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(&data.nombre)
        .bind(&data.foto)
        .bind(data.edad)
        .bind(&data.descripcion)
        .bind(data.raza_id)
        .bind(data.persona_id)
        .bind(data.en_adopcion)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(replaced)
    }

    /// Bulk partial update over all mascotas, returns the affected count
    pub async fn update_all(&self, data: MascotaUpdate) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"UPDATE mascota SET
                   descripcion = COALESCE(?, descripcion),
                   en_adopcion = COALESCE(?, en_adopcion)"#,
        )
        .bind(data.descripcion)
        .bind(data.en_adopcion)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete a mascota
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Mascota {} not found", id)))?;

        sqlx::query("DELETE FROM mascota WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(true)
    }
}
