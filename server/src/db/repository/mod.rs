//! Repository Module
//!
//! Provides CRUD operations over the SQLite tables using parameterized
//! queries, one repository per entity.

// Auth
pub mod rol;
pub mod usuario;

// Adoption Domain
pub mod mascota;
pub mod persona;
pub mod raza;
pub mod solicitud;

// Re-exports
pub use mascota::MascotaRepository;
pub use persona::PersonaRepository;
pub use raza::RazaRepository;
pub use rol::RolRepository;
pub use solicitud::SolicitudRepository;
pub use usuario::UsuarioRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<T>>;
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
    async fn update(&self, id: i64, data: UpdateDto) -> RepoResult<T>;
    async fn delete(&self, id: i64) -> RepoResult<bool>;
    async fn count(&self) -> RepoResult<i64>;
}
