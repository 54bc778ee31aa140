//! Identity Verification Service
//!
//! Verifies credentials against the usuario table and generates random
//! claves for account creation and password reset.

use std::time::Duration;

use ring::rand::{SecureRandom, SystemRandom};
use sqlx::SqlitePool;

use crate::db::models::{Rol, Usuario};
use crate::db::repository::{RolRepository, UsuarioRepository};
use crate::utils::AppError;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 300;

/// Generated clave length
const CLAVE_LEN: usize = 10;

#[derive(Clone, Debug)]
pub struct AutenticacionService {
    pool: SqlitePool,
}

impl AutenticacionService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Verify credentials and return the matching usuario with its rol
    ///
    /// Both "no such user" and "wrong clave" collapse into the same
    /// generic error so the endpoint leaks no username-existence signal.
    pub async fn identificar(&self, usuario: &str, clave: &str) -> Result<(Usuario, Rol), AppError> {
        let repo = UsuarioRepository::new(self.pool.clone());
        let user = repo.find_by_user_name(usuario).await?;

        // Fixed delay to prevent timing attacks (before checking result)
        tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

        // Check authentication result - unified error message to prevent
        // username enumeration
        let user = match user {
            Some(u) => {
                let clave_valida = u.verify_clave(clave).map_err(|e| {
                    AppError::internal(format!("Clave verification failed: {}", e))
                })?;

                if !clave_valida {
                    tracing::warn!(username = %usuario, "Login failed - invalid credentials");
                    return Err(AppError::invalid_credentials());
                }

                u
            }
            None => {
                tracing::warn!(username = %usuario, "Login failed - user not found");
                return Err(AppError::invalid_credentials());
            }
        };

        // Fetch rol information
        let rol = RolRepository::new(self.pool.clone())
            .find_by_id(user.rol_id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Rol {} not found", user.rol_id)))?;

        Ok((user, rol))
    }

    /// Generate a random printable clave
    ///
    /// Alphanumeric only: the clave is delivered over email/SMS and typed
    /// back by the user.
    pub fn generar_clave(&self) -> String {
        let allowed_chars = "ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz23456789";

        let rng = SystemRandom::new();
        let mut clave = String::new();

        for _ in 0..CLAVE_LEN {
            let mut byte = [0u8; 1];
            if rng.fill(&mut byte).is_err() {
                // Random generation is infallible on supported platforms;
                // bail out with a time-derived fallback rather than loop forever
                return format!("rf{}", chrono::Utc::now().timestamp_millis());
            }
            let idx = (byte[0] as usize) % allowed_chars.len();
            clave.push(allowed_chars.as_bytes()[idx] as char);
        }

        clave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AutenticacionService {
        // generar_clave never touches the pool
        AutenticacionService::new(SqlitePool::connect_lazy("sqlite::memory:").unwrap())
    }

    #[tokio::test]
    async fn test_generar_clave_length_and_charset() {
        let svc = service();
        let clave = svc.generar_clave();

        assert_eq!(clave.len(), CLAVE_LEN);
        assert!(clave.chars().all(|c| c.is_ascii_alphanumeric()));
        // Ambiguous characters are excluded from the alphabet
        assert!(!clave.contains('0'));
        assert!(!clave.contains('O'));
        assert!(!clave.contains('l'));
    }

    #[tokio::test]
    async fn test_generar_clave_is_random() {
        let svc = service();
        let a = svc.generar_clave();
        let b = svc.generar_clave();
        // Collision probability over a 56-char alphabet is negligible
        assert_ne!(a, b);
    }
}
