//! Usuario Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Usuario model matching the `usuario` table
///
/// The stored secret is always an Argon2 hash and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub clave_hash: String,
    pub telefono: String,
    pub persona_id: Option<i64>,
    pub rol_id: i64,
    pub created_at: i64,
}

/// Create usuario payload
///
/// The clave is generated server side and delivered out of band, so the
/// payload never carries one.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioCreate {
    #[validate(email)]
    pub user_name: String,
    #[validate(length(min = 7, max = 20))]
    pub telefono: String,
    pub persona_id: Option<i64>,
    pub rol_id: i64,
}

/// Partial update usuario payload
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioUpdate {
    pub user_name: Option<String>,
    pub telefono: Option<String>,
    pub persona_id: Option<i64>,
    pub rol_id: Option<i64>,
}

/// Full replace usuario payload
///
/// The stored clave_hash is kept: secrets only change through creation or
/// password reset.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioReplace {
    #[validate(email)]
    pub user_name: String,
    #[validate(length(min = 7, max = 20))]
    pub telefono: String,
    pub persona_id: Option<i64>,
    pub rol_id: i64,
}

impl Usuario {
    /// Verify clave using argon2
    pub fn verify_clave(&self, clave: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.clave_hash)?;
        Ok(Argon2::default()
            .verify_password(clave.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash clave using argon2
    pub fn hash_clave(clave: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(clave.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario_with_clave(clave: &str) -> Usuario {
        Usuario {
            id: 1,
            user_name: "maria@example.com".to_string(),
            clave_hash: Usuario::hash_clave(clave).expect("hash"),
            telefono: "600111222".to_string(),
            persona_id: None,
            rol_id: 2,
            created_at: 0,
        }
    }

    #[test]
    fn test_clave_hash_and_verify() {
        let usuario = usuario_with_clave("s3creta!");

        assert!(usuario.verify_clave("s3creta!").expect("verify"));
        assert!(!usuario.verify_clave("otra-clave").expect("verify"));
    }

    #[test]
    fn test_hash_is_salted() {
        // Two hashes of the same clave must differ (random salt)
        let a = Usuario::hash_clave("s3creta!").expect("hash");
        let b = Usuario::hash_clave("s3creta!").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn test_clave_hash_never_serialized() {
        let usuario = usuario_with_clave("s3creta!");
        let json = serde_json::to_string(&usuario).expect("serialize");
        assert!(!json.contains("clave"));
        assert!(json.contains("userName"));
    }
}
