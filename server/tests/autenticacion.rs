//! Identity verification integration tests
//! Run: cargo test -p refugio-server --test autenticacion

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use refugio_server::auth::{JwtConfig, JwtService};
use refugio_server::db::models::{Usuario, UsuarioCreate};
use refugio_server::db::repository::{RolRepository, UsuarioRepository};
use refugio_server::services::AutenticacionService;
use refugio_server::utils::AppError;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory database");

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await
        .expect("enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("apply migrations");

    pool
}

async fn seed_usuario(pool: &SqlitePool, user_name: &str, clave: &str) -> Usuario {
    let rol = RolRepository::new(pool.clone())
        .find_by_nombre("persona")
        .await
        .expect("query rol")
        .expect("seeded rol");

    let hash = Usuario::hash_clave(clave).expect("hash");
    UsuarioRepository::new(pool.clone())
        .create(
            UsuarioCreate {
                user_name: user_name.to_string(),
                telefono: "600111222".to_string(),
                persona_id: None,
                rol_id: rol.id,
            },
            hash,
        )
        .await
        .expect("create usuario")
}

fn jwt_service() -> JwtService {
    JwtService::with_config(JwtConfig {
        secret: "integration-test-secret-0123456789abcdef".to_string(),
        expiration_minutes: 60,
        issuer: "refugio-server".to_string(),
        audience: "refugio-clients".to_string(),
    })
}

#[tokio::test]
async fn unknown_user_and_wrong_clave_yield_the_same_error() {
    let pool = test_pool().await;
    seed_usuario(&pool, "maria@example.com", "clave-buena").await;
    let svc = AutenticacionService::new(pool.clone());

    let unknown_user = svc
        .identificar("nadie@example.com", "cualquiera")
        .await
        .unwrap_err();
    let wrong_clave = svc
        .identificar("maria@example.com", "clave-mala")
        .await
        .unwrap_err();

    // No distinguishing signal between the two failure modes
    assert!(matches!(unknown_user, AppError::InvalidCredentials));
    assert!(matches!(wrong_clave, AppError::InvalidCredentials));
    assert_eq!(unknown_user.to_string(), wrong_clave.to_string());
}

#[tokio::test]
async fn identificar_returns_usuario_with_rol_and_token_roundtrips() {
    let pool = test_pool().await;
    let seeded = seed_usuario(&pool, "maria@example.com", "clave-buena").await;
    let svc = AutenticacionService::new(pool.clone());

    let (usuario, rol) = svc
        .identificar("maria@example.com", "clave-buena")
        .await
        .expect("identify");
    assert_eq!(usuario.id, seeded.id);
    assert_eq!(rol.nombre, "persona");

    // A freshly minted token verifies back to the same identity and role
    let jwt = jwt_service();
    let token = jwt
        .generate_token(&usuario.id.to_string(), &usuario.user_name, &rol.nombre)
        .expect("token");
    let claims = jwt.validate_token(&token).expect("validate");
    assert_eq!(claims.sub, usuario.id.to_string());
    assert_eq!(claims.username, "maria@example.com");
    assert_eq!(claims.role, "persona");
}

#[tokio::test]
async fn reset_invalidates_the_previous_clave() {
    let pool = test_pool().await;
    let seeded = seed_usuario(&pool, "maria@example.com", "clave-vieja").await;
    let repo = UsuarioRepository::new(pool.clone());
    let svc = AutenticacionService::new(pool.clone());

    // Regenerate the clave the way the reset endpoint does
    let nueva = svc.generar_clave();
    assert_ne!(nueva, "clave-vieja");
    let hash = Usuario::hash_clave(&nueva).expect("hash");
    repo.update_clave_hash(seeded.id, &hash).await.expect("update");

    let usuario = repo
        .find_by_id(seeded.id)
        .await
        .expect("find")
        .expect("exists");
    assert!(!usuario.verify_clave("clave-vieja").expect("verify"));
    assert!(usuario.verify_clave(&nueva).expect("verify"));

    // The old clave no longer authenticates
    let err = svc
        .identificar("maria@example.com", "clave-vieja")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));

    // The new one does
    svc.identificar("maria@example.com", &nueva)
        .await
        .expect("identify with new clave");
}
