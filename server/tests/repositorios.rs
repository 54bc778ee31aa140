//! Repository integration tests over an in-memory SQLite database
//! Run: cargo test -p refugio-server --test repositorios

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use refugio_server::db::models::{
    MascotaCreate, PersonaCreate, RazaCreate, SolicitudCreate, SolicitudUpdate, Usuario,
    UsuarioCreate, UsuarioUpdate,
};
use refugio_server::db::repository::{
    MascotaRepository, PersonaRepository, RazaRepository, RepoError, RolRepository,
    SolicitudRepository, UsuarioRepository,
};

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

async fn rol_persona_id(pool: &SqlitePool) -> i64 {
    RolRepository::new(pool.clone())
        .find_by_nombre("persona")
        .await
        .expect("query rol")
        .expect("seeded rol")
        .id
}

fn usuario_payload(user_name: &str, rol_id: i64) -> UsuarioCreate {
    UsuarioCreate {
        user_name: user_name.to_string(),
        telefono: "600111222".to_string(),
        persona_id: None,
        rol_id,
    }
}

#[tokio::test]
async fn migrations_seed_base_roles() {
    let pool = test_pool().await;
    let repo = RolRepository::new(pool.clone());

    let admin = repo.find_by_nombre("admin").await.expect("query");
    let persona = repo.find_by_nombre("persona").await.expect("query");

    assert!(admin.is_some());
    assert!(persona.is_some());
}

#[tokio::test]
async fn usuario_crud_roundtrip() {
    let pool = test_pool().await;
    let rol_id = rol_persona_id(&pool).await;
    let repo = UsuarioRepository::new(pool.clone());

    let hash = Usuario::hash_clave("s3creta!").expect("hash");
    let created = repo
        .create(usuario_payload("maria@example.com", rol_id), hash)
        .await
        .expect("create");
    assert_eq!(created.user_name, "maria@example.com");
    assert_eq!(created.rol_id, rol_id);

    let fetched = repo
        .find_by_id(created.id)
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(fetched.user_name, created.user_name);

    let by_name = repo
        .find_by_user_name("maria@example.com")
        .await
        .expect("find")
        .expect("exists");
    assert_eq!(by_name.id, created.id);

    assert_eq!(repo.count().await.expect("count"), 1);

    let updated = repo
        .update(
            created.id,
            UsuarioUpdate {
                telefono: Some("699999999".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.telefono, "699999999");
    // clave hash untouched by partial update
    assert_eq!(updated.clave_hash, created.clave_hash);

    assert!(repo.delete(created.id).await.expect("delete"));
    assert_eq!(repo.count().await.expect("count"), 0);
}

#[tokio::test]
async fn duplicate_user_name_is_rejected() {
    let pool = test_pool().await;
    let rol_id = rol_persona_id(&pool).await;
    let repo = UsuarioRepository::new(pool.clone());

    let hash = Usuario::hash_clave("s3creta!").expect("hash");
    repo.create(usuario_payload("maria@example.com", rol_id), hash.clone())
        .await
        .expect("create");

    let err = repo
        .create(usuario_payload("maria@example.com", rol_id), hash)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn usuario_bulk_update_returns_affected_count() {
    let pool = test_pool().await;
    let rol_id = rol_persona_id(&pool).await;
    let repo = UsuarioRepository::new(pool.clone());

    for name in ["a@example.com", "b@example.com", "c@example.com"] {
        let hash = Usuario::hash_clave("s3creta!").expect("hash");
        repo.create(usuario_payload(name, rol_id), hash)
            .await
            .expect("create");
    }

    let affected = repo
        .update_all(UsuarioUpdate {
            telefono: Some("611111111".to_string()),
            ..Default::default()
        })
        .await
        .expect("update_all");
    assert_eq!(affected, 3);

    for usuario in repo.find_all().await.expect("find_all") {
        assert_eq!(usuario.telefono, "611111111");
    }
}

#[tokio::test]
async fn raza_with_mascotas_cannot_be_deleted() {
    let pool = test_pool().await;
    let razas = RazaRepository::new(pool.clone());
    let mascotas = MascotaRepository::new(pool.clone());

    let raza = razas
        .create(RazaCreate {
            nombre: "Podenco".to_string(),
            descripcion: None,
        })
        .await
        .expect("create raza");

    let mascota = mascotas
        .create(MascotaCreate {
            nombre: "Luna".to_string(),
            foto: None,
            edad: Some(3),
            descripcion: None,
            raza_id: raza.id,
            persona_id: None,
            en_adopcion: None,
        })
        .await
        .expect("create mascota");
    assert!(mascota.en_adopcion);

    let err = razas.delete(raza.id).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // Once the mascota is gone the raza can be removed
    assert!(mascotas.delete(mascota.id).await.expect("delete mascota"));
    assert!(razas.delete(raza.id).await.expect("delete raza"));
}

#[tokio::test]
async fn persona_and_mascota_join_methods() {
    let pool = test_pool().await;
    let personas = PersonaRepository::new(pool.clone());
    let razas = RazaRepository::new(pool.clone());
    let mascotas = MascotaRepository::new(pool.clone());
    let solicitudes = SolicitudRepository::new(pool.clone());

    let persona = personas
        .create(PersonaCreate {
            nombre: "María".to_string(),
            apellidos: "García".to_string(),
            email: "maria@example.com".to_string(),
            telefono: "600111222".to_string(),
            direccion: None,
        })
        .await
        .expect("create persona");

    let raza = razas
        .create(RazaCreate {
            nombre: "Mestizo".to_string(),
            descripcion: None,
        })
        .await
        .expect("create raza");

    let mascota = mascotas
        .create(MascotaCreate {
            nombre: "Rocky".to_string(),
            foto: Some("rocky.jpg".to_string()),
            edad: Some(5),
            descripcion: None,
            raza_id: raza.id,
            persona_id: None,
            en_adopcion: Some(true),
        })
        .await
        .expect("create mascota");

    for _ in 0..2 {
        solicitudes
            .create(SolicitudCreate {
                persona_id: persona.id,
                mascota_id: mascota.id,
                comentario: Some("Tengo jardín".to_string()),
            })
            .await
            .expect("create solicitud");
    }

    let de_persona = personas
        .find_solicitudes(persona.id)
        .await
        .expect("join persona");
    assert_eq!(de_persona.len(), 2);
    assert!(de_persona.iter().all(|s| s.estado == "pendiente"));

    let de_mascota = mascotas
        .find_solicitudes(mascota.id)
        .await
        .expect("join mascota");
    assert_eq!(de_mascota.len(), 2);

    let de_raza = razas.find_mascotas(raza.id).await.expect("join raza");
    assert_eq!(de_raza.len(), 1);
    assert_eq!(de_raza[0].nombre, "Rocky");
}

#[tokio::test]
async fn solicitud_estado_is_validated() {
    let pool = test_pool().await;
    let personas = PersonaRepository::new(pool.clone());
    let razas = RazaRepository::new(pool.clone());
    let mascotas = MascotaRepository::new(pool.clone());
    let solicitudes = SolicitudRepository::new(pool.clone());

    let persona = personas
        .create(PersonaCreate {
            nombre: "Ana".to_string(),
            apellidos: "López".to_string(),
            email: "ana@example.com".to_string(),
            telefono: "600333444".to_string(),
            direccion: None,
        })
        .await
        .expect("create persona");
    let raza = razas
        .create(RazaCreate {
            nombre: "Siamés".to_string(),
            descripcion: None,
        })
        .await
        .expect("create raza");
    let mascota = mascotas
        .create(MascotaCreate {
            nombre: "Misu".to_string(),
            foto: None,
            edad: None,
            descripcion: None,
            raza_id: raza.id,
            persona_id: None,
            en_adopcion: None,
        })
        .await
        .expect("create mascota");

    let solicitud = solicitudes
        .create(SolicitudCreate {
            persona_id: persona.id,
            mascota_id: mascota.id,
            comentario: None,
        })
        .await
        .expect("create solicitud");

    let err = solicitudes
        .update(
            solicitud.id,
            SolicitudUpdate {
                estado: Some("archivada".to_string()),
                comentario: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let updated = solicitudes
        .update(
            solicitud.id,
            SolicitudUpdate {
                estado: Some("aprobada".to_string()),
                comentario: None,
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.estado, "aprobada");
}

#[tokio::test]
async fn solicitud_for_missing_references_is_rejected() {
    let pool = test_pool().await;
    let solicitudes = SolicitudRepository::new(pool.clone());

    let err = solicitudes
        .create(SolicitudCreate {
            persona_id: 999,
            mascota_id: 999,
            comentario: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
