//! Sandboxed File Storage
//!
//! Maps numeric file categories to per-category base directories and
//! resolves requested filenames against them, rejecting any path that
//! escapes its sandbox.

use std::path::{Path, PathBuf};

use crate::utils::AppError;

/// File category: selects which storage sandbox an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoArchivo {
    /// Pet images (code 1)
    Mascotas,
    /// Person images (code 2)
    Personas,
}

impl TipoArchivo {
    pub const ALL: [TipoArchivo; 2] = [TipoArchivo::Mascotas, TipoArchivo::Personas];

    /// Map the numeric wire code to a category
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(TipoArchivo::Mascotas),
            2 => Some(TipoArchivo::Personas),
            _ => None,
        }
    }

    /// Subdirectory under the storage root
    pub fn subdir(&self) -> &'static str {
        match self {
            TipoArchivo::Mascotas => "mascotas",
            TipoArchivo::Personas => "personas",
        }
    }
}

/// Sandboxed file storage rooted at `{work_dir}/archivos`
#[derive(Clone, Debug)]
pub struct ArchivoStorage {
    base: PathBuf,
}

impl ArchivoStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Base directory of a category
    pub fn dir_de(&self, tipo: TipoArchivo) -> PathBuf {
        self.base.join(tipo.subdir())
    }

    /// Resolve a requested filename inside its category sandbox
    ///
    /// Filenames carrying separators or `..` segments are rejected before
    /// any filesystem access; the canonicalized result must remain a
    /// descendant of the canonicalized base directory (this also covers
    /// symlinks pointing outside the sandbox).
    pub async fn resolver(&self, tipo: TipoArchivo, nombre: &str) -> Result<PathBuf, AppError> {
        if nombre.is_empty()
            || nombre.contains('/')
            || nombre.contains('\\')
            || Path::new(nombre)
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(AppError::path_traversal(format!(
                "Invalid file name: {}",
                nombre
            )));
        }

        let dir = self.dir_de(tipo);
        let canonical_base = tokio::fs::canonicalize(&dir)
            .await
            .map_err(|e| AppError::internal(format!("Storage directory unavailable: {}", e)))?;

        let candidate = dir.join(nombre);
        let canonical = match tokio::fs::canonicalize(&candidate).await {
            Ok(p) => p,
            Err(_) => {
                return Err(AppError::not_found(format!("File {} not found", nombre)));
            }
        };

        if !canonical.starts_with(&canonical_base) {
            tracing::warn!(
                nombre = %nombre,
                resolved = %canonical.display(),
                "Path traversal attempt rejected"
            );
            return Err(AppError::path_traversal(format!(
                "Invalid file name: {}",
                nombre
            )));
        }

        Ok(canonical)
    }

    /// List the filenames currently present in a category sandbox
    ///
    /// Non-recursive; directory entries that are not regular files are
    /// skipped. Order is not significant.
    pub async fn listar(&self, tipo: TipoArchivo) -> Result<Vec<String>, AppError> {
        let dir = self.dir_de(tipo);
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| AppError::internal(format!("Storage directory unavailable: {}", e)))?;

        let mut nombres = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::internal(format!("Failed to read storage directory: {}", e)))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if is_file {
                nombres.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        Ok(nombres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn storage_with_files() -> (tempfile::TempDir, ArchivoStorage) {
        let tmp = tempfile::tempdir().unwrap();
        for tipo in TipoArchivo::ALL {
            std::fs::create_dir_all(tmp.path().join(tipo.subdir())).unwrap();
        }
        std::fs::write(tmp.path().join("mascotas/dog.jpg"), b"dog bytes").unwrap();
        std::fs::write(tmp.path().join("mascotas/cat.png"), b"cat bytes").unwrap();
        std::fs::write(tmp.path().join("personas/maria.jpg"), b"maria bytes").unwrap();
        let storage = ArchivoStorage::new(tmp.path());
        (tmp, storage)
    }

    #[test]
    fn test_from_code() {
        assert_eq!(TipoArchivo::from_code(1), Some(TipoArchivo::Mascotas));
        assert_eq!(TipoArchivo::from_code(2), Some(TipoArchivo::Personas));
        assert_eq!(TipoArchivo::from_code(3), None);
        assert_eq!(TipoArchivo::from_code(-1), None);
    }

    #[tokio::test]
    async fn test_resolver_existing_file() {
        let (_tmp, storage) = storage_with_files().await;

        let path = storage
            .resolver(TipoArchivo::Mascotas, "dog.jpg")
            .await
            .expect("resolve");
        let bytes = tokio::fs::read(&path).await.expect("read");
        assert_eq!(bytes, b"dog bytes");
    }

    #[tokio::test]
    async fn test_resolver_rejects_traversal() {
        let (_tmp, storage) = storage_with_files().await;

        let err = storage
            .resolver(TipoArchivo::Mascotas, "../../etc/passwd")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PathTraversal(_)));

        let err = storage
            .resolver(TipoArchivo::Mascotas, "..")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PathTraversal(_)));

        let err = storage
            .resolver(TipoArchivo::Mascotas, "sub\\dir.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PathTraversal(_)));

        let err = storage.resolver(TipoArchivo::Mascotas, "").await.unwrap_err();
        assert!(matches!(err, AppError::PathTraversal(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_resolver_escape_via_symlink_is_rejected() {
        let (tmp, storage) = storage_with_files().await;

        let outside = tmp.path().join("secret.txt");
        std::fs::write(&outside, b"secret").unwrap();
        let link = tmp.path().join("mascotas/escape.txt");
        std::os::unix::fs::symlink(&outside, &link).unwrap();

        let err = storage
            .resolver(TipoArchivo::Mascotas, "escape.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PathTraversal(_)));
    }

    #[tokio::test]
    async fn test_resolver_missing_file_is_not_found() {
        let (_tmp, storage) = storage_with_files().await;

        let err = storage
            .resolver(TipoArchivo::Mascotas, "missing.jpg")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_listar_returns_filename_set() {
        let (_tmp, storage) = storage_with_files().await;

        let mut nombres = storage.listar(TipoArchivo::Mascotas).await.expect("listar");
        nombres.sort();
        assert_eq!(nombres, vec!["cat.png".to_string(), "dog.jpg".to_string()]);

        let nombres = storage.listar(TipoArchivo::Personas).await.expect("listar");
        assert_eq!(nombres, vec!["maria.jpg".to_string()]);
    }
}
