//! File-backed token storage: one token per file, written with owner-only
//! permissions on Unix.

use super::traits::TokenStore;
use std::path::{Path, PathBuf};

pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(token.as_bytes())?;
        }

        #[cfg(not(unix))]
        std::fs::write(&self.path, token)?;

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let token = std::fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) {
        if let Err(e) = self.write(token) {
            tracing::warn!(path = %self.path.display(), "Failed to persist token: {e}");
        }
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), "Failed to remove token file: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in_temp() -> (tempfile::TempDir, FileTokenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        (dir, store)
    }

    #[test]
    fn round_trips_a_token() {
        let (_dir, store) = store_in_temp();
        store.save("t1");
        assert_eq!(store.load().as_deref(), Some("t1"));
    }

    #[test]
    fn load_on_missing_file_is_none() {
        let (_dir, store) = store_in_temp();
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_removes_the_file() {
        let (_dir, store) = store_in_temp();
        store.save("t1");
        store.clear();
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn clear_on_missing_file_is_a_no_op() {
        let (_dir, store) = store_in_temp();
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/deeper/token"));
        store.save("t1");
        assert_eq!(store.load().as_deref(), Some("t1"));
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = store_in_temp();
        store.save("t1");
        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
