use super::CredentialStore;
use crate::app::AppError;
use secrecy::{ExposeSecret, SecretString};
use std::{
    collections::BTreeMap,
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tempfile::NamedTempFile;
use tracing::debug;

type Entries = BTreeMap<String, String>;

/// JSON file store: a single object mapping keys to string values.
///
/// A missing file reads as an empty store. Writes go to a uniquely named,
/// owner-only temp file in the same directory that is renamed over the
/// original, so readers never see a half-written file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, AppError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {err}",
                    self.path.display()
                )))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|err| {
            AppError::Storage(format!("Failed to parse {}: {err}", self.path.display()))
        })
    }

    fn save(&self, entries: &Entries) -> Result<(), AppError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|err| {
            AppError::Storage(format!("Failed to create {}: {err}", dir.display()))
        })?;

        let payload = serde_json::to_vec_pretty(entries)
            .map_err(|err| AppError::Serialization(format!("Failed to encode store: {err}")))?;

        // NamedTempFile is created 0600 under a fresh name.
        let mut file = NamedTempFile::new_in(dir).map_err(|err| {
            AppError::Storage(format!("Failed to create temp file in {}: {err}", dir.display()))
        })?;
        file.write_all(&payload)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|err| {
                AppError::Storage(format!("Failed to write {}: {err}", file.path().display()))
            })?;

        file.persist(&self.path).map_err(|err| {
            AppError::Storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                err.error
            ))
        })?;

        debug!(path = %self.path.display(), keys = entries.len(), "store saved");
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), AppError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| AppError::Storage("file store lock poisoned".to_string()))?;
        let mut entries = self.load()?;
        apply(&mut entries);
        self.save(&entries)
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<SecretString>, AppError> {
        Ok(self.load()?.remove(key).map(SecretString::from))
    }

    fn set(&self, key: &str, value: &SecretString) -> Result<(), AppError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.expose_secret().to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::TOKEN_KEY;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("storage.json"));
        assert!(store.get(TOKEN_KEY).unwrap().is_none());
        assert!(store.token().unwrap().is_none());
    }

    #[test]
    fn set_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileStore::new(&path)
            .set(TOKEN_KEY, &SecretString::from("abc123"))
            .unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.token().unwrap().unwrap().expose_secret(),
            "abc123"
        );

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["token"], "abc123");
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let store = FileStore::new(&path);
        store.set(TOKEN_KEY, &SecretString::from("abc123")).unwrap();
        store.remove(TOKEN_KEY).unwrap();

        assert_eq!(
            store.get("theme").unwrap().unwrap().expose_secret(),
            "dark"
        );
        assert!(store.get(TOKEN_KEY).unwrap().is_none());
    }

    #[test]
    fn remove_without_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        FileStore::new(&path).remove(TOKEN_KEY).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).get(TOKEN_KEY).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[cfg(unix)]
    #[test]
    fn store_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        FileStore::new(&path)
            .set(TOKEN_KEY, &SecretString::from("abc123"))
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn stale_temp_file_does_not_leak_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let stale = dir.path().join("storage.tmp");
        fs::write(&stale, "leftover").unwrap();
        fs::set_permissions(&stale, fs::Permissions::from_mode(0o644)).unwrap();

        FileStore::new(&path)
            .set(TOKEN_KEY, &SecretString::from("abc123"))
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&stale).unwrap(), "leftover");
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_keeps_owner_only_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        FileStore::new(&path)
            .set(TOKEN_KEY, &SecretString::from("abc123"))
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn concurrent_stores_do_not_clobber_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let path = path.clone();
                std::thread::spawn(move || {
                    FileStore::new(&path)
                        .set(TOKEN_KEY, &SecretString::from(format!("token-{i}")))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let token = FileStore::new(&path).token().unwrap().unwrap();
        assert!(token.expose_secret().starts_with("token-"));
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
