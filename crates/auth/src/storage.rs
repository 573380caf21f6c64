//! Durable key-value storage for values that must survive a restart.
//!
//! In the browser this is `localStorage`; on native targets it is a small JSON
//! file under the OS data directory.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::AuthError;

/// String key-value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), AuthError>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use self::file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, PoisonError};

    use tempfile::NamedTempFile;

    use super::KeyValueStore;
    use crate::error::AuthError;

    /// JSON-file-backed store: one object mapping keys to string values.
    ///
    /// Every operation re-reads the file, so two processes sharing the file see
    /// each other's writes (last writer wins). Writes replace the file with a
    /// rename; a concurrent reader never observes a partially written file.
    #[derive(Debug)]
    pub struct FileStore {
        path: PathBuf,
        // Serializes read-modify-write cycles within this process.
        write_lock: Mutex<()>,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                write_lock: Mutex::new(()),
            }
        }

        /// Store at `{data_dir}/orderdesk/storage.json`.
        pub fn open_default() -> Result<Self, AuthError> {
            Ok(Self::new(default_storage_path()?))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>, AuthError> {
            let raw = match std::fs::read_to_string(&self.path) {
                Ok(raw) => raw,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
                Err(source) => {
                    return Err(AuthError::Io {
                        path: self.path.clone(),
                        source,
                    });
                }
            };

            if raw.trim().is_empty() {
                return Ok(BTreeMap::new());
            }

            serde_json::from_str(&raw).map_err(|source| AuthError::Corrupt {
                path: self.path.clone(),
                source,
            })
        }

        /// Write the whole map to a temporary file next to `path` and rename it
        /// into place, so readers see either the old or the new contents.
        fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), AuthError> {
            let io_err = |source| AuthError::Io {
                path: self.path.clone(),
                source,
            };

            let dir = match self.path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir).map_err(io_err)?;

            let payload = serde_json::to_string_pretty(entries).map_err(|source| AuthError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

            let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
            tmp.write_all(payload.as_bytes()).map_err(io_err)?;
            tmp.as_file().sync_all().map_err(io_err)?;
            tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
            Ok(self.load()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
            let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            let mut entries = self.load()?;
            entries.insert(key.to_string(), value.to_string());
            self.save(&entries)
        }

        fn remove(&self, key: &str) -> Result<(), AuthError> {
            let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            let mut entries = self.load()?;
            if entries.remove(key).is_none() {
                return Ok(());
            }
            self.save(&entries)
        }
    }

    fn default_storage_path() -> Result<PathBuf, AuthError> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .ok_or_else(|| {
                AuthError::unavailable("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")
            })?;

        let mut path = base;
        path.push("orderdesk");
        path.push("storage.json");
        Ok(path)
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use crate::error::AuthError;

    /// The page's `window.localStorage`.
    ///
    /// The handle is looked up on every call; `web_sys::Storage` is not `Send`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    fn storage() -> Result<web_sys::Storage, AuthError> {
        let window = web_sys::window().ok_or_else(|| AuthError::unavailable("no window object"))?;
        window
            .local_storage()
            .map_err(|e| AuthError::unavailable(format!("localStorage access denied: {e:?}")))?
            .ok_or_else(|| AuthError::unavailable("localStorage is disabled"))
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
            storage()?
                .get_item(key)
                .map_err(|e| AuthError::unavailable(format!("localStorage.getItem failed: {e:?}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
            storage()?
                .set_item(key, value)
                .map_err(|e| AuthError::unavailable(format!("localStorage.setItem failed: {e:?}")))
        }

        fn remove(&self, key: &str) -> Result<(), AuthError> {
            storage()?
                .remove_item(key)
                .map_err(|e| AuthError::unavailable(format!("localStorage.removeItem failed: {e:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::with_entry("auth_token", "abc");
        assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("abc"));

        store.remove("auth_token").unwrap();
        assert_eq!(store.get("auth_token").unwrap(), None);

        // Removing again is fine.
        store.remove("auth_token").unwrap();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileStore::new(&path).set("auth_token", "persisted").unwrap();
        FileStore::new(&path).set("theme", "dark").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("auth_token").unwrap().as_deref(), Some("persisted"));
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));

        reopened.remove("auth_token").unwrap();
        assert_eq!(FileStore::new(&path).get("auth_token").unwrap(), None);
        assert_eq!(FileStore::new(&path).get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("auth_token").unwrap(), None);
        store.remove("auth_token").unwrap();
        assert!(!store.path().exists());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_reads_stay_consistent_during_writes() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        FileStore::new(&path).set("auth_token", "abc").unwrap();

        let done = Arc::new(AtomicBool::new(false));
        let writer = {
            let path = path.clone();
            let done = done.clone();
            std::thread::spawn(move || {
                let store = FileStore::new(path);
                while !done.load(Ordering::SeqCst) {
                    store.set("theme", "dark").unwrap();
                    store.remove("theme").unwrap();
                }
            })
        };

        let reader = FileStore::new(&path);
        let mut missing = 0;
        for _ in 0..2000 {
            match reader.get("auth_token").unwrap() {
                Some(token) => assert_eq!(token, "abc"),
                None => missing += 1,
            }
        }

        done.store(true, Ordering::SeqCst);
        writer.join().unwrap();

        assert_eq!(missing, 0);
        assert_eq!(reader.get("auth_token").unwrap().as_deref(), Some("abc"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).get("auth_token").unwrap_err();
        assert!(matches!(err, AuthError::Corrupt { .. }));
    }
}
