//! Key-Value store wrapper with automatic serialization.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Where the cached bytes live.
#[derive(Debug)]
enum Backend {
    /// One `<key>.json` file per key inside a directory.
    Directory(PathBuf),
    /// Process-local map, lost on exit.
    Memory(Mutex<BTreeMap<String, Vec<u8>>>),
}

/// Type-safe cache backed by a directory on disk or by memory.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug)]
pub struct Cache {
    backend: Backend,
}

impl Cache {
    /// Open a directory-backed store, creating the directory if needed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open("./.woods")?;
    /// ```
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CacheError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", dir.display(), e)))?;
        tracing::debug!(dir = %dir.display(), "opened cache directory");
        Ok(Self {
            backend: Backend::Directory(dir.to_path_buf()),
        })
    }

    /// Open an empty in-memory store.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(BTreeMap::new())),
        }
    }

    /// Directory backing this cache, if any.
    pub fn dir(&self) -> Option<&Path> {
        match &self.backend {
            Backend::Directory(dir) => Some(dir),
            Backend::Memory(_) => None,
        }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let state: Option<StoreState> = cache.get("artisan-woods-storage")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.get_bytes(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing any previous value.
    ///
    /// Directory writes go to a temporary file that is then renamed over the
    /// target, so readers never observe a half-written value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("artisan-woods-storage", &state)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        validate_key(key)?;
        let bytes = serde_json::to_vec(value)?;
        match &self.backend {
            Backend::Directory(dir) => {
                let path = entry_path(dir, key);
                let tmp_path = path.with_extension("json.tmp");
                fs::write(&tmp_path, &bytes)?;
                fs::rename(&tmp_path, &path)?;
                Ok(())
            }
            Backend::Memory(map) => {
                lock(map)?.insert(key.to_string(), bytes);
                Ok(())
            }
        }
    }

    /// Delete a value from the cache. Deleting a missing key is not an error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.delete("artisan-woods-storage")?;
    /// ```
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        validate_key(key)?;
        match &self.backend {
            Backend::Directory(dir) => match fs::remove_file(entry_path(dir, key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            },
            Backend::Memory(map) => {
                lock(map)?.remove(key);
                Ok(())
            }
        }
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        validate_key(key)?;
        match &self.backend {
            Backend::Directory(dir) => Ok(entry_path(dir, key).is_file()),
            Backend::Memory(map) => Ok(lock(map)?.contains_key(key)),
        }
    }

    /// Get all keys in the cache, sorted.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// for key in cache.keys()? {
    ///     println!("Key: {}", key);
    /// }
    /// ```
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        match &self.backend {
            Backend::Directory(dir) => {
                let mut keys = Vec::new();
                for entry in fs::read_dir(dir)? {
                    let path = entry?.path();
                    if path.extension().is_some_and(|e| e == "json") {
                        if let Some(stem) = path.file_stem() {
                            keys.push(stem.to_string_lossy().into_owned());
                        }
                    }
                }
                keys.sort();
                Ok(keys)
            }
            Backend::Memory(map) => Ok(lock(map)?.keys().cloned().collect()),
        }
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        validate_key(key)?;
        match &self.backend {
            Backend::Directory(dir) => match fs::read(entry_path(dir, key)) {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            },
            Backend::Memory(map) => Ok(lock(map)?.get(key).cloned()),
        }
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), CacheError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));
    if valid {
        Ok(())
    } else {
        Err(CacheError::InvalidKey(key.to_string()))
    }
}

fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}

fn lock(
    map: &Mutex<BTreeMap<String, Vec<u8>>>,
) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>>, CacheError> {
    map.lock()
        .map_err(|_| CacheError::StoreError("memory store lock poisoned".to_string()))
}
