use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Result, StoreError};

/// A keyed string store, the persistence seam the post store writes through.
///
/// Values are opaque text, read and overwritten whole. One key holds the
/// entire post collection; there is no partial update at this layer.
pub trait StringStore: Send + Sync {
    /// Raw text stored under `key`, or `None` if the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: StringStore + ?Sized> StringStore for std::sync::Arc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// File-backed store: one file per key under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `path`, creating the directory if needed.
    pub fn open(path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self { root: path })
    }

    /// Open a store in the per-user data directory for this platform.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "quill").ok_or(StoreError::NoDataDir)?;
        Self::open(dirs.data_dir().to_path_buf())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StringStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        fs::write(&path, value).map_err(|source| StoreError::Io { path, source })
    }
}

/// In-memory store. Mostly useful in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("memory store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("memory store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
