//! Key-value persistence with get/set-string semantics.
//!
//! Storage is a best-effort side effect: any failure degrades the run to
//! in-memory operation with a warning, never an error to the caller.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str);
}

/// HashMap-backed store for tests and degraded in-memory runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

/// One JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    /// Creation failure is logged and tolerated; reads and writes will then
    /// degrade to no-ops for the run.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(err) = std::fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), %err, "could not create data dir; running in-memory only");
        }
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read record");
                None
            }
        }
    }

    fn put(&mut self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(err) = std::fs::write(&path, value) {
            warn!(path = %path.display(), %err, "could not persist record");
        }
    }
}
