//! # Session Store
//!
//! Key/value storage for session snapshots, shaped like browser local
//! storage: string keys, string (JSON) values, no expiry.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SessionStore backends                              │
//! │                                                                         │
//! │  FileSessionStore                     MemorySessionStore                │
//! │  ─────────────────                    ──────────────────                │
//! │  <dir>/<key>.json                     HashMap<String, String>           │
//! │  survives restarts                    lost on drop                      │
//! │  used by the storefront binary        used by tests                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Key the signed-in user snapshot is stored under.
pub const SESSION_KEY: &str = "user";

/// Suffix source for temporary file names, unique within the process.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Storage for session snapshots.
///
/// Implementations must be safe to share between threads; the Auth Gate
/// holds one behind an `Arc`.
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// Reads the value stored under `key`, `None` if absent.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Rejects keys that are empty or could leave the data directory.
fn check_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// One JSON file per key in a data directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSessionStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        check_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Per-write temp file, so concurrent saves never share one.
    fn tmp_path_for(&self, key: &str) -> PathBuf {
        let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.dir.join(format!(".{key}.json.tmp.{}.{n}", std::process::id()))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(key, path = %path.display(), "Session value loaded");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        // Write then rename so a crash never leaves a half-written snapshot
        let tmp = self.tmp_path_for(key);
        fs::write(&tmp, value).map_err(|e| StoreError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::io(&path, e));
        }

        debug!(key, path = %path.display(), "Session value saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "Session value removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-process store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        MemorySessionStore::default()
    }

    /// Creates a store pre-populated with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = MemorySessionStore::new();
        store
            .values
            .lock()
            .expect("session store mutex poisoned")
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values
            .lock()
            .expect("session store mutex poisoned")
            .contains_key(key)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        check_key(key)?;
        let values = self.values.lock().expect("session store mutex poisoned");
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        check_key(key)?;
        let mut values = self.values.lock().expect("session store mutex poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        check_key(key)?;
        let mut values = self.values.lock().expect("session store mutex poisoned");
        values.remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
