//! Request log persistence.
//!
//! The log is an ordered sequence of epoch-millisecond timestamps held under
//! a single key; the file-backed store keeps it as one JSON array of numbers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Errors from the request log store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read request log: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write request log: {0}")]
    Write(#[source] io::Error),

    #[error("failed to encode request log: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered sequence of request timestamps (epoch milliseconds).
///
/// Chronological insertion, duplicates permitted. Access is read-modify-write
/// with no locking; concurrent processes can race on the shared log.
pub trait RequestLogStore: Send + Sync {
    fn load(&self) -> StoreResult<Vec<u64>>;
    fn save(&self, timestamps: &[u64]) -> StoreResult<()>;
}

impl<S: RequestLogStore + ?Sized> RequestLogStore for std::sync::Arc<S> {
    fn load(&self) -> StoreResult<Vec<u64>> {
        (**self).load()
    }

    fn save(&self, timestamps: &[u64]) -> StoreResult<()> {
        (**self).save(timestamps)
    }
}

/// File-backed store: one JSON array of numbers.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RequestLogStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<u64>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Read(e)),
        };

        match serde_json::from_str(&content) {
            Ok(timestamps) => Ok(timestamps),
            Err(e) => {
                // A cleared or corrupt log resets the limit.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Request log unreadable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, timestamps: &[u64]) -> StoreResult<()> {
        let json = serde_json::to_string(timestamps)?;
        fs::write(&self.path, json).map_err(StoreError::Write)
    }
}

/// In-memory store for tests and non-persistent runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<u64>>,
}

impl RequestLogStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<u64>> {
        Ok(self.entries.lock().expect("request log mutex poisoned").clone())
    }

    fn save(&self, timestamps: &[u64]) -> StoreResult<()> {
        *self.entries.lock().expect("request log mutex poisoned") = timestamps.to_vec();
        Ok(())
    }
}
