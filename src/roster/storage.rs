//! Storage trait — whole-file byte read/write used by roster persistence.
//!
//! Implementations are blocking and `Send + Sync`; the async persistence
//! calls in [`persist`](super::persist) run them on tokio's blocking pool.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AppError;

/// Byte-stream storage addressed by path.
pub trait Storage: Send + Sync {
    /// Read the entire content at `path`. Fails if it is missing or unreadable.
    fn read_all(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Replace the entire content at `path` with `bytes`.
    fn write_all(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError>;
}

/// The local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read_all(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(path)
            .map_err(|e| AppError::Storage(format!("cannot read {}: {e}", path.display())))
    }

    fn write_all(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError> {
        fs::write(path, bytes)
            .map_err(|e| AppError::Storage(format!("cannot write {}: {e}", path.display())))
    }
}

/// Ephemeral in-memory storage.
///
/// Content lives in process memory and is discarded with the value. Paths
/// are plain map keys; no directories are involved.
#[derive(Debug, Default)]
pub struct MemStorage {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `path` with `bytes`, replacing anything already there.
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Result<(), AppError> {
        self.lock()?.insert(path.into(), bytes.into());
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>>, AppError> {
        self.files
            .lock()
            .map_err(|_| AppError::Storage("mem storage lock poisoned".into()))
    }
}

impl Storage for MemStorage {
    fn read_all(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        self.lock()?
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::Storage(format!("cannot read {}: not found", path.display())))
    }

    fn write_all(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError> {
        self.lock()?.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}
