//! File-backed snapshot store.
//!
//! One JSON file (`auth-storage.json`) in a caller-chosen directory,
//! written atomically (temp file + rename) so a crash mid-write never
//! leaves a half-written snapshot behind.

use std::fs;
use std::path::PathBuf;

use crate::{SessionSnapshot, SnapshotStore, StoreError, STORAGE_KEY};

/// A [`SnapshotStore`] that persists the snapshot as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a store rooted at `dir`. The directory is created on the
    /// first save, not here, so constructing one is infallible.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.json"))
    }

    fn tmp_path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.json.tmp"))
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::io(&self.dir, e))?;

        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(StoreError::Encode)?;

        // Write-then-rename: the real file is only ever replaced by a
        // fully written one.
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, self.path())
            .map_err(|e| StoreError::io(self.path(), e))?;

        tracing::debug!(path = %self.path().display(), "session snapshot saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let path = self.path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None)
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                // A corrupt snapshot is treated as absent: the user just
                // has to sign in again.
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "discarding unreadable session snapshot"
                );
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(self.path(), e)),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
