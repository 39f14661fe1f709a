//! File-backed bearer-token storage.
//!
//! One small file per token (`access_token`, `refresh_token`) in a
//! caller-chosen directory. The `TokenStore` seam is fire-and-forget, so
//! I/O failures are logged here and never propagated — a logout that
//! cannot delete a token file still signs the user out locally.

use std::fs;
use std::path::PathBuf;

use courtside_api::{TokenKind, TokenStore};

/// A [`TokenStore`] that persists tokens to disk.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    /// Creates a store rooted at `dir`. The directory is created on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, kind: TokenKind) -> PathBuf {
        self.dir.join(kind.cookie_name())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        match fs::read_to_string(self.path(kind)) {
            Ok(token) => {
                let token = token.trim().to_string();
                if token.is_empty() { None } else { Some(token) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(
                    path = %self.path(kind).display(),
                    error = %e,
                    "failed to read bearer token"
                );
                None
            }
        }
    }

    fn set(&self, kind: TokenKind, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(self.path(kind), value))
        {
            tracing::warn!(
                path = %self.path(kind).display(),
                error = %e,
                "failed to write bearer token"
            );
        }
    }

    fn clear_all(&self) {
        for kind in TokenKind::all() {
            match fs::remove_file(self.path(kind)) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(
                        path = %self.path(kind).display(),
                        error = %e,
                        "failed to delete bearer token"
                    );
                }
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
