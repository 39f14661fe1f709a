//! Unified error type for the Courtside client.

use courtside_api::ApiError;
use courtside_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `courtside` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate. The
/// `#[from]` attribute on each variant auto-generates `From` impls, so
/// the `?` operator converts sub-crate errors automatically.
///
/// Note that the session store itself never returns errors — its
/// operations settle into the session's `error` field. This type covers
/// the layers below it (wiring, storage, direct API use).
#[derive(Debug, thiserror::Error)]
pub enum CourtsideError {
    /// An API-level error (transport, decode, rejected request).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A storage-level error (snapshot read/write).
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_error() {
        let err = ApiError::Transport("connection refused".into());
        let top: CourtsideError = err.into();
        assert!(matches!(top, CourtsideError::Api(_)));
        assert!(top.to_string().contains("connection refused"));
    }

    #[test]
    fn test_from_store_error() {
        let err = StoreError::Io {
            path: "/tmp/auth-storage.json".into(),
            source: std::io::Error::other("disk full"),
        };
        let top: CourtsideError = err.into();
        assert!(matches!(top, CourtsideError::Store(_)));
        assert!(top.to_string().contains("disk full"));
    }
}
