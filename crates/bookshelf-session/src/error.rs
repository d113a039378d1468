//! # Session Error Types
//!
//! Error types for snapshot storage and authentication.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds key / path context                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AuthGate logs it with warn! and carries on                            │
//! │                                                                         │
//! │  AuthError::InvalidCredentials                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront) ← Serialized for presentation                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Data directory is read-only
    /// - Disk full
    /// - File removed by another process mid-write
    #[error("Session storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be encoded or decoded.
    #[error("Session value '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key is empty or would escape the data directory.
    #[error("Invalid session key: '{0}'")]
    InvalidKey(String),
}

impl StoreError {
    /// Creates an Io error for a given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password pair was not accepted. State is unchanged.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
