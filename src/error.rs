//! Error types for catalog loading, persistence, and queries.
//!
//! A single unified type [`SonarError`] covers the failure modes of this
//! crate. The split follows the recovery story rather than the source of the
//! error:
//!
//! | Variant | Use case | Recoverable? |
//! |---------|----------|--------------|
//! | [`Dataset`](SonarError::Dataset) | Source CSV missing, malformed, or unparseable | No — reference data is corrupt |
//! | [`Store`](SonarError::Store) | Embedded store open/transaction failures | No — environment unusable |
//! | [`Serialization`](SonarError::Serialization) | Encoding/decoding persisted records | No |
//! | [`Io`](SonarError::Io) | Plain file I/O outside the store | Sometimes |
//!
//! "Nothing found" is never an error in this crate: unknown names and ids,
//! and an empty staging registry, are all expressed as `Option`/empty
//! collections at the call sites.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type SonarResult<T> = Result<T, SonarError>;

/// Unified error type for the catalog, registry, and persistence layers.
#[derive(Error, Debug)]
pub enum SonarError {
    /// The source dataset is missing a field or holds an unparseable value.
    /// Always fatal: a partial catalog is worse than no catalog.
    #[error("dataset error in {path}: {message}")]
    Dataset { path: PathBuf, message: String },

    /// An embedded-store operation failed (open, transaction, table access).
    #[error("store error: {0}")]
    Store(String),

    /// A persisted record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File I/O failure outside the embedded store.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SonarError {
    /// Build a [`Dataset`](Self::Dataset) error for a row or field of `path`.
    pub fn dataset(path: &Path, message: impl Into<String>) -> Self {
        SonarError::Dataset {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Wrap any store-layer failure, keeping only its display form.
    pub fn store(err: impl std::fmt::Display) -> Self {
        SonarError::Store(err.to_string())
    }

    /// Wrap an encode/decode failure.
    pub fn serialization(err: impl std::fmt::Display) -> Self {
        SonarError::Serialization(err.to_string())
    }
}
