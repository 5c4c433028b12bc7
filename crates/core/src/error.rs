// Copyright 2026 Benchlab Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types shared across Benchlab crates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the data model and result-set I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-provided value was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An underlying filesystem operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A persisted result set could not be parsed.
    ///
    /// Carries the offending path so collaborator failures name the
    /// artifact that broke the contract.
    #[error("malformed result set {}: {source}", path.display())]
    Parse {
        /// Path of the artifact that failed to parse.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Build an [`Error::InvalidInput`] from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result alias used across Benchlab crates.
pub type Result<T> = std::result::Result<T, Error>;
