// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the mksgit CLI.
///
/// Tracker, git and record errors come from mks-core unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] mks_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("cannot change to directory '{path}': {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for mksgit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
