// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the library.
//!
//! The ranking engine itself is total: it cannot fail on well-typed input.
//! Everything here comes from the edges - parsing caller-supplied names
//! (sort keys, markup dialects), reading catalogs, and loading config.

use std::path::PathBuf;

/// Errors raised by catalog loading, configuration, and argument parsing.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Unknown sort key. Rejected rather than silently defaulting.
    #[error("invalid sort key '{0}' (expected one of: relevance, name, type, module)")]
    InvalidSortKey(String),

    /// Unknown markup dialect.
    #[error("invalid markup '{0}' (expected one of: pango, html, ansi, plain)")]
    InvalidMarkup(String),

    /// Filesystem error with the path that caused it.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in a catalog, table, or config file.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A catalog record that breaks the record invariants.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SearchError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by bad caller input rather than the environment.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidSortKey(_) | Self::InvalidMarkup(_) | Self::InvalidRecord { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
