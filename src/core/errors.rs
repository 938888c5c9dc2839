//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for readability operations
#[derive(Debug, Error)]
pub enum Error {
    /// A document could not be parsed into a tree. Fatal for the whole run.
    #[error("Parse error in {name}: {message}")]
    Parse { name: String, message: String },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A revision did not resolve to a tree
    #[error("Unknown revision '{revision}'")]
    Revision {
        revision: String,
        #[source]
        source: git2::Error,
    },

    /// Git errors
    #[error(transparent)]
    Git(#[from] git2::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Directory walk errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),
}

impl Error {
    /// Create a parse error for a named document
    pub fn parse(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
