//! Error types for layercfg-sources

use std::path::{Path, PathBuf};

use layercfg_tree::Kind;

use crate::format::Format;

/// Result type for layercfg-sources operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration sources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoding failed for in-memory content
    #[error("Failed to parse {format} content: {message}")]
    Parse { format: Format, message: String },

    /// Decoding failed for a file
    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("{format} document must have an object at the top level, found {found}")]
    NotAnObject { format: Format, found: Kind },

    #[error(transparent)]
    Tree(#[from] layercfg_tree::Error),
}

impl Error {
    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    /// Attach the originating file to a content-level parse error.
    pub(crate) fn at(self, path: &Path) -> Self {
        match self {
            Self::Parse { format, message } => Self::ConfigParse {
                path: path.to_path_buf(),
                format,
                message,
            },
            other => other,
        }
    }
}
