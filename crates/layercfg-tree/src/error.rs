//! Error types for layercfg-tree

use crate::tree::Kind;

/// Result type for layercfg-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while writing into a tree.
///
/// Reads never fail: a missing path is reported in-band as an absent
/// [`ValueHandle`](crate::ValueHandle).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The node at `path` is not the container kind the segment requires
    #[error("Invalid type at {path}: expected {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: Kind,
        found: Kind,
    },

    /// Index beyond the single-slot growth allowance, or negative
    #[error("Index {index} out of range at {path} (array length {len})")]
    IndexOutOfRange { path: String, index: i64, len: usize },

    /// Index text that does not parse as an integer
    #[error("Invalid index {index:?} at {path}")]
    InvalidIndex { path: String, index: String },

    #[error("Cannot set a value at an empty path")]
    EmptyPath,

    /// A tree offered as a store root is not an object
    #[error("Expected an object at the root, found {found}")]
    NotAnObject { found: Kind },
}

impl Error {
    /// The rendered path prefix at which the error occurred, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidType { path, .. }
            | Self::IndexOutOfRange { path, .. }
            | Self::InvalidIndex { path, .. } => Some(path),
            Self::EmptyPath | Self::NotAnObject { .. } => None,
        }
    }
}
