//! Error types for the pa library.
//!
//! Every operation returns [`Result`]. Filesystem failures are carried through
//! unchanged where the caller needs the underlying `io::Error` (link creation,
//! generic I/O), and mapped to a path-carrying variant where the path itself is
//! the interesting part (missing paths, permission problems, non-symlinks).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pa error.
///
/// # Examples
///
/// ```
/// use pa::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pa library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value handed to a path operation is neither a string nor something
    /// exposing a path string.
    #[error("unsupported path value {value:?}: {reason}")]
    UnsupportedType {
        /// Lossy rendering of the rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Creating a hard or symbolic link failed.
    #[error("cannot link {} -> {}: {source}", src.display(), dest.display())]
    Link {
        /// The link source.
        src: PathBuf,
        /// The effective link destination.
        dest: PathBuf,
        /// The error reported by the filesystem.
        #[source]
        source: io::Error,
    },

    /// The path exists but is not a symbolic link.
    #[error("not a symlink: {}", path.display())]
    NotASymlink {
        /// The path that was expected to be a symlink.
        path: PathBuf,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided or produced.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A link source pattern could not be parsed as a glob.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The parser error.
        #[source]
        source: glob::PatternError,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Map an `io::Error` raised while touching `path` to the most specific
    /// variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.into() },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pa::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pa::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error came from link creation.
    #[must_use]
    pub fn is_link_error(&self) -> bool {
        matches!(self, Self::Link { .. })
    }
}
