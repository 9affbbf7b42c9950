//! Path inputs accepted by the path operations.
//!
//! Operations take either a plain string or anything implementing
//! [`PathLike`]. Both are captured by the closed [`PathInput`] variant, and
//! [`get`] pulls the string back out.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::view::PathView;

/// Something that exposes a path string.
///
/// # Examples
///
/// ```
/// use pa::{get, PathInput, PathLike};
///
/// struct Upload {
///     path: String,
/// }
///
/// impl PathLike for Upload {
///     fn path(&self) -> &str {
///         &self.path
///     }
/// }
///
/// let upload = Upload { path: "/srv/in/a.ogg".to_string() };
/// assert_eq!(get(PathInput::from(&upload as &dyn PathLike)), "/srv/in/a.ogg");
/// ```
pub trait PathLike {
    /// The path string of this value.
    fn path(&self) -> &str;
}

/// A path argument: either a string or a [`PathLike`] value.
#[derive(Clone, Copy)]
pub enum PathInput<'a> {
    /// A plain path string.
    Str(&'a str),
    /// A value exposing a path string.
    Like(&'a dyn PathLike),
}

impl<'a> PathInput<'a> {
    /// Borrow the path string.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Str(s) => s,
            Self::Like(like) => like.path(),
        }
    }
}

impl fmt::Debug for PathInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Like(like) => f.debug_tuple("Like").field(&like.path()).finish(),
        }
    }
}

impl<'a> From<&'a str> for PathInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a String> for PathInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(s.as_str())
    }
}

impl<'a> From<&'a dyn PathLike> for PathInput<'a> {
    fn from(like: &'a dyn PathLike) -> Self {
        Self::Like(like)
    }
}

impl<'a> From<&'a PathView> for PathInput<'a> {
    fn from(view: &'a PathView) -> Self {
        Self::Like(view)
    }
}

impl<'a> TryFrom<&'a OsStr> for PathInput<'a> {
    type Error = Error;

    fn try_from(raw: &'a OsStr) -> Result<Self> {
        raw.to_str().map(Self::Str).ok_or_else(|| Error::UnsupportedType {
            value: raw.to_string_lossy().into_owned(),
            reason: "path is not valid UTF-8".to_string(),
        })
    }
}

impl<'a> TryFrom<&'a Path> for PathInput<'a> {
    type Error = Error;

    fn try_from(path: &'a Path) -> Result<Self> {
        Self::try_from(path.as_os_str())
    }
}

impl<'a> TryFrom<&'a PathBuf> for PathInput<'a> {
    type Error = Error;

    fn try_from(path: &'a PathBuf) -> Result<Self> {
        Self::try_from(path.as_os_str())
    }
}

/// Extract the path string from an input.
///
/// # Examples
///
/// ```
/// use pa::get;
///
/// assert_eq!(get("/home/a"), "/home/a");
/// ```
pub fn get<'a>(input: impl Into<PathInput<'a>>) -> String {
    input.into().as_str().to_string()
}

/// Convert a `Path` produced by the standard library back to a `String`.
pub(crate) fn path_to_string(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "Path contains invalid UTF-8".to_string(),
        })
}
