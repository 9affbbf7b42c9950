//! Symlink inspection and canonicalization.
//!
//! These are the only path operations besides linking that read the
//! filesystem: [`realpath`] follows every symlink, [`readlink`] reads one, and
//! [`is_dangling`] checks whether a symlink still points somewhere.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::path::input::{get, path_to_string, PathInput};

/// Canonicalize a path by following all symlinks.
///
/// The path must exist.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - An I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use pa::realpath;
///
/// let canonical = realpath("/tmp").unwrap();
/// assert!(canonical.starts_with('/'));
/// ```
pub fn realpath<'a>(path: impl Into<PathInput<'a>>) -> Result<String> {
    let path = get(path);
    let canonical = fs::canonicalize(&path).map_err(|e| Error::from_io(&path, e))?;
    path_to_string(canonical)
}

/// Read the target of a symbolic link.
///
/// The target is returned as stored in the link, so relative targets stay
/// relative.
///
/// # Errors
///
/// Returns `NotASymlink` if the path exists but is not a symlink, and
/// `PathNotFound` if it does not exist.
pub fn readlink<'a>(path: impl Into<PathInput<'a>>) -> Result<String> {
    let path = get(path);
    match fs::read_link(&path) {
        Ok(target) => path_to_string(target),
        Err(e) if e.kind() == ErrorKind::InvalidInput => Err(Error::NotASymlink {
            path: PathBuf::from(path),
        }),
        Err(e) => Err(Error::from_io(&path, e)),
    }
}

/// Whether a path is a dangling symlink.
///
/// Returns `Some(true)` for a symlink whose target does not exist,
/// `Some(false)` for a symlink whose target exists, and `None` when the path
/// is not a symlink at all (including when it does not exist). Relative
/// targets are resolved against the directory holding the link.
///
/// A target that cannot be resolved (missing, a symlink loop, a non-directory
/// in the middle) counts as dangling. A target that exists but cannot be
/// inspected because permission is denied counts as live.
///
/// # Examples
///
/// ```
/// use pa::is_dangling;
///
/// assert_eq!(is_dangling("/definitely/not/here"), None);
/// ```
#[must_use]
pub fn is_dangling<'a>(path: impl Into<PathInput<'a>>) -> Option<bool> {
    let path = get(path);
    let meta = fs::symlink_metadata(&path).ok()?;
    if !meta.file_type().is_symlink() {
        return None;
    }
    match fs::metadata(&path) {
        Ok(_) => Some(false),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Some(false),
        Err(_) => Some(true),
    }
}
