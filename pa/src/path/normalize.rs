//! Absolute, expanded and shortened path forms.
//!
//! - [`absolute`] anchors a path at the current directory and resolves `.`
//!   and `..` lexically
//! - [`expand`] does the same after expanding a leading `~`
//! - [`shorten`] goes the other way and folds the home directory back into `~`

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::config;
use crate::error::{Error, Result};
use crate::path::input::{get, path_to_string, PathInput};

/// Expand tilde (~) to the home directory.
///
/// Handles `~` and `~/path` but not `~user`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or the path
/// uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use pa::path::normalize::expand_tilde;
///
/// let expanded = expand_tilde("~/project").unwrap();
/// assert!(expanded.ends_with("/project"));
///
/// // Leaves other paths unchanged
/// assert_eq!(expand_tilde("/absolute").unwrap(), "/absolute");
/// ```
pub fn expand_tilde<'a>(path: impl Into<PathInput<'a>>) -> Result<String> {
    let path = get(path);
    if !path.starts_with('~') {
        return Ok(path);
    }

    let home = config::home_dir_str()?;
    if path == "~" {
        Ok(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        Ok(format!("{}/{rest}", home.trim_end_matches('/')))
    } else {
        Err(Error::InvalidPath {
            path: PathBuf::from(path),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components of an absolute path.
///
/// Repeated and trailing separators disappear along the way. A `..` at the
/// root stays at the root, the way `/..` names `/` on Unix.
///
/// # Examples
///
/// ```
/// use pa::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/../../c"));
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(component),
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                }
            }
        }
    }

    result
}

/// The absolute form of a path, without tilde expansion.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or is not
/// valid UTF-8.
///
/// # Examples
///
/// ```
/// use pa::absolute;
///
/// assert_eq!(absolute("/a/./b/../c/").unwrap(), "/a/c");
/// assert_eq!(absolute("/..").unwrap(), "/");
/// ```
pub fn absolute<'a>(path: impl Into<PathInput<'a>>) -> Result<String> {
    let path = get(path);
    let path = Path::new(&path);

    let anchored = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(path)
    };

    path_to_string(resolve_components(&anchored))
}

/// The absolute form of a path after expanding a leading `~`.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```no_run
/// use pa::expand;
///
/// let home = pa::config::home_dir_str().unwrap();
/// assert_eq!(expand("~/src/../notes").unwrap(), format!("{home}/notes"));
/// ```
pub fn expand<'a>(path: impl Into<PathInput<'a>>) -> Result<String> {
    absolute(expand_tilde(path)?.as_str())
}

/// Replace a leading home directory with `~`.
///
/// Only whole components match: with a home of `/home/user`, `/home/user/x`
/// becomes `~/x` but `/home/username` is left alone. If the home directory is
/// unknown or is `/`, the path is returned unchanged.
///
/// # Examples
///
/// ```
/// use pa::shorten;
///
/// let home = pa::config::home_dir_str().unwrap();
/// assert_eq!(shorten(format!("{home}/x").as_str()), "~/x");
/// assert_eq!(shorten("/unrelated/x"), "/unrelated/x");
/// ```
pub fn shorten<'a>(path: impl Into<PathInput<'a>>) -> String {
    let path = get(path);
    let Ok(home) = config::home_dir_str() else {
        return path;
    };
    let home = home.trim_end_matches('/');
    if home.is_empty() {
        return path;
    }

    match path.strip_prefix(home) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path,
    }
}

/// Whether a path is already in absolute form.
///
/// A path counts as absolute only if [`absolute`] would return it unchanged,
/// so `/a/../b` and `/a/` are not.
///
/// # Errors
///
/// Returns an error if the absolute form cannot be computed.
///
/// # Examples
///
/// ```
/// use pa::is_absolute;
///
/// assert!(is_absolute("/a/b").unwrap());
/// assert!(!is_absolute("a/b").unwrap());
/// assert!(!is_absolute("/a/./b").unwrap());
/// ```
pub fn is_absolute<'a>(path: impl Into<PathInput<'a>>) -> Result<bool> {
    let path = get(path);
    Ok(absolute(path.as_str())? == path)
}
