//! Environment-derived configuration.
//!
//! The only configuration input pa has is the current user's home directory.
//! It is read from the environment through the `home` crate on every call and
//! never cached, so changes to `HOME` made by the process are picked up.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Returns the current user's home directory.
///
/// # Errors
///
/// Returns `InvalidPath` if the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// let home = pa::config::home_dir().unwrap();
/// assert!(home.is_absolute());
/// ```
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir()
        .filter(|home| !home.as_os_str().is_empty())
        .ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "Cannot determine home directory".to_string(),
        })
}

/// Returns the home directory as a string.
///
/// # Errors
///
/// Returns `InvalidPath` if the home directory cannot be determined or is not
/// valid UTF-8.
pub fn home_dir_str() -> Result<String> {
    home_dir()?
        .into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "Home directory contains invalid UTF-8".to_string(),
        })
}
