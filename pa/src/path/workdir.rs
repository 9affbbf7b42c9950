//! Working directory changes.
//!
//! The working directory is process-wide state. [`cd`] changes it for good;
//! [`within`] and [`WorkdirGuard`] change it for a scope and put the previous
//! directory back when the scope ends, whether it ends normally, through an
//! early return, or by unwinding from a panic.

use std::env;
use std::path::PathBuf;

use crate::config;
use crate::error::{Error, Result};
use crate::path::input::{get, path_to_string, PathInput};

/// The current working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or is not valid
/// UTF-8.
pub fn pwd() -> Result<String> {
    path_to_string(env::current_dir()?)
}

/// Change the working directory for the rest of the process.
///
/// # Errors
///
/// Returns `PathNotFound`, `PermissionDenied` or an I/O error if the
/// directory cannot be entered.
pub fn cd<'a>(path: impl Into<PathInput<'a>>) -> Result<()> {
    let path = get(path);
    log::debug!("Changing working directory to {path}");
    env::set_current_dir(&path).map_err(|e| Error::from_io(&path, e))
}

/// Change the working directory to the home directory.
///
/// # Errors
///
/// Returns an error if the home directory is unknown or cannot be entered.
pub fn cd_home() -> Result<()> {
    cd(config::home_dir_str()?.as_str())
}

/// Run `f` with the working directory changed to `path`.
///
/// The previous directory is restored afterwards on every exit path. If `f`
/// panics the directory is restored before the panic continues to unwind.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or `path` cannot
/// be entered. Errors produced by `f` are part of `R`.
///
/// # Examples
///
/// ```no_run
/// let listing = pa::within("/tmp", || std::fs::read_dir(".").map(|d| d.count())).unwrap();
/// ```
pub fn within<'a, F, R>(path: impl Into<PathInput<'a>>, f: F) -> Result<R>
where
    F: FnOnce() -> R,
{
    let _guard = WorkdirGuard::enter(path)?;
    Ok(f())
}

/// Run `f` with the working directory changed to the home directory.
///
/// The scoped counterpart of [`cd_home`]; the previous directory is restored
/// the same way as in [`within`].
///
/// # Errors
///
/// Returns an error if the home directory is unknown or cannot be entered.
pub fn within_home<F, R>(f: F) -> Result<R>
where
    F: FnOnce() -> R,
{
    within(config::home_dir_str()?.as_str(), f)
}

/// Restores the previous working directory when dropped.
///
/// # Examples
///
/// ```no_run
/// use pa::WorkdirGuard;
///
/// {
///     let guard = WorkdirGuard::enter("/tmp").unwrap();
///     // relative paths now resolve under /tmp
///     assert!(guard.previous().is_absolute());
/// }
/// // back in the original directory
/// ```
#[derive(Debug)]
pub struct WorkdirGuard {
    previous: PathBuf,
}

impl WorkdirGuard {
    /// Remember the current directory and change to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or `path`
    /// cannot be entered. Nothing is changed in that case.
    pub fn enter<'a>(path: impl Into<PathInput<'a>>) -> Result<Self> {
        let previous = env::current_dir()?;
        cd(path)?;
        Ok(Self { previous })
    }

    /// The directory that will be restored.
    #[must_use]
    pub fn previous(&self) -> &std::path::Path {
        &self.previous
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            log::warn!(
                "Failed to restore working directory {}: {e}",
                self.previous.display()
            );
        } else {
            log::debug!(
                "Restored working directory to {}",
                self.previous.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use std::panic;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_pwd_matches_current_dir() {
        assert_eq!(PathBuf::from(pwd().unwrap()), env::current_dir().unwrap());
    }

    #[test]
    #[serial]
    fn test_within_restores_directory() {
        let before = env::current_dir().unwrap();
        let dir = tempdir().unwrap();
        let target = fs::canonicalize(dir.path()).unwrap();

        let seen = within(target.to_str().unwrap(), || env::current_dir().unwrap()).unwrap();

        assert_eq!(fs::canonicalize(seen).unwrap(), target);
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_within_restores_after_error_result() {
        let before = env::current_dir().unwrap();
        let dir = tempdir().unwrap();

        let outcome = within(dir.path().to_str().unwrap(), || -> std::result::Result<(), String> {
            Err("callback failed".to_string())
        })
        .unwrap();

        assert_eq!(outcome, Err("callback failed".to_string()));
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_within_restores_after_panic() {
        let before = env::current_dir().unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();

        let result = panic::catch_unwind(|| {
            within(path.as_str(), || panic!("boom")).unwrap();
        });

        assert!(result.is_err());
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_within_missing_directory_leaves_cwd() {
        let before = env::current_dir().unwrap();
        let err = within("/nonexistent/workdir/xyz", || ()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_cd_persists() {
        let before = env::current_dir().unwrap();
        let dir = tempdir().unwrap();

        cd(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(
            fs::canonicalize(env::current_dir().unwrap()).unwrap(),
            fs::canonicalize(dir.path()).unwrap()
        );

        env::set_current_dir(&before).unwrap();
    }

    #[test]
    #[serial]
    fn test_guard_nested_scopes() {
        let before = env::current_dir().unwrap();
        let outer = tempdir().unwrap();
        let inner = tempdir().unwrap();

        {
            let _outer = WorkdirGuard::enter(outer.path().to_str().unwrap()).unwrap();
            {
                let guard = WorkdirGuard::enter(inner.path().to_str().unwrap()).unwrap();
                assert_eq!(
                    fs::canonicalize(guard.previous()).unwrap(),
                    fs::canonicalize(outer.path()).unwrap()
                );
            }
            assert_eq!(
                fs::canonicalize(env::current_dir().unwrap()).unwrap(),
                fs::canonicalize(outer.path()).unwrap()
            );
        }

        assert_eq!(env::current_dir().unwrap(), before);
    }
}
