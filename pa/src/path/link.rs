//! Hard and symbolic link creation.
//!
//! Sources are glob patterns expanded against the current directory. When
//! the destination is an existing directory each link is created inside it
//! under the source's basename. With `force`, whatever already occupies the
//! effective destination is removed first.
//!
//! Removal and creation are two separate filesystem calls, so a crash between
//! them leaves the destination absent.
//!
//! # Examples
//!
//! ```no_run
//! use pa::{ln, symlink_force};
//!
//! // /tmp/dir/src.txt becomes a hard link to /tmp/src.txt
//! ln(["/tmp/src.txt"], "/tmp/dir").unwrap();
//!
//! // Replace any existing /tmp/current with a symlink to /tmp/release-2
//! symlink_force(["/tmp/release-2"], "/tmp/current").unwrap();
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::input::{get, path_to_string, PathInput};
use crate::path::split::{basename, join};

/// The kind of link to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// A hard link (`link(2)`).
    Hard,
    /// A symbolic link (`symlink(2)`).
    Symbolic,
}

/// Options controlling link creation.
///
/// # Examples
///
/// ```
/// use pa::LinkOptions;
///
/// let options = LinkOptions::new().with_force(true);
/// assert!(options.force);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Remove an existing destination before linking.
    pub force: bool,
}

impl LinkOptions {
    /// Options with every flag off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether an existing destination is replaced.
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Create a hard link for each source.
///
/// # Errors
///
/// Returns `Link` if a link cannot be created, e.g. because the destination
/// already exists.
pub fn ln<'s, 'd, I, P>(sources: I, dest: impl Into<PathInput<'d>>) -> Result<Vec<String>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathInput<'s>>,
{
    link_with(LinkKind::Hard, sources, dest, LinkOptions::new())
}

/// Create a hard link for each source, replacing existing destinations.
///
/// # Errors
///
/// Returns `Link` if an existing destination cannot be removed, is the
/// source itself, or the link cannot be created.
pub fn ln_force<'s, 'd, I, P>(sources: I, dest: impl Into<PathInput<'d>>) -> Result<Vec<String>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathInput<'s>>,
{
    link_with(LinkKind::Hard, sources, dest, LinkOptions::new().with_force(true))
}

/// Create a symbolic link for each source.
///
/// The source string is stored in the link as given.
///
/// # Errors
///
/// Returns `Link` if a link cannot be created.
pub fn symlink<'s, 'd, I, P>(sources: I, dest: impl Into<PathInput<'d>>) -> Result<Vec<String>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathInput<'s>>,
{
    link_with(LinkKind::Symbolic, sources, dest, LinkOptions::new())
}

/// Create a symbolic link for each source, replacing existing destinations.
///
/// # Errors
///
/// Returns `Link` if an existing destination cannot be removed, is the
/// source itself, or the link cannot be created.
pub fn symlink_force<'s, 'd, I, P>(
    sources: I,
    dest: impl Into<PathInput<'d>>,
) -> Result<Vec<String>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathInput<'s>>,
{
    link_with(
        LinkKind::Symbolic,
        sources,
        dest,
        LinkOptions::new().with_force(true),
    )
}

/// Create links of the given kind for each source.
///
/// Each source is expanded as a glob pattern; a pattern matching nothing is
/// used as a literal path so the filesystem reports why it cannot be linked.
/// Returns the paths of the links that were created, in order.
///
/// # Errors
///
/// - `InvalidPattern` if a source is not a valid glob pattern
/// - `Link` if a forced removal fails, if the target is the source itself (or
///   the file a symlinked source points to), or if the link cannot be created
///
/// Nothing is removed when the target is the source.
pub fn link_with<'s, 'd, I, P>(
    kind: LinkKind,
    sources: I,
    dest: impl Into<PathInput<'d>>,
    options: LinkOptions,
) -> Result<Vec<String>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathInput<'s>>,
{
    let dest = get(dest);
    let dest_is_dir = Path::new(&dest).is_dir();
    let mut created = Vec::new();

    for pattern in sources {
        for src in expand_sources(pattern.into().as_str())? {
            let target = if dest_is_dir {
                join([Some(dest.as_str()), Some(basename(src.as_str()).as_str())])
            } else {
                dest.clone()
            };

            let link_error = |source| Error::Link {
                src: PathBuf::from(&src),
                dest: PathBuf::from(&target),
                source,
            };

            if options.force && fs::symlink_metadata(&target).is_ok() {
                if is_same_file(Path::new(&src), Path::new(&target)) {
                    return Err(link_error(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        "source and destination are the same file",
                    )));
                }
                log::debug!("Removing existing {target} before linking");
                remove_recursive(Path::new(&target)).map_err(link_error)?;
            }

            create_link(kind, Path::new(&src), Path::new(&target)).map_err(link_error)?;
            log::debug!("Linked ({kind:?}) {src} -> {target}");
            created.push(target);
        }
    }

    Ok(created)
}

/// Expand one source pattern against the current directory.
fn expand_sources(pattern: &str) -> Result<Vec<String>> {
    let entries = glob::glob(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::Io(e.into_error()))?;
        matches.push(path_to_string(path)?);
    }

    if matches.is_empty() {
        matches.push(pattern.to_string());
    }
    Ok(matches)
}

/// Remove a path of any kind. Directories go recursively; symlinks are
/// removed themselves, never followed.
fn remove_recursive(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Whether `target` is the entry `src` names, or the file `src` resolves to.
#[cfg(unix)]
fn is_same_file(src: &Path, target: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    let Ok(target_meta) = fs::symlink_metadata(target) else {
        return false;
    };
    [fs::symlink_metadata(src), fs::metadata(src)]
        .into_iter()
        .flatten()
        .any(|meta| meta.dev() == target_meta.dev() && meta.ino() == target_meta.ino())
}

#[cfg(not(unix))]
fn is_same_file(src: &Path, target: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(target)) {
        (Ok(src), Ok(target)) => src == target,
        _ => false,
    }
}

fn create_link(kind: LinkKind, src: &Path, dest: &Path) -> io::Result<()> {
    match kind {
        LinkKind::Hard => fs::hard_link(src, dest),
        LinkKind::Symbolic => create_symlink(src, dest),
    }
}

#[cfg(unix)]
fn create_symlink(src: &Path, dest: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dest)
}

#[cfg(windows)]
fn create_symlink(src: &Path, dest: &Path) -> io::Result<()> {
    if src.is_dir() {
        std::os::windows::fs::symlink_dir(src, dest)
    } else {
        std::os::windows::fs::symlink_file(src, dest)
    }
}
