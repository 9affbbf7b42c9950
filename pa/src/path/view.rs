//! A path string with its derived attributes computed up front.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::input::PathLike;
use crate::path::normalize::{absolute, shorten};
use crate::path::split::{basename, basename_ext, dirname};

/// A path together with its absolute form, directory, basename, stem,
/// extension and shortened display form.
///
/// Every attribute is computed once by [`PathView::new`]; a view never
/// changes afterwards. String attributes are exposed directly, while
/// [`PathView::absolute_path`] and [`PathView::dirname`] wrap the same
/// strings in new views.
///
/// # Examples
///
/// ```
/// use pa::PathView;
///
/// let view = PathView::new("/home/foo/a.txt").unwrap();
/// assert_eq!(view.dir(), "/home/foo");
/// assert_eq!(view.base(), "a.txt");
/// assert_eq!(view.name(), "a");
/// assert_eq!(view.ext(), "txt");
/// assert_eq!(view.fext(), ".txt");
///
/// let backup = (&view + "~").unwrap();
/// assert_eq!(backup.path(), "/home/foo/a.txt~");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathView {
    path: String,
    absolute: String,
    dir: String,
    base: String,
    name: String,
    ext: String,
    fext: String,
    short: String,
}

impl PathView {
    /// Build a view of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the absolute form cannot be computed, which only
    /// happens for relative paths when the current directory is unusable.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let absolute = absolute(path.as_str())?;
        let dir = dirname(path.as_str());
        let base = basename(path.as_str());
        let (name, fext) = basename_ext(path.as_str());
        let ext = fext.strip_prefix('.').unwrap_or_default().to_string();
        let short = shorten(path.as_str());

        Ok(Self {
            path,
            absolute,
            dir,
            base,
            name,
            ext,
            fext,
            short,
        })
    }

    /// The path this view was built from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute form of the path.
    #[must_use]
    pub fn absolute(&self) -> &str {
        &self.absolute
    }

    /// Directory part of the path.
    #[must_use]
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Final segment, extension included.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Final segment without its extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension without the dot, or empty.
    #[must_use]
    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Extension with the dot, or empty.
    #[must_use]
    pub fn fext(&self) -> &str {
        &self.fext
    }

    /// The path with a leading home directory written as `~`.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Alias for [`PathView::absolute`].
    #[must_use]
    pub fn a(&self) -> &str {
        self.absolute()
    }

    /// Alias for [`PathView::dir`].
    #[must_use]
    pub fn d(&self) -> &str {
        self.dir()
    }

    /// Alias for [`PathView::base`].
    #[must_use]
    pub fn b(&self) -> &str {
        self.base()
    }

    /// Alias for [`PathView::name`].
    #[must_use]
    pub fn n(&self) -> &str {
        self.name()
    }

    /// Alias for [`PathView::ext`].
    #[must_use]
    pub fn e(&self) -> &str {
        self.ext()
    }

    /// Alias for [`PathView::fext`].
    #[must_use]
    pub fn fe(&self) -> &str {
        self.fext()
    }

    /// A view of the absolute form.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`PathView::new`].
    pub fn absolute_path(&self) -> Result<Self> {
        Self::new(self.absolute.clone())
    }

    /// A view of the directory part.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`PathView::new`].
    pub fn dirname(&self) -> Result<Self> {
        Self::new(self.dir.clone())
    }

    /// A view of the path with `suffix` appended verbatim, no separator
    /// added.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`PathView::new`].
    pub fn concat(&self, suffix: &str) -> Result<Self> {
        Self::new(format!("{}{suffix}", self.path))
    }
}

impl PathLike for PathView {
    fn path(&self) -> &str {
        &self.path
    }
}

impl Add<&str> for &PathView {
    type Output = Result<PathView>;

    fn add(self, suffix: &str) -> Self::Output {
        self.concat(suffix)
    }
}

impl Add<&str> for PathView {
    type Output = Result<PathView>;

    fn add(self, suffix: &str) -> Self::Output {
        self.concat(suffix)
    }
}

impl PartialEq for PathView {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for PathView {}

impl Hash for PathView {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for PathView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<Path> for PathView {
    fn as_ref(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl AsRef<str> for PathView {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl TryFrom<String> for PathView {
    type Error = Error;

    fn try_from(path: String) -> Result<Self> {
        Self::new(path)
    }
}

impl TryFrom<&str> for PathView {
    type Error = Error;

    fn try_from(path: &str) -> Result<Self> {
        Self::new(path)
    }
}

impl From<PathView> for String {
    fn from(view: PathView) -> Self {
        view.path
    }
}
