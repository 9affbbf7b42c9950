//! Path operations on strings and path-like values.
//!
//! Every operation takes a [`PathInput`]: a plain string or anything
//! implementing [`PathLike`] (including [`PathView`]).
//!
//! # Lexical operations
//!
//! [`split`] holds the pure string operations: directory and basename,
//! extensions, joining and walking up to a parent. [`normalize`] computes
//! absolute forms, expands `~` and folds the home directory back into `~`.
//!
//! ```
//! use pa::{basename_ext, join, split_all};
//!
//! assert_eq!(basename_ext("a.ogg"), ("a".to_string(), ".ogg".to_string()));
//! assert_eq!(join([Some("/a"), None, Some(""), Some("b")]), "/a/b");
//! assert_eq!(split_all("/home/a/file"), ["/", "home", "a", "file"]);
//! ```
//!
//! # Filesystem operations
//!
//! [`canonicalize`] inspects symlinks, [`link`] creates hard and symbolic
//! links, and [`workdir`] changes the working directory, optionally only for
//! the duration of a closure.
//!
//! # Views
//!
//! [`PathView`] computes all derived attributes of a path once:
//!
//! ```
//! use pa::PathView;
//!
//! let view = PathView::new("/home/a/b.txt").unwrap();
//! assert_eq!((view.name(), view.ext()), ("b", "txt"));
//! ```

pub mod canonicalize;
pub mod input;
pub mod link;
pub mod normalize;
pub mod split;
pub mod view;
pub mod workdir;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use input::{get, PathInput, PathLike};
pub use link::{LinkKind, LinkOptions};
pub use view::PathView;
pub use workdir::WorkdirGuard;
