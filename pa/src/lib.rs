#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pa
//!
//! A small convenience layer over filesystem path manipulation.
//!
//! The library provides stateless operations on path strings and a cached
//! view type built on top of them.
//!
//! ## Core Types
//!
//! - [`PathView`]: a path with its derived attributes computed once
//! - [`PathInput`] and [`PathLike`]: what path operations accept
//! - [`LinkKind`] and [`LinkOptions`]: link creation settings
//! - [`WorkdirGuard`]: scoped working directory change
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use pa::{basename, dirname, extname, parent, PathView};
//!
//! assert_eq!(dirname("/home/a/file.txt"), "/home/a");
//! assert_eq!(basename("/home/a/file.txt"), "file.txt");
//! assert_eq!(extname("/home/a/file.txt").as_deref(), Some("txt"));
//! assert_eq!(parent("/home/a/file.txt", 2), "/home");
//!
//! let view = PathView::new("/home/a/file.txt").unwrap();
//! assert_eq!(view.name(), "file");
//! ```

pub mod config;
pub mod error;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use path::canonicalize::{is_dangling, readlink, realpath};
pub use path::link::{link_with, ln, ln_force, symlink, symlink_force};
pub use path::normalize::{absolute, expand, is_absolute, shorten};
pub use path::split::{
    basename, basename_ext, dirname, extname, join, parent, split, split_all, split_ext,
};
pub use path::workdir::{cd, cd_home, pwd, within, within_home};
pub use path::{get, LinkKind, LinkOptions, PathInput, PathLike, PathView, WorkdirGuard};
