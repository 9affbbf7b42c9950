//! Common test utilities for integration tests.
//!
//! This module provides a scratch directory fixture for tests that create
//! files, directories and links.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree that is removed when dropped.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    /// Creates an empty scratch directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// The scratch root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` inside the scratch root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Same as [`Scratch::path`], as a `String` for the string-based API.
    pub fn p(&self, relative: &str) -> String {
        self.path(relative).to_str().unwrap().to_string()
    }

    /// Writes `content` to `relative`, creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> String {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        self.p(relative)
    }

    /// Creates the directory `relative`, including parents.
    pub fn dir(&self, relative: &str) -> String {
        fs::create_dir_all(self.path(relative)).unwrap();
        self.p(relative)
    }
}

/// Reads a file to a string.
pub fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap()
}

/// Whether two paths refer to the same inode.
#[cfg(unix)]
pub fn same_inode(a: &str, b: &str) -> bool {
    use std::os::unix::fs::MetadataExt;

    let a = fs::metadata(a).unwrap();
    let b = fs::metadata(b).unwrap();
    a.dev() == b.dev() && a.ino() == b.ino()
}
