//! Lexical path splitting and joining.
//!
//! Nothing here touches the filesystem. Paths are treated as `/`-separated
//! strings: trailing separators are ignored when taking a basename or a
//! directory, and separators are collapsed where two joined segments meet.

use std::sync::LazyLock;

use regex::Regex;

use crate::path::input::{get, PathInput};

/// Stem and optional extension of a basename. The stem takes at least one
/// character, so a lone leading dot (`.bashrc`) never starts an extension.
static STEM_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?)(\.[^.]+)?$").expect("stem/extension regex"));

/// Strip trailing separators, keeping a lone `/` for all-separator input.
fn trim_trailing(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && !path.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// The directory part of a path.
///
/// # Examples
///
/// ```
/// use pa::dirname;
///
/// assert_eq!(dirname("/home/a/file"), "/home/a");
/// assert_eq!(dirname("/home"), "/");
/// assert_eq!(dirname("/"), "/");
/// assert_eq!(dirname("file"), ".");
/// assert_eq!(dirname("a/b/"), "a");
/// ```
pub fn dirname<'a>(path: impl Into<PathInput<'a>>) -> String {
    let path = get(path);
    let path = trim_trailing(&path);

    match path.rfind('/') {
        None => ".".to_string(),
        Some(idx) => trim_trailing(&path[..=idx]).to_string(),
    }
}

/// The final segment of a path.
///
/// # Examples
///
/// ```
/// use pa::basename;
///
/// assert_eq!(basename("/home/a/a.ogg"), "a.ogg");
/// assert_eq!(basename("/home/a/"), "a");
/// assert_eq!(basename("/"), "/");
/// ```
pub fn basename<'a>(path: impl Into<PathInput<'a>>) -> String {
    let path = get(path);
    let path = trim_trailing(&path);
    if path == "/" {
        return path.to_string();
    }

    match path.rfind('/') {
        None => path.to_string(),
        Some(idx) => path[idx + 1..].to_string(),
    }
}

/// The final segment split into `(stem, extension)`, the extension keeping
/// its leading dot. A segment without an extension yields `(name, "")`.
///
/// # Examples
///
/// ```
/// use pa::basename_ext;
///
/// assert_eq!(basename_ext("a.ogg"), ("a".to_string(), ".ogg".to_string()));
/// assert_eq!(basename_ext("/x/a.tar.gz"), ("a.tar".to_string(), ".gz".to_string()));
/// assert_eq!(basename_ext("a"), ("a".to_string(), String::new()));
/// assert_eq!(basename_ext(".bashrc"), (".bashrc".to_string(), String::new()));
/// ```
pub fn basename_ext<'a>(path: impl Into<PathInput<'a>>) -> (String, String) {
    let base = basename(path);
    match STEM_EXT.captures(&base) {
        Some(caps) => {
            let stem = caps.get(1).map_or("", |m| m.as_str());
            let ext = caps.get(2).map_or("", |m| m.as_str());
            (stem.to_string(), ext.to_string())
        }
        None => (base, String::new()),
    }
}

/// The extension of the final segment, without the dot.
///
/// # Examples
///
/// ```
/// use pa::extname;
///
/// assert_eq!(extname("a.ogg").as_deref(), Some("ogg"));
/// assert_eq!(extname("a"), None);
/// assert_eq!(extname(".bashrc"), None);
/// assert_eq!(extname("dir.d/file"), None);
/// ```
pub fn extname<'a>(path: impl Into<PathInput<'a>>) -> Option<String> {
    let (_, ext) = basename_ext(path);
    ext.strip_prefix('.').map(str::to_string)
}

/// Split a path into `(directory, basename)`.
///
/// # Examples
///
/// ```
/// use pa::split;
///
/// assert_eq!(split("/home/a/file"), ("/home/a".to_string(), "file".to_string()));
/// ```
pub fn split<'a>(path: impl Into<PathInput<'a>>) -> (String, String) {
    let path = get(path);
    (dirname(path.as_str()), basename(path.as_str()))
}

/// Split a path into `(directory, stem, extension)`.
///
/// # Examples
///
/// ```
/// use pa::split_ext;
///
/// let (dir, stem, ext) = split_ext("/music/a.ogg");
/// assert_eq!((dir.as_str(), stem.as_str(), ext.as_str()), ("/music", "a", ".ogg"));
/// ```
pub fn split_ext<'a>(path: impl Into<PathInput<'a>>) -> (String, String, String) {
    let path = get(path);
    let (stem, ext) = basename_ext(path.as_str());
    (dirname(path.as_str()), stem, ext)
}

/// Every segment of a path, from the root down to the basename.
///
/// Directories are peeled off until taking the directory no longer changes
/// the path. Absolute paths therefore start with `/`, relative ones with `.`.
///
/// # Examples
///
/// ```
/// use pa::split_all;
///
/// assert_eq!(split_all("/home/a/file"), ["/", "home", "a", "file"]);
/// assert_eq!(split_all("a/b"), [".", "a", "b"]);
/// ```
pub fn split_all<'a>(path: impl Into<PathInput<'a>>) -> Vec<String> {
    let (mut dir, base) = split(path);
    let mut parts = vec![base];

    loop {
        let (up, name) = split(dir.as_str());
        if up == dir {
            break;
        }
        parts.push(name);
        dir = up;
    }

    parts.push(dir);
    parts.reverse();
    parts
}

/// Join path segments, skipping absent and empty ones.
///
/// Separators are collapsed where two segments meet. Joining nothing gives
/// an empty string.
///
/// # Examples
///
/// ```
/// use pa::join;
///
/// assert_eq!(join([Some("/a"), Some(""), None, Some("b")]), "/a/b");
/// assert_eq!(join([Some("a/"), Some("/b")]), "a/b");
/// assert_eq!(join([None, Some("")]), "");
/// ```
pub fn join<'a, I, P>(paths: I) -> String
where
    I: IntoIterator<Item = Option<P>>,
    P: Into<PathInput<'a>>,
{
    let mut joined = String::new();

    for segment in paths.into_iter().flatten() {
        let segment = segment.into().as_str();
        if segment.is_empty() {
            continue;
        }
        if joined.is_empty() {
            joined.push_str(segment);
            continue;
        }

        let left = joined.trim_end_matches('/').len();
        joined.truncate(left);
        joined.push('/');
        joined.push_str(segment.trim_start_matches('/'));
    }

    joined
}

/// Take the directory of a path `n` times.
///
/// # Examples
///
/// ```
/// use pa::parent;
///
/// assert_eq!(parent("/a/b/c", 1), "/a/b");
/// assert_eq!(parent("/a/b/c", 2), "/a");
/// assert_eq!(parent("/a/b/c", 10), "/");
/// assert_eq!(parent("/a/b/c", 0), "/a/b/c");
/// ```
pub fn parent<'a>(path: impl Into<PathInput<'a>>, n: usize) -> String {
    let mut path = get(path);
    for _ in 0..n {
        let up = dirname(path.as_str());
        if up == path {
            break;
        }
        path = up;
    }
    path
}
