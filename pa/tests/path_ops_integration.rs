//! Integration tests for the lexical path operations through the public API.
//!
//! These exercise the operations the way callers use them: with plain
//! strings, with `PathView`s and with their own `PathLike` types.

use std::path::Path;

use pa::{
    basename, basename_ext, dirname, extname, get, join, parent, split, split_all, split_ext,
    Error, PathInput, PathLike, PathView,
};

/// A caller-defined type exposing a path.
struct Track {
    location: String,
}

impl PathLike for Track {
    fn path(&self) -> &str {
        &self.location
    }
}

#[test]
fn test_get_accepts_strings_views_and_path_likes() {
    let track = Track {
        location: "/music/a.ogg".to_string(),
    };
    let view = PathView::new("/music/b.ogg").unwrap();

    assert_eq!(get("/music/c.ogg"), "/music/c.ogg");
    assert_eq!(get(&track as &dyn PathLike), "/music/a.ogg");
    assert_eq!(get(&view), "/music/b.ogg");
}

#[test]
fn test_operations_accept_path_likes() {
    let track = Track {
        location: "/music/album/a.ogg".to_string(),
    };
    let input = PathInput::from(&track as &dyn PathLike);

    assert_eq!(extname(input).as_deref(), Some("ogg"));
    assert_eq!(dirname(input), "/music/album");
    assert_eq!(parent(input, 2), "/music");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_path_is_unsupported() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let raw = Path::new(OsStr::from_bytes(b"/music/\xffa.ogg"));
    let err = PathInput::try_from(raw).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }));
}

#[test]
fn test_std_path_converts_when_utf8() {
    let path = Path::new("/music/a.ogg");
    let input = PathInput::try_from(path).unwrap();
    assert_eq!(basename(input), "a.ogg");
}

#[test]
fn test_basename_and_extension_properties() {
    assert_eq!(basename_ext("a.ogg"), ("a".to_string(), ".ogg".to_string()));
    assert_eq!(basename_ext("a"), ("a".to_string(), String::new()));
    assert_eq!(extname("a.ogg").as_deref(), Some("ogg"));
    assert_eq!(extname("a"), None);
}

#[test]
fn test_split_properties() {
    assert_eq!(
        split("/home/a/file"),
        ("/home/a".to_string(), "file".to_string())
    );
    assert_eq!(split_all("/home/a/file"), ["/", "home", "a", "file"]);
    assert_eq!(
        split_ext("/home/a/file.txt"),
        (
            "/home/a".to_string(),
            "file".to_string(),
            ".txt".to_string()
        )
    );
}

#[test]
fn test_join_skips_absent_and_empty() {
    assert_eq!(
        join([Some("/a"), Some(""), None, Some("b")]),
        join([Some("/a"), Some("b")])
    );

    let view = PathView::new("/srv").unwrap();
    let segments: Vec<Option<PathInput>> = vec![
        Some((&view).into()),
        None,
        Some("data".into()),
        Some("".into()),
    ];
    assert_eq!(join(segments), "/srv/data");
}

#[test]
fn test_view_chain() {
    let view = PathView::new("/home/foo/a.txt").unwrap();
    let dir = view.dirname().unwrap();
    let sibling = PathView::new(join([Some(dir.path()), Some("b.md")])).unwrap();

    assert_eq!(sibling.dir(), view.dir());
    assert_eq!(sibling.ext(), "md");
    assert_eq!(dir.dirname().unwrap().path(), "/home");
}
