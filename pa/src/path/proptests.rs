//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for absolute forms.
//! This module focuses on splitting, joining and views.

use super::input::get;
use super::normalize::{expand, shorten};
use super::split::{basename, basename_ext, dirname, extname, join, parent, split_all};
use super::view::PathView;
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,20}".prop_filter("not a dot component", |c| c != "." && c != "..")
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // get is the identity on strings
    #[test]
    fn get_identity(s in ".*") {
        prop_assert_eq!(get(s.as_str()), s);
    }

    // basename == stem + extension
    #[test]
    fn basename_is_stem_plus_ext(path in absolute_path_strategy()) {
        let (stem, ext) = basename_ext(path.as_str());
        prop_assert_eq!(basename(path.as_str()), format!("{stem}{ext}"));
    }

    // extname agrees with the dotted extension
    #[test]
    fn extname_matches_basename_ext(path in relative_path_strategy()) {
        let (_, ext) = basename_ext(path.as_str());
        prop_assert_eq!(extname(path.as_str()).unwrap_or_default(), ext.trim_start_matches('.'));
    }

    // parent(join(parent(p), basename(p))) == parent(p)
    #[test]
    fn parent_join_round_trip(path in absolute_path_strategy()) {
        let up = parent(path.as_str(), 1);
        let base = basename(path.as_str());
        let rebuilt = join([Some(up.as_str()), Some(base.as_str())]);
        prop_assert_eq!(parent(rebuilt.as_str(), 1), up);
    }

    // Joining the pieces of split_all rebuilds an absolute path
    #[test]
    fn split_all_rejoins(path in absolute_path_strategy()) {
        let parts = split_all(path.as_str());
        prop_assert_eq!(parts[0].as_str(), "/");
        let rebuilt = join(parts.iter().map(Some));
        prop_assert_eq!(rebuilt, path);
    }

    // Relative paths peel down to "."
    #[test]
    fn split_all_relative_starts_at_dot(path in relative_path_strategy()) {
        let parts = split_all(path.as_str());
        prop_assert_eq!(parts[0].as_str(), ".");
        prop_assert_eq!(parts.len(), path.split('/').count() + 1);
    }

    // Absent and empty segments never change a join
    #[test]
    fn join_ignores_empty(path in relative_path_strategy(), gaps in 0usize..4) {
        let mut with_gaps: Vec<Option<&str>> = vec![Some("/root")];
        for _ in 0..gaps {
            with_gaps.push(None);
            with_gaps.push(Some(""));
        }
        with_gaps.push(Some(path.as_str()));
        prop_assert_eq!(join(with_gaps), join([Some("/root"), Some(path.as_str())]));
    }

    // Shortening a path under home and expanding it again is lossless
    #[test]
    fn shorten_expand_round_trip(path in relative_path_strategy()) {
        let home = crate::config::home_dir_str().unwrap();
        let full = format!("{}/{path}", home.trim_end_matches('/'));
        let short = shorten(full.as_str());
        prop_assert!(short.starts_with("~/"));
        prop_assert_eq!(expand(short.as_str()).unwrap(), full);
    }

    // Views cache exactly what the free functions compute
    #[test]
    fn view_matches_free_functions(path in absolute_path_strategy()) {
        let view = PathView::new(path.as_str()).unwrap();
        prop_assert_eq!(view.dir(), dirname(path.as_str()));
        prop_assert_eq!(view.base(), basename(path.as_str()));
        prop_assert_eq!(view.ext(), extname(path.as_str()).unwrap_or_default());
        prop_assert_eq!(view.absolute(), path.as_str());
    }
}
