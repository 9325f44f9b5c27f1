//! Path relationship checking.
//!
//! Two flavors live here. [`PathRelationship::between`] compares whole path
//! components, so `/foo2` is unrelated to `/foo`. [`PathRelationship::has_prefix`]
//! is the plain string-prefix test that [`Node::within`](crate::Node::within)
//! is defined by, under which `/foo2` counts as inside `/foo`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use fsnode::PathRelationship;
/// use std::path::Path;
///
/// let parent = Path::new("/home/user");
/// let child = Path::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(parent, child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths, component-wise.
    ///
    /// Trailing separators are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsnode::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/foo"), Path::new("/foo2"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = normalize_for_comparison(path1);
        let p2 = normalize_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if p2.starts_with(&p1) {
            return Self::Ancestor;
        }

        if p1.starts_with(&p2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Literal string-prefix containment.
    ///
    /// Strips exactly one trailing `/` from `parent`, then reports whether
    /// `path` starts with it and is strictly longer. No component boundary is
    /// checked, so a sibling sharing a name prefix is reported as contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsnode::PathRelationship;
    /// use std::path::Path;
    ///
    /// assert!(PathRelationship::has_prefix(Path::new("/a/b/c"), Path::new("/a/b/")));
    /// assert!(!PathRelationship::has_prefix(Path::new("/a/b"), Path::new("/a/b")));
    /// assert!(PathRelationship::has_prefix(Path::new("/a/bx"), Path::new("/a/b")));
    /// ```
    #[must_use]
    pub fn has_prefix(path: &Path, parent: &Path) -> bool {
        let path = path.to_string_lossy();
        let raw_parent = parent.to_string_lossy();
        let parent = raw_parent.strip_suffix('/').unwrap_or(&*raw_parent);

        path.starts_with(parent) && path.len() > parent.len()
    }
}

/// Removes one trailing separator, except from the root.
fn normalize_for_comparison(path: &Path) -> Cow<'_, Path> {
    if let Some(s) = path.to_str() {
        if s.len() > 1 && (s.ends_with('/') || s.ends_with('\\')) {
            return Cow::Owned(PathBuf::from(&s[..s.len() - 1]));
        }
    }
    Cow::Borrowed(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_ancestor() {
        assert_eq!(
            PathRelationship::between(Path::new("/a"), Path::new("/a/b")),
            PathRelationship::Ancestor
        );
        assert_eq!(
            PathRelationship::between(Path::new("/a/b"), Path::new("/a/b/c/d")),
            PathRelationship::Ancestor
        );
    }

    #[test]
    fn test_relationship_descendant() {
        assert_eq!(
            PathRelationship::between(Path::new("/a/b/c/d"), Path::new("/a/b")),
            PathRelationship::Descendant
        );
    }

    #[test]
    fn test_relationship_same_with_trailing_slash() {
        assert_eq!(
            PathRelationship::between(Path::new("/a/"), Path::new("/a")),
            PathRelationship::Same
        );
    }

    #[test]
    fn test_relationship_name_prefix_is_unrelated() {
        assert_eq!(
            PathRelationship::between(Path::new("/foo"), Path::new("/foo2")),
            PathRelationship::Unrelated
        );
        assert!(!PathRelationship::Unrelated.is_hierarchical());
    }

    #[test]
    fn test_has_prefix_literal() {
        let parent = Path::new("/a/b");
        assert!(PathRelationship::has_prefix(Path::new("/a/b/c"), parent));
        assert!(!PathRelationship::has_prefix(parent, parent));
        // Name prefix, not a component prefix, still counts.
        assert!(PathRelationship::has_prefix(Path::new("/a/bx"), parent));
        assert!(!PathRelationship::has_prefix(Path::new("/a"), parent));
    }

    #[test]
    fn test_has_prefix_strips_one_trailing_slash() {
        assert!(PathRelationship::has_prefix(
            Path::new("/a/bc"),
            Path::new("/a/b/")
        ));
        assert!(!PathRelationship::has_prefix(
            Path::new("/a/bc"),
            Path::new("/a/b//")
        ));
    }

    #[test]
    fn test_has_prefix_root() {
        assert!(PathRelationship::has_prefix(Path::new("/etc"), Path::new("/")));
        // The root strips to the empty string, so even the root passes.
        assert!(PathRelationship::has_prefix(Path::new("/"), Path::new("/")));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// If A is ancestor of B, then B is descendant of A
            #[test]
            fn relationship_symmetric(s1 in path_strategy(), s2 in path_strategy()) {
                let rel1 = PathRelationship::between(Path::new(&s1), Path::new(&s2));
                let rel2 = PathRelationship::between(Path::new(&s2), Path::new(&s1));

                let symmetric = matches!(
                    (rel1, rel2),
                    (PathRelationship::Ancestor, PathRelationship::Descendant)
                        | (PathRelationship::Descendant, PathRelationship::Ancestor)
                        | (PathRelationship::Same, PathRelationship::Same)
                        | (PathRelationship::Unrelated, PathRelationship::Unrelated)
                );
                prop_assert!(symmetric, "Invalid symmetry: {:?} vs {:?}", rel1, rel2);
            }

            /// Every component-wise descendant also passes the literal prefix test
            #[test]
            fn descendant_implies_prefix(s1 in path_strategy(), s2 in path_strategy()) {
                let p1 = Path::new(&s1);
                let p2 = Path::new(&s2);
                if PathRelationship::between(p1, p2) == PathRelationship::Descendant {
                    prop_assert!(PathRelationship::has_prefix(p1, p2));
                }
            }
        }
    }
}
