//! Arguments that name "another path": a raw path or an existing node.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::node::Node;

/// A path given either as a raw path string or as an existing [`Node`].
///
/// Methods such as [`Node::path_from`] and [`Node::within`] take
/// `impl Into<PathArg>`, so callers can pass `&str`, `&Path`, `&PathBuf`,
/// `&String` or `&Node` without building a node first.
///
/// # Examples
///
/// ```
/// use fsnode::{Node, PathArg};
///
/// let from_str: PathArg<'_> = "/tmp".into();
/// let node = Node::new("/tmp").unwrap();
/// let from_node: PathArg<'_> = (&node).into();
/// assert_eq!(from_str.as_path(), from_node.as_path());
/// ```
#[derive(Debug, Clone, Copy)]
pub enum PathArg<'a> {
    /// A path exactly as the caller wrote it; may be relative.
    Path(&'a Path),
    /// An already-resolved node.
    Node(&'a Node),
}

impl<'a> PathArg<'a> {
    /// The path as given, without resolution.
    #[must_use]
    pub fn as_path(&self) -> &'a Path {
        match *self {
            Self::Path(path) => path,
            Self::Node(node) => node.full_path(),
        }
    }

    /// Coerce to a node, resolving a raw path against the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a relative raw path is given and the current
    /// directory cannot be read.
    pub fn to_node(self) -> Result<Cow<'a, Node>> {
        match self {
            Self::Path(path) => Node::new(path).map(Cow::Owned),
            Self::Node(node) => Ok(Cow::Borrowed(node)),
        }
    }
}

impl<'a> From<&'a Node> for PathArg<'a> {
    fn from(node: &'a Node) -> Self {
        Self::Node(node)
    }
}

impl<'a> From<&'a Path> for PathArg<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for PathArg<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Self::Path(path.as_path())
    }
}

impl<'a> From<&'a str> for PathArg<'a> {
    fn from(path: &'a str) -> Self {
        Self::Path(Path::new(path))
    }
}

impl<'a> From<&'a String> for PathArg<'a> {
    fn from(path: &'a String) -> Self {
        Self::Path(Path::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_path_is_not_resolved() {
        let arg = PathArg::from("relative/./dir/");
        assert_eq!(arg.as_path(), Path::new("relative/./dir/"));
    }

    #[test]
    fn test_to_node_borrows_existing_node() {
        let node = Node::new("/srv").unwrap();
        let coerced = PathArg::from(&node).to_node().unwrap();
        assert!(matches!(coerced, Cow::Borrowed(_)));
        assert_eq!(*coerced, node);
    }

    #[test]
    fn test_to_node_resolves_raw_path() {
        let coerced = PathArg::from("src/../lib").to_node().unwrap();
        assert!(matches!(coerced, Cow::Owned(_)));
        assert!(coerced.full_path().is_absolute());
        assert!(coerced.full_path().ends_with("lib"));
    }
}
