//! The [`Node`] path entity.
//!
//! A `Node` wraps one absolute, normalized path together with attributes
//! derived from it (name, basename, extension, kind, root flag). Building a
//! node never touches the filesystem; the async methods in this module do.
//!
//! Relation methods ([`Node::parent`], [`Node::child`], [`Node::sibling`])
//! always return a new node. [`Node::rename`] is the one exception to that
//! value-like behavior: it moves the file and then updates the receiver in
//! place, so a caller holding the node keeps a valid handle afterwards.

mod arg;
mod io;
mod lines;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_JSON_INDENT};
use crate::error::Result;
use crate::path::normalize::{expand_tilde, normalize, resolve_against};
use crate::path::relationship::PathRelationship;
use crate::path::relative::relative_path;

pub use arg::PathArg;
pub use io::RenamePattern;
pub use lines::Lines;

/// One filesystem location and its derived attributes.
///
/// # Examples
///
/// ```
/// use fsnode::Node;
///
/// let node = Node::new("/srv/site/index.min.js").unwrap();
/// assert_eq!(node.name(), "index.min.js");
/// assert_eq!(node.basename(), "index");
/// assert_eq!(node.extension(), ".min.js");
/// assert_eq!(node.kind(), "min.js");
/// assert_eq!(node.parent().full_path(), std::path::Path::new("/srv/site"));
/// ```
#[derive(Debug, Clone)]
pub struct Node {
    full_path: PathBuf,
    name: String,
    basename: String,
    extension: String,
    is_root: bool,
    json_indent: usize,
}

impl Node {
    /// Create a node for `path`, resolved against the current directory if
    /// relative.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is relative and the current directory
    /// cannot be read.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let full_path = normalize(path.as_ref())?;
        Ok(Self::from_normalized(full_path, DEFAULT_JSON_INDENT))
    }

    /// Create a node for the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read.
    pub fn current() -> Result<Self> {
        Self::new("")
    }

    /// Create a node using the given configuration.
    ///
    /// With `expand_tilde` set, a leading `~` or `~/` is replaced by the home
    /// directory before resolution. The configured JSON indent is used by
    /// [`Node::write_json`] on this node and every node derived from it.
    ///
    /// # Errors
    ///
    /// Returns an error if tilde expansion fails or the current directory
    /// cannot be read.
    pub fn with_config(path: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let path = path.as_ref();
        let full_path = if config.expand_tilde {
            normalize(&expand_tilde(path)?)?
        } else {
            normalize(path)?
        };
        Ok(Self::from_normalized(full_path, config.json_indent))
    }

    fn from_normalized(full_path: PathBuf, json_indent: usize) -> Self {
        let mut node = Self {
            full_path: PathBuf::new(),
            name: String::new(),
            basename: String::new(),
            extension: String::new(),
            is_root: false,
            json_indent,
        };
        node.set_path(full_path);
        node
    }

    /// Same settings, different path.
    fn derive(&self, full_path: PathBuf) -> Self {
        Self::from_normalized(full_path, self.json_indent)
    }

    /// Recompute every derived attribute from `full_path`.
    fn set_path(&mut self, full_path: PathBuf) {
        let name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (basename, extension) = split_extension(&name);

        self.basename = basename.to_owned();
        self.extension = extension.to_owned();
        self.name = name;
        self.is_root = full_path.parent().is_none();
        self.full_path = full_path;
    }

    /// The absolute, normalized path.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// The final path segment; empty for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without its extension.
    #[must_use]
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Everything from the first `.` after the first character, dot
    /// included; empty if there is none.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The extension without its leading dot.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.extension.strip_prefix('.').unwrap_or_default()
    }

    /// Whether this node is the filesystem root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Spaces per indentation level used by [`Node::write_json`].
    #[must_use]
    pub fn json_indent(&self) -> usize {
        self.json_indent
    }

    /// The directory one level up. The root is its own parent.
    #[must_use]
    pub fn parent(&self) -> Self {
        self.derive(resolve_against(&self.full_path, Path::new("..")))
    }

    /// A node for `path` joined onto this one. Same as [`Node::rel`].
    #[must_use]
    pub fn child(&self, path: impl AsRef<Path>) -> Self {
        self.rel(path)
    }

    /// A node for `path` resolved against this one. An absolute `path`
    /// replaces this node's path.
    #[must_use]
    pub fn rel(&self, path: impl AsRef<Path>) -> Self {
        self.derive(resolve_against(&self.full_path, path.as_ref()))
    }

    /// A node for `path` resolved against this node's parent.
    #[must_use]
    pub fn sibling(&self, path: impl AsRef<Path>) -> Self {
        self.parent().child(path)
    }

    /// The relative path leading from `other` to this node.
    ///
    /// # Errors
    ///
    /// Returns an error only if `other` is a relative raw path and the current
    /// directory cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsnode::Node;
    /// use std::path::Path;
    ///
    /// let file = Node::new("/srv/site/css/main.css").unwrap();
    /// assert_eq!(file.path_from("/srv/site").unwrap(), Path::new("css/main.css"));
    ///
    /// let js = file.sibling("../js");
    /// assert_eq!(file.path_from(&js).unwrap(), Path::new("../css/main.css"));
    /// ```
    pub fn path_from<'a>(&self, other: impl Into<PathArg<'a>>) -> Result<PathBuf> {
        let other = other.into().to_node()?;
        Ok(relative_path(&other.full_path, &self.full_path))
    }

    /// Literal string-prefix descendant test.
    ///
    /// True when this node's path starts with `other`'s path (minus one
    /// trailing `/`) and is strictly longer. Raw path arguments are compared
    /// as written, not resolved. No component boundary is checked, so
    /// `/a/bx` is within `/a/b`; use [`Node::is_descendant_of`] for the
    /// component-wise answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsnode::Node;
    ///
    /// let dir = Node::new("/a/b").unwrap();
    /// assert!(dir.child("c").within(&dir));
    /// assert!(!dir.within(&dir));
    /// assert!(Node::new("/a/bx").unwrap().within(&dir));
    /// ```
    #[must_use]
    pub fn within<'a>(&self, other: impl Into<PathArg<'a>>) -> bool {
        PathRelationship::has_prefix(&self.full_path, other.into().as_path())
    }

    /// Component-wise relationship between this node and `other`.
    ///
    /// # Errors
    ///
    /// Returns an error only if `other` is a relative raw path and the current
    /// directory cannot be read.
    pub fn relationship_to<'a>(&self, other: impl Into<PathArg<'a>>) -> Result<PathRelationship> {
        let other = other.into().to_node()?;
        Ok(PathRelationship::between(&self.full_path, &other.full_path))
    }

    /// Whether this node lies strictly below `other`, component-wise.
    ///
    /// # Errors
    ///
    /// Same as [`Node::relationship_to`].
    pub fn is_descendant_of<'a>(&self, other: impl Into<PathArg<'a>>) -> Result<bool> {
        Ok(self.relationship_to(other)? == PathRelationship::Descendant)
    }
}

/// Split a file name at the first `.` found after its first character.
fn split_extension(name: &str) -> (&str, &str) {
    match name.char_indices().skip(1).find(|&(_, c)| c == '.') {
        Some((idx, _)) => name.split_at(idx),
        None => (name, ""),
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.full_path == other.full_path
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_path.hash(state);
    }
}

impl AsRef<Path> for Node {
    fn as_ref(&self) -> &Path {
        &self.full_path
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path.display())
    }
}
