//! Common test utilities for integration tests.
//!
//! Every test gets its own temporary directory through [`Fixture`], so tests
//! can run in parallel without stepping on each other's files.

use std::path::Path;

use fsnode::Node;
use tempfile::TempDir;

/// A temporary directory wrapped as a [`Node`].
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    dir: TempDir,
    root: Node,
}

#[allow(dead_code)]
impl Fixture {
    /// Creates a fresh, empty temporary directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let root = Node::new(dir.path()).expect("temp dir path should resolve");
        Self { dir, root }
    }

    /// The fixture directory as a node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The fixture directory as a plain path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` inside the fixture and returns its node.
    pub fn file(&self, name: &str, contents: impl AsRef<[u8]>) -> Node {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("should create parent dirs");
        }
        std::fs::write(&path, contents).expect("should write fixture file");
        self.root.child(name)
    }

    /// Creates directory `name` inside the fixture and returns its node.
    pub fn dir(&self, name: &str) -> Node {
        std::fs::create_dir_all(self.dir.path().join(name)).expect("should create fixture dir");
        self.root.child(name)
    }

    /// A node for `name` inside the fixture without creating anything.
    pub fn missing(&self, name: &str) -> Node {
        self.root.child(name)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
