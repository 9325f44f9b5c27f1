//! Relative path computation between two absolute paths.

use std::path::{Component, Path, PathBuf};

/// Compute the relative path that leads from `from` to `to`.
///
/// Both paths are expected to be absolute and normalized (see
/// [`normalize`](super::normalize::normalize)). The comparison is lexical and
/// component-wise. Equal paths yield an empty path. When the two paths share
/// no root (different Windows drives), `to` is returned unchanged.
///
/// # Examples
///
/// ```
/// use fsnode::path::relative::relative_path;
/// use std::path::{Path, PathBuf};
///
/// let rel = relative_path(Path::new("/data/in"), Path::new("/data/out/report.txt"));
/// assert_eq!(rel, PathBuf::from("../out/report.txt"));
///
/// assert_eq!(relative_path(Path::new("/a"), Path::new("/a")), PathBuf::new());
/// ```
#[must_use]
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return to.iter().collect();
    }

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push(Component::ParentDir);
    }
    for component in &to[common..] {
        rel.push(component);
    }
    rel
}
