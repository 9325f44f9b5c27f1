//! Path normalization functions.
//!
//! Normalization is purely lexical: it never touches the filesystem and never
//! follows symlinks. It converts relative paths to absolute ones against the
//! current directory and resolves `.` and `..` components the way POSIX
//! `resolve` does, so `..` at the root stays at the root.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Replace a leading `~` with the home directory.
///
/// Only the bare `~` and `~/rest` forms are understood. Paths that do not
/// start with `~` come back unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for non-UTF-8 input, for `~user` forms, and
/// when the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use fsnode::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let untouched = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(untouched, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(text) = path.to_str() else {
        return Err(invalid_path(path, "path is not valid UTF-8"));
    };
    let Some(rest) = text.strip_prefix('~') else {
        return Ok(path.to_path_buf());
    };

    let home = home::home_dir().ok_or_else(|| invalid_path(path, "home directory is unknown"))?;
    match rest.chars().next() {
        None => Ok(home),
        Some('/' | '\\') => Ok(home.join(&rest[1..])),
        Some(_) => Err(invalid_path(path, "~user expansion is not supported")),
    }
}

fn invalid_path(path: &Path, reason: &str) -> Error {
    Error::InvalidPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Resolve `.` and `..` components lexically.
///
/// A `..` that would climb above the root is dropped. For relative input,
/// leading `..` components that cannot be resolved are kept.
///
/// # Examples
///
/// ```
/// use fsnode::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;
    // Count of leading `..` kept in a relative result; these cannot be popped.
    let mut unresolved_parents = 0usize;
    let mut normal_depth = 0usize;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
                normal_depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if normal_depth > 0 {
                    result.pop();
                    normal_depth -= 1;
                } else if !has_root {
                    result.push("..");
                    unresolved_parents += 1;
                }
            }
        }
    }

    if result.as_os_str().is_empty() && unresolved_parents == 0 && !has_root {
        result.push(".");
    }

    result
}

/// Join `path` onto an absolute `base` and resolve the result.
///
/// An absolute `path` replaces `base` entirely, matching `Path::join`.
///
/// # Examples
///
/// ```
/// use fsnode::path::normalize::resolve_against;
/// use std::path::{Path, PathBuf};
///
/// let base = Path::new("/srv/app");
/// assert_eq!(resolve_against(base, Path::new("../logs")), PathBuf::from("/srv/logs"));
/// assert_eq!(resolve_against(base, Path::new("/etc")), PathBuf::from("/etc"));
/// ```
#[must_use]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    resolve_components(&base.join(path))
}

/// Normalize a path to absolute form.
///
/// Relative paths are resolved against the current directory, then `.` and
/// `..` components are resolved. Tilde is not expanded; see [`expand_tilde`].
///
/// # Errors
///
/// Returns an error if the path is relative and the current directory cannot
/// be determined.
///
/// # Examples
///
/// ```
/// use fsnode::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./src")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(resolve_components(path));
    }

    let cwd = env::current_dir()
        .map_err(|e| invalid_path(path, &format!("current directory is unreadable: {e}")))?;
    Ok(resolve_against(&cwd, path))
}
