#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fsnode
//!
//! An object wrapper around filesystem paths.
//!
//! A [`Node`] holds one absolute, normalized path and the attributes derived
//! from it. Relation methods (`parent`, `child`, `sibling`, `rel`,
//! `path_from`, `within`) are pure path arithmetic. Everything that touches
//! the disk is an `async fn` delegating to `tokio::fs`.
//!
//! ## Core Types
//!
//! - [`Node`]: the path entity, built with [`create`] or [`current`]
//! - [`Lines`]: lazy line stream returned by [`Node::lines`]
//! - [`PathArg`] and [`RenamePattern`]: flexible argument types
//! - [`PathRelationship`]: component-wise path comparison
//! - [`Error`] and [`Result`]: error handling types
//! - [`Config`], [`Logger`] and [`LogLevel`]: configuration and logging
//!
//! ## Examples
//!
//! ```
//! use std::path::Path;
//!
//! let file = fsnode::create("/srv/site/index.html").unwrap();
//! assert_eq!(file.basename(), "index");
//! assert_eq!(file.kind(), "html");
//!
//! let css = file.sibling("css/main.css");
//! assert_eq!(css.full_path(), Path::new("/srv/site/css/main.css"));
//! assert!(css.within(&file.parent()));
//! ```
//!
//! ```no_run
//! # async fn demo() -> fsnode::Result<()> {
//! let settings = fsnode::current()?.child("settings.json");
//! settings.write_json(&serde_json::json!({ "theme": "dark" })).await?;
//! let value: serde_json::Value = settings.read_json().await?;
//! assert_eq!(value["theme"], "dark");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod path;

use std::path::Path;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use node::{Lines, Node, PathArg, RenamePattern};
pub use path::PathRelationship;

/// Create a [`Node`] for `path`, resolved against the current directory if
/// relative.
///
/// # Errors
///
/// Returns an error if `path` is relative and the current directory cannot
/// be read.
pub fn create(path: impl AsRef<Path>) -> Result<Node> {
    Node::new(path)
}

/// Create a [`Node`] for the current working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read.
pub fn current() -> Result<Node> {
    Node::current()
}
