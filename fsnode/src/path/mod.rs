//! Lexical path arithmetic.
//!
//! Everything in this module is pure: no function here touches the
//! filesystem. [`Node`](crate::Node) builds its relation methods on top of
//! these helpers.
//!
//! # Examples
//!
//! ```
//! use fsnode::path::normalize::resolve_against;
//! use fsnode::path::relative::relative_path;
//! use fsnode::PathRelationship;
//! use std::path::Path;
//!
//! let base = Path::new("/srv/app");
//! let logs = resolve_against(base, Path::new("../logs"));
//! assert_eq!(logs, Path::new("/srv/logs"));
//! assert_eq!(relative_path(base, &logs), Path::new("../logs"));
//! assert_eq!(
//!     PathRelationship::between(Path::new("/srv"), base),
//!     PathRelationship::Ancestor
//! );
//! ```

pub mod normalize;
pub mod relationship;
pub mod relative;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use relationship::PathRelationship;
