//! Library configuration.
//!
//! Settings come from built-in defaults, optionally overridden by `FSNODE_*`
//! environment variables:
//!
//! | Variable              | Field          | Values                         |
//! |-----------------------|----------------|--------------------------------|
//! | `FSNODE_JSON_INDENT`  | `json_indent`  | non-negative integer           |
//! | `FSNODE_EXPAND_TILDE` | `expand_tilde` | true/false, 1/0, yes/no        |
//! | `FSNODE_LOG_MODE`     | `log_level`    | quiet, normal, verbose         |
//!
//! # Examples
//!
//! ```
//! use fsnode::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.json_indent, 4);
//! assert!(!config.expand_tilde);
//! ```

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Environment variable overriding [`Config::json_indent`].
pub const JSON_INDENT_ENV: &str = "FSNODE_JSON_INDENT";

/// Environment variable overriding [`Config::expand_tilde`].
pub const EXPAND_TILDE_ENV: &str = "FSNODE_EXPAND_TILDE";

/// Indent width used by `write_json` unless configured otherwise.
pub const DEFAULT_JSON_INDENT: usize = 4;

/// Settings applied to nodes built with [`Node::with_config`](crate::Node::with_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of spaces per indentation level in JSON output.
    pub json_indent: usize,
    /// Expand a leading `~` to the home directory on construction.
    pub expand_tilde: bool,
    /// Verbosity for the bundled stderr logger, read by
    /// [`Logger::from_config`](crate::Logger::from_config).
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_indent: DEFAULT_JSON_INDENT,
            expand_tilde: false,
            log_level: LogLevel::Normal,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any `FSNODE_*` variable holds an
    /// invalid value.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `FSNODE_*` environment variables on top of the current values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any variable holds an invalid value.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(indent) = env::var(JSON_INDENT_ENV) {
            self.json_indent = indent.trim().parse().map_err(|_| Error::Validation {
                field: JSON_INDENT_ENV.into(),
                message: "Must be a non-negative integer".into(),
            })?;
        }

        if let Ok(val) = env::var(EXPAND_TILDE_ENV) {
            self.expand_tilde = parse_bool(EXPAND_TILDE_ENV, &val)?;
        }

        if let Ok(val) = env::var(LOG_MODE_ENV) {
            self.log_level = LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
        }

        Ok(())
    }
}

fn parse_bool(var_name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(Error::Validation {
            field: var_name.into(),
            message: format!("Invalid boolean value: {value}"),
        }),
    }
}
