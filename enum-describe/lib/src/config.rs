//! Generator configuration.
//!
//! The marker and description attributes are fixed by `enum-describe-macros`.
//! A host crate can rename the index unit in its manifest:
//!
//! ```toml
//! [package.metadata.enum-describe]
//! index-name = "enum_describe.rs"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{GenerateError, Result};

/// Marker attribute defined by `enum-describe-macros`.
pub const MARKER: &str = "describe_enum";

/// Per-variant description attribute.
pub const DESCRIPTION_ATTRIBUTE: &str = "description";

/// Name of the unit that includes every generated unit.
pub const DEFAULT_INDEX_NAME: &str = "enum_describe.rs";

/// Configuration for a generation pass.
///
/// ## Examples
///
/// ```
/// use enum_describe::GeneratorConfig;
///
/// let config = GeneratorConfig::new().index_name("descriptions.rs");
/// assert_eq!(config.index_name, "descriptions.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// File name of the always-emitted index unit.
    pub index_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index unit file name.
    pub fn index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    /// Reads `[package.metadata.enum-describe]` from a `Cargo.toml`.
    ///
    /// A manifest without the table yields the defaults.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(path, &content)
    }

    fn from_manifest_str(path: &Path, content: &str) -> Result<Self> {
        let manifest_error = |message: String| GenerateError::Manifest {
            path: path.to_path_buf(),
            message,
        };

        let parsed: toml::Value =
            toml::from_str(content).map_err(|e| manifest_error(e.to_string()))?;

        let table = parsed
            .get("package")
            .and_then(|p| p.get("metadata"))
            .and_then(|m| m.get("enum-describe"));

        match table {
            Some(table) => table
                .clone()
                .try_into::<Self>()
                .map_err(|e: toml::de::Error| manifest_error(e.to_string())),
            None => Ok(Self::default()),
        }
    }
}
