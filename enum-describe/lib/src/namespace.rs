//! Module paths and namespace resolution for candidate enums.

use std::fmt;

use tracing::debug;

use crate::error::{GenerateError, Result};
use crate::scanner::{Candidate, Scope};

/// A module path relative to the crate root.
///
/// The empty path is the crate root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    /// The crate root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a `::`-separated path. A leading `crate::` is ignored.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split("::")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .skip_while(|s| *s == "crate")
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns a copy extended with one more segment.
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

/// Resolves the namespace a candidate enum lives in.
///
/// The result is the file's module path followed by every enclosing inline
/// module. Reaching the crate root without any module, or passing through a
/// function body or block, fails the pass.
pub fn resolve_namespace(candidate: &Candidate<'_>) -> Result<ModulePath> {
    let enum_name = candidate.item.ident.to_string();
    let mut path = candidate.file_module.clone();

    for scope in &candidate.scopes {
        match *scope {
            Scope::Module(ident) => path = path.join(ident.to_string()),
            Scope::Opaque => return Err(GenerateError::LocalEnum { enum_name }),
        }
    }

    if path.is_root() {
        return Err(GenerateError::NamespaceNotFound { enum_name });
    }

    debug!(enum_name = %enum_name, namespace = %path, "Resolved namespace");
    Ok(path)
}
