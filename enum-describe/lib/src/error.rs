use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation pass.
///
/// Any error fails the whole pass: units are only handed to a sink once
/// every candidate has been synthesized.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The enum has no enclosing module, so the generated code could not
    /// name it.
    #[error("Can not find namespace of {enum_name}")]
    NamespaceNotFound { enum_name: String },

    /// The enum is declared inside a function body or block and is not
    /// reachable by path.
    #[error("`{enum_name}` is declared inside a block and cannot be referenced by path")]
    LocalEnum { enum_name: String },

    /// A variant carries fields, so it has no integer discriminant to cast.
    #[error("variant `{enum_name}::{variant}` carries fields; only unit variants are supported")]
    UnsupportedVariant { enum_name: String, variant: String },

    /// Generic enums cannot be described by a single inherent impl.
    #[error("`{enum_name}` has generic parameters, which are not supported")]
    GenericEnum { enum_name: String },

    /// A module path segment is not a Rust identifier, usually a source
    /// file whose name cannot be a module.
    #[error("`{name}` is not a valid module name")]
    InvalidModuleName { name: String },

    /// The enum, or a module on its path, is not visible from the crate
    /// root where generated code is included.
    #[error(
        "`{enum_name}` is not visible from the crate root: `crate::{item}` needs `pub(crate)` or wider visibility"
    )]
    UnreachableEnum { enum_name: String, item: String },

    /// Two candidates would be emitted under the same unit name.
    #[error("generated unit `{name}` would be emitted twice")]
    DuplicateUnit { name: String },

    #[error("Failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("Failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to persist generated file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Invalid manifest `{path}`: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("Environment variable `{0}` is not set")]
    MissingEnv(&'static str),

    #[error("No `lib.rs` or `main.rs` in `{0}`")]
    CrateRootNotFound(PathBuf),
}

/// Convenience Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
