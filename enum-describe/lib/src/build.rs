//! Build-script integration.
//!
//! ```no_run
//! // build.rs
//! fn main() -> Result<(), enum_describe::GenerateError> {
//!     enum_describe::build::generate()?;
//!     Ok(())
//! }
//! ```
//!
//! and once in the crate:
//!
//! ```ignore
//! include!(concat!(env!("OUT_DIR"), "/enum_describe.rs"));
//! ```

use std::env;
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::generator::Generator;
use crate::sink::DirectorySink;
use crate::source::discover_sources;

/// Generates descriptions for the crate whose build script is running.
///
/// Follows the module tree of `$CARGO_MANIFEST_DIR/src/lib.rs` (or
/// `main.rs` for a binary-only package) with the manifest's configuration
/// and writes every unit to `$OUT_DIR`. Returns the number of enums
/// described.
pub fn generate() -> Result<usize> {
    let manifest_dir = env_path("CARGO_MANIFEST_DIR")?;
    let out_dir = env_path("OUT_DIR")?;
    generate_into(&manifest_dir, &out_dir)
}

/// Same as [`generate`] with explicit directories.
#[instrument]
pub fn generate_into(manifest_dir: &Path, out_dir: &Path) -> Result<usize> {
    let manifest = manifest_dir.join("Cargo.toml");
    let src = manifest_dir.join("src");

    println!("cargo:rerun-if-changed={}", manifest.display());
    println!("cargo:rerun-if-changed={}", src.display());

    let config = GeneratorConfig::from_manifest(&manifest)?;
    let sources = discover_sources(&src)?;
    let mut sink = DirectorySink::new(out_dir);
    Generator::new(config).run(&sources, &mut sink)
}

fn env_path(name: &'static str) -> Result<PathBuf> {
    env::var_os(name)
        .map(PathBuf::from)
        .ok_or(GenerateError::MissingEnv(name))
}
