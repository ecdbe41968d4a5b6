//! Build-time generator for enum description lookups.
//!
//! Enums marked with `#[describe_enum]` (from `enum-describe-macros`) get an
//! inherent impl with:
//!
//! - `description(&self)` - the variant's `#[description(..)]` argument, or
//!   its name when there is none
//! - `describe_value(value)` - the same lookup over raw discriminants, with
//!   unknown values rendered as numbers
//! - `values_and_descriptions()` - every `(discriminant, description)` pair
//!   in declaration order
//!
//! Generated units are included at the crate root, so a described enum and
//! every module on its path must be visible there (`pub(crate)` or wider).
//!
//! ## Pipeline
//!
//! 1. [`scanner`] collects marked enums from parsed [`SourceFile`]s
//! 2. [`namespace`] resolves the module each enum lives in, and
//!    [`visibility`] checks that the crate root can name it
//! 3. [`metadata`] extracts per-variant descriptions
//! 4. [`synth`] renders one unit per enum plus a trailing index unit
//! 5. [`sink`] hands units to the host, usually `OUT_DIR`
//!
//! [`Generator`] drives a pass; [`build::generate`] wires it into `build.rs`.
//!
//! ## Examples
//!
//! ```
//! use enum_describe::{Generator, MemorySink, ModulePath, SourceFile};
//!
//! let source = SourceFile::parse(
//!     ModulePath::parse("console_sample"),
//!     r#"
//!     #[describe_enum]
//!     pub enum ETest {
//!         A,
//!         #[description("BofTest")]
//!         B,
//!     }
//!     "#,
//! )
//! .unwrap();
//!
//! let mut sink = MemorySink::new();
//! let described = Generator::default().run(&[source], &mut sink).unwrap();
//! assert_eq!(described, 1);
//! assert!(sink.units()[0].content().contains("\"BofTest\""));
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod namespace;
pub mod scanner;
pub mod sink;
pub mod source;
pub mod synth;
pub mod visibility;

pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use generator::{Generator, synthesize};
pub use namespace::ModulePath;
pub use scanner::{Candidate, collect_candidates};
pub use sink::{DirectorySink, EmissionSink, GeneratedUnit, MemorySink};
pub use source::{SourceFile, discover_sources};
pub use visibility::ModuleTree;
