//! Marker attribute for `enum-describe`.
//!
//! `#[describe_enum]` opts an enum into description generation. It changes
//! nothing about the enum itself; the build-time generator looks for it in
//! the source and emits the lookup code.
//!
//! ## Examples
//!
//! ```ignore
//! use enum_describe_macros::describe_enum;
//!
//! #[describe_enum]
//! pub enum ETest {
//!     A,
//!     #[description("BofTest")]
//!     B,
//! }
//! ```

use proc_macro::TokenStream;

mod marker;

/// Marks an enum for description generation.
///
/// - applies to enums only
/// - takes no arguments
/// - may appear once per enum
///
/// `#[description(..)]` attributes on variants are consumed here so the enum
/// compiles; their arguments are read by the generator.
#[proc_macro_attribute]
pub fn describe_enum(attr: TokenStream, item: TokenStream) -> TokenStream {
    marker::describe_enum_impl(attr.into(), item.into()).into()
}
