//! Sample crate whose enums are described by code generated in `build.rs`.
//!
//! Generated impls are included at the crate root, so paths inside
//! `#[description(..)]` arguments resolve from there, and described enums
//! must be visible there: `workflow` is private, so its enum is `pub(crate)`.

pub mod console_sample;
pub mod network;
mod workflow;

pub use workflow::stage_labels;

include!(concat!(env!("OUT_DIR"), "/enum_describe.rs"));
