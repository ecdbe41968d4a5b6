//! Crate-internal enums: a private module holding `pub(crate)` items.

use enum_describe_macros::describe_enum;

#[describe_enum]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Draft,
    #[description("In review")]
    Review,
    Published,
}

/// Labels of every publishing stage, in order.
pub fn stage_labels() -> Vec<String> {
    Stage::values_and_descriptions()
        .into_iter()
        .map(|(_, label)| label.into_owned())
        .collect()
}
