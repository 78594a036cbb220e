//! Error types for template emission.

use optable_core::OpcodeSpace;

/// Error while filling a template.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// The template has no occurrence of a space's placeholder.
    #[error("template has no `{placeholder}` placeholder for the {space} table")]
    MissingPlaceholder {
        space: OpcodeSpace,
        placeholder: String,
    },
    /// Both spaces are configured with the same placeholder.
    #[error("`{0}` is used as placeholder for both tables")]
    AmbiguousPlaceholder(String),
}
