use thiserror::Error;

/// Failures that abort generation for a tag.
///
/// Anything not listed here degrades locally instead: unsupported schema
/// shapes render as `unknown`, and operations without response content
/// become `void`.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to parse spec document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("broken reference: {path} does not resolve to a schema definition")]
    BrokenReference { path: String },

    #[error(
        "duplicate operation name {stem}: {method_a} {path_a} and {method_b} {path_b} collapse to the same identifier"
    )]
    DuplicateOperationStem {
        stem: String,
        method_a: String,
        path_a: String,
        method_b: String,
        path_b: String,
    },
}
