use thiserror::Error;

/// Invalid channel metadata that the layout cannot be derived from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Two channels declare `error_bar_for` the same target.
    #[error(
        "More than one set of error bars specified for channel '{target_path}' \
         ('{existing}' and '{duplicate}')"
    )]
    DuplicateErrorBar {
        target_path: String,
        existing: String,
        duplicate: String,
    },
}

/// Failure to scan a parameter default expression for dataset references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum DefaultExprError {
    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedString(usize),
    #[error("unbalanced parenthesis at byte {0}")]
    UnbalancedParen(usize),
    #[error("dataset() key at byte {0} is not a string literal")]
    NonLiteralKey(usize),
}
