use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the model's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The calculation produced a non-physical value.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
