use thiserror::Error;

use crate::support::{constraint::ConstraintError, properties::PropertyError};

/// Errors that can occur while sizing an entrance tank and flocculator.
///
/// Every error is local to one sizing call and no partial results are kept.
#[derive(Debug, Error)]
pub enum SizingError {
    /// A design input or layout dimension is outside its valid range.
    ///
    /// Raised before any computation is attempted.
    #[error("invalid input `{name}`: {source}")]
    InvalidInput {
        /// Name of the offending input.
        name: &'static str,

        /// The constraint the input violated.
        #[source]
        source: ConstraintError,
    },

    /// The planview area iteration hit its limit without converging.
    #[error("area iteration did not converge after {iters} iterations: area_ratio={area_ratio}")]
    ConvergenceFailure {
        /// Iteration count performed.
        iters: usize,

        /// Ratio of the last two planview area estimates.
        area_ratio: f64,
    },

    /// A rounded count or derived length would not describe a buildable unit.
    #[error("degenerate geometry: {context}")]
    DegenerateGeometry { context: String },

    /// A fluid property could not be evaluated.
    #[error("fluid property evaluation failed")]
    Property(#[from] PropertyError),
}

impl SizingError {
    /// Creates an invalid input error for the named input.
    pub(crate) fn invalid(name: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidInput { name, source }
    }

    /// Creates a degenerate geometry error with context.
    pub(super) fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            context: context.into(),
        }
    }
}
