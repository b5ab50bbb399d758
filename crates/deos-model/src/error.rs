//! Detonation model errors.

use deos_core::DeosError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur along the detonation pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Input record rejected before entering the pipeline.
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// Computed detonation heat came out negative; the composition is
    /// thermochemically inconsistent with the model.
    #[error("negative detonation heat ({q:.1} cal/g), check the data input")]
    Infeasible { q: f64 },

    /// A denominator in the CJ algebra collapsed to zero.
    #[error("Degenerate CJ state: {what}")]
    Degenerate { what: &'static str },
}

impl From<ModelError> for DeosError {
    fn from(err: ModelError) -> Self {
        // Convert to DeosError while preserving context
        match err {
            ModelError::InvalidInput { what } => DeosError::InvalidArg {
                what: Box::leak(format!("Invalid model input: {}", what).into_boxed_str()),
            },
            ModelError::Infeasible { q } => DeosError::Invariant {
                what: Box::leak(
                    format!("Model infeasible: negative detonation heat {:.1} cal/g", q)
                        .into_boxed_str(),
                ),
            },
            ModelError::Degenerate { what } => DeosError::Invariant {
                what: Box::leak(format!("Degenerate CJ state: {}", what).into_boxed_str()),
            },
        }
    }
}
