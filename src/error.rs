use thiserror::Error;

/// Configuration errors.
///
/// Raised when a solver is built or reconfigured, never from inside `solve`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Update strategy selector outside of 1, 2 or 3.
    #[error("unknown update strategy {got}: please use 1, 2, or 3")]
    UnknownStrategy { got: usize },

    /// Convergence tolerance must be finite and strictly positive.
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    /// At least the first derivative is needed to take a Newton step.
    #[error("invalid max_order: must be >= 1. got {got}")]
    InvalidMaxOrder { got: usize },
}
