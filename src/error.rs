//! Error types for tour construction and annealer setup.
//!
//! All checks run before the optimization loop starts. The loop itself
//! never fails: non-finite arithmetic inside it is handled by the
//! acceptance policy instead of being reported.

use thiserror::Error;

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, AnnealError>;

/// Errors surfaced synchronously to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnealError {
    /// Cooling parameters violate `T_max > T_min > 0` and `tau > 0`.
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// Which constraint failed.
        reason: String,
    },

    /// Fewer than three cities: two distinct interior positions cannot be drawn.
    #[error("degenerate tour: {cities} cities, at least 3 required")]
    DegenerateTour {
        /// Number of distinct cities in the rejected tour.
        cities: usize,
    },

    /// A closed tour was expected but its first and last points differ.
    #[error("tour is not closed: first and last points differ")]
    OpenTour,
}

impl AnnealError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AnnealError::InvalidParameters {
            reason: reason.into(),
        }
    }
}
