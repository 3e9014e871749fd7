//! Error types for tally-score.

use thiserror::Error;

/// Result type for tally-score operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the strict scoring functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No observations: `upvotes + downvotes == 0`.
    #[error("empty sample: upvotes + downvotes must be greater than zero")]
    EmptySample,

    /// The z-score is not a finite positive number.
    #[error("invalid z-score {0}: must be finite and greater than zero")]
    InvalidZ(f64),

    /// A star rating sum larger than the number of raters.
    #[error("rating sum {sum} exceeds rater count {raters}")]
    RatingSumExceedsRaters { raters: u64, sum: u64 },

    /// A configuration value could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
