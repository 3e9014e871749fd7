//! Tally Score
//!
//! Confidence-aware ranking scores for up/down vote tallies.
//!
//! # Wilson Lower Bound
//!
//! Sorting by the raw up-vote ratio ranks an item with one up-vote above an
//! item with 100 up-votes and one down-vote. The Wilson score interval
//! corrects for sample size: sort by its lower bound and an item needs
//! evidence, not luck, to climb.
//!
//! ```
//! use tally_score::{wilson, wilson_lower_bound, Z_95};
//!
//! assert!(wilson(100, 1) > wilson(1, 0));
//! assert!(wilson_lower_bound(100, 10, Z_95) < wilson(100, 10));
//! ```
//!
//! # Degenerate Input
//!
//! With no votes the bound is undefined. The plain functions return `NaN`;
//! the `try_*` functions and [`Policy::Strict`] return [`Error::EmptySample`].
//!
//! # Other Scores
//!
//! - [`signed_wilson`]: pushes down-voted-only items below unvoted ones
//! - [`bayesian_lower_bound`] and [`star_lower_bound`]: Beta posterior bounds
//! - [`hot_score`]: time-decayed ranking

mod bayes;
mod config;
mod error;
mod hot;
mod votes;
mod wilson;

pub use bayes::{bayesian_lower_bound, star_lower_bound, try_star_lower_bound, POSTERIOR_Z};
pub use config::{Policy, ScoreConfig, ENV_POLICY, ENV_Z};
pub use error::{Error, Result};
pub use hot::{hot_score, round_half_up, HOT_DECAY_SECONDS, HOT_EPOCH, HOT_PRECISION};
pub use votes::Votes;
pub use wilson::{
    signed_wilson, try_wilson_interval, try_wilson_lower_bound, validate_z, wilson,
    wilson_interval, wilson_lower_bound, wilson_upper_bound, Interval, DEFAULT_Z, Z_95,
};
