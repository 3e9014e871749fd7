//! Bayesian lower bounds from a Beta posterior.
//!
//! Starting from a uniform `Beta(1, 1)` prior, `a = 1 + successes` and
//! `b = 1 + failures`. The score is the posterior mean minus 1.65 standard
//! deviations, roughly the 5th percentile of the posterior.

use crate::error::{Error, Result};

/// Standard deviations subtracted from the posterior mean.
pub const POSTERIOR_Z: f64 = 1.65;

/// Lower bound of the up-vote rate under a uniform prior.
///
/// Unlike the Wilson bound this is defined for an empty tally: with no
/// evidence the prior alone gives `0.5 - 1.65 * 0.2887`.
pub fn bayesian_lower_bound(upvotes: u64, downvotes: u64) -> f64 {
    beta_lower_bound(1.0 + upvotes as f64, 1.0 + downvotes as f64)
}

/// Lower bound for star ratings normalised to `[0, 1]`.
///
/// `raters` is how many people rated, `rating_sum` the sum of their
/// normalised ratings. A sum above the rater count is not a valid tally
/// and yields `NaN`; see [`try_star_lower_bound`].
pub fn star_lower_bound(raters: u64, rating_sum: u64) -> f64 {
    let a = 1.0 + rating_sum as f64;
    let b = 1.0 + raters as f64 - rating_sum as f64;
    if b <= 0.0 {
        tracing::debug!(raters, rating_sum, "rating sum exceeds raters");
        return f64::NAN;
    }
    beta_lower_bound(a, b)
}

/// Strict [`star_lower_bound`].
pub fn try_star_lower_bound(raters: u64, rating_sum: u64) -> Result<f64> {
    if rating_sum > raters {
        return Err(Error::RatingSumExceedsRaters {
            raters,
            sum: rating_sum,
        });
    }
    Ok(star_lower_bound(raters, rating_sum))
}

fn beta_lower_bound(a: f64, b: f64) -> f64 {
    let total = a + b;
    let mean = a / total;
    let std_dev = ((a * b) / (total.powi(2) * (total + 1.0))).sqrt();
    mean - POSTERIOR_Z * std_dev
}
