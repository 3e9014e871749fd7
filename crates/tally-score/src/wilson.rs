//! Wilson score confidence interval for a binomial proportion.
//!
//! Given `n = up + down` trials and the observed proportion `phat = up / n`,
//! the interval bounds are:
//!
//! ```text
//! (phat + z²/(2n) ± z·sqrt((phat·(1−phat) + z²/(4n)) / n)) / (1 + z²/n)
//! ```
//!
//! The lower bound answers "how confident are we that the true positive
//! rate is at least this high", which makes it a sort key that does not
//! reward items with only a handful of votes.

use crate::error::{Error, Result};
use crate::votes::Votes;

/// Default z-score: ~90% one-sided confidence.
pub const DEFAULT_Z: f64 = 1.644853;

/// z-score for ~95% two-sided confidence.
pub const Z_95: f64 = 1.96;

/// Both ends of a Wilson score interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Pessimistic end
    pub lower: f64,
    /// Optimistic end
    pub upper: f64,
}

impl Interval {
    /// Distance between the two bounds.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether `p` lies inside the interval (inclusive).
    pub fn contains(&self, p: f64) -> bool {
        self.lower <= p && p <= self.upper
    }

    /// True when either bound is `NaN` (empty tally in lenient mode).
    pub fn is_nan(&self) -> bool {
        self.lower.is_nan() || self.upper.is_nan()
    }
}

/// Lower bound of the Wilson score interval.
///
/// An empty tally yields `NaN` rather than an error, and `z` is not
/// checked. Use [`try_wilson_lower_bound`] to reject both.
///
/// # Examples
///
/// ```
/// use tally_score::{wilson_lower_bound, DEFAULT_Z};
///
/// let lower = wilson_lower_bound(100, 10, DEFAULT_Z);
/// assert!((lower - 0.853660).abs() < 1e-6);
/// assert!(wilson_lower_bound(0, 0, DEFAULT_Z).is_nan());
/// ```
pub fn wilson_lower_bound(upvotes: u64, downvotes: u64, z: f64) -> f64 {
    bound(Votes::new(upvotes, downvotes), z, -1.0)
}

/// [`wilson_lower_bound`] with [`DEFAULT_Z`].
pub fn wilson(upvotes: u64, downvotes: u64) -> f64 {
    wilson_lower_bound(upvotes, downvotes, DEFAULT_Z)
}

/// Upper bound of the Wilson score interval. Same leniency as the lower.
pub fn wilson_upper_bound(upvotes: u64, downvotes: u64, z: f64) -> f64 {
    bound(Votes::new(upvotes, downvotes), z, 1.0)
}

/// Both bounds of the Wilson score interval.
pub fn wilson_interval(upvotes: u64, downvotes: u64, z: f64) -> Interval {
    let votes = Votes::new(upvotes, downvotes);
    Interval {
        lower: bound(votes, z, -1.0),
        upper: bound(votes, z, 1.0),
    }
}

/// Strict [`wilson_lower_bound`]: errors on an empty tally or a bad `z`.
pub fn try_wilson_lower_bound(upvotes: u64, downvotes: u64, z: f64) -> Result<f64> {
    check(Votes::new(upvotes, downvotes), z)?;
    Ok(wilson_lower_bound(upvotes, downvotes, z))
}

/// Strict [`wilson_interval`].
pub fn try_wilson_interval(upvotes: u64, downvotes: u64, z: f64) -> Result<Interval> {
    check(Votes::new(upvotes, downvotes), z)?;
    Ok(wilson_interval(upvotes, downvotes, z))
}

/// Signed ranking score.
///
/// Empty tallies score `0`. A tally with no upvotes scores the negated
/// lower bound of its flipped tally, so an item with only downvotes sorts
/// below one nobody has voted on yet. Otherwise this is the plain lower
/// bound.
pub fn signed_wilson(upvotes: u64, downvotes: u64, z: f64) -> f64 {
    let votes = Votes::new(upvotes, downvotes);
    if votes.is_empty() {
        return 0.0;
    }
    if upvotes == 0 {
        let flipped = votes.flipped();
        return -bound(flipped, z, -1.0);
    }
    bound(votes, z, -1.0)
}

/// Reject a z-score that is not finite and positive.
pub fn validate_z(z: f64) -> Result<()> {
    if z.is_finite() && z > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidZ(z))
    }
}

fn check(votes: Votes, z: f64) -> Result<()> {
    validate_z(z)?;
    if votes.is_empty() {
        return Err(Error::EmptySample);
    }
    Ok(())
}

// sign = -1.0 for the lower bound, +1.0 for the upper
fn bound(votes: Votes, z: f64, sign: f64) -> f64 {
    if votes.is_empty() {
        tracing::debug!(z, "empty tally, Wilson bound is NaN");
    }

    let n = votes.total() as f64;
    let phat = votes.proportion();
    let z2 = z * z;

    let center = phat + z2 / (2.0 * n);
    let margin = z * ((phat * (1.0 - phat) + z2 / (4.0 * n)) / n).sqrt();
    let denominator = 1.0 + z2 / n;

    // NaN survives clamp
    ((center + sign * margin) / denominator).clamp(0.0, 1.0)
}
