//! Vote tallies.

use std::ops::Add;

/// Positive and negative observation counts for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Votes {
    /// Positive observations
    pub up: u64,
    /// Negative observations
    pub down: u64,
}

impl Votes {
    /// A tally with no observations.
    pub const EMPTY: Self = Self { up: 0, down: 0 };

    /// Create a new tally.
    pub const fn new(up: u64, down: u64) -> Self {
        Self { up, down }
    }

    /// Total number of trials, `n = up + down`.
    ///
    /// Saturates instead of overflowing; counts near `u64::MAX` are far
    /// beyond what an `f64` can represent exactly anyway.
    pub const fn total(&self) -> u64 {
        self.up.saturating_add(self.down)
    }

    /// True when nothing has been observed.
    pub const fn is_empty(&self) -> bool {
        self.up == 0 && self.down == 0
    }

    /// Observed proportion of positive votes, `phat = up / n`.
    ///
    /// `NaN` for an empty tally.
    pub fn proportion(&self) -> f64 {
        self.up as f64 / self.total() as f64
    }

    /// The same tally with up and down swapped.
    pub const fn flipped(&self) -> Self {
        Self {
            up: self.down,
            down: self.up,
        }
    }
}

impl From<(u64, u64)> for Votes {
    fn from((up, down): (u64, u64)) -> Self {
        Self::new(up, down)
    }
}

impl Add for Votes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            up: self.up.saturating_add(other.up),
            down: self.down.saturating_add(other.down),
        }
    }
}
