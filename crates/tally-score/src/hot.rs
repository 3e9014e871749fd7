//! Time-decayed "hot" ranking.
//!
//! Score = sign(s) · log10(max(|s|, 1)) + t / 45000, where `s` is the net
//! vote count and `t` the seconds since [`HOT_EPOCH`]. Every 12.5 hours of
//! age is worth one order of magnitude of net votes.

use chrono::{DateTime, Utc};

/// Unix timestamp (seconds) at which `t = 0`.
pub const HOT_EPOCH: i64 = 1_134_028_003;

/// Seconds of age worth one order of magnitude of votes.
pub const HOT_DECAY_SECONDS: f64 = 45_000.0;

/// Decimal places kept by [`hot_score`].
pub const HOT_PRECISION: i32 = 7;

/// Hot ranking for an item created at `created`.
pub fn hot_score(upvotes: u64, downvotes: u64, created: DateTime<Utc>) -> f64 {
    let net = upvotes as f64 - downvotes as f64;
    let order = net.abs().max(1.0).log10();
    let sign = if net > 0.0 {
        1.0
    } else if net < 0.0 {
        -1.0
    } else {
        0.0
    };
    let seconds = created.timestamp_millis() / 1000 - HOT_EPOCH;

    round_half_up(sign * order + seconds as f64 / HOT_DECAY_SECONDS, HOT_PRECISION)
}

/// Round to `places` decimals, going up only when the fractional part of
/// the scaled value is at least one half.
///
/// Negative values have a negative fractional part and therefore always
/// round toward negative infinity.
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    let rounded = if scaled.fract() >= 0.5 {
        scaled.ceil()
    } else {
        scaled.floor()
    };
    rounded / scale
}
