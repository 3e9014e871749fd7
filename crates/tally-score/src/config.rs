//! Scoring configuration.
//!
//! Holds the z-score and how degenerate input is handled. Lenient mode is
//! the default and returns `NaN` for an empty tally; strict mode turns that
//! into [`Error::EmptySample`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::wilson::{self, Interval, DEFAULT_Z};

/// Environment variable holding the z-score.
pub const ENV_Z: &str = "TALLY_Z";

/// Environment variable holding the policy (`lenient` or `strict`).
pub const ENV_POLICY: &str = "TALLY_POLICY";

/// How degenerate input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Policy {
    /// Empty tallies produce `NaN`.
    #[default]
    Lenient,
    /// Empty tallies and invalid z-scores are errors.
    Strict,
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(Error::Config(format!(
                "unknown policy {other:?}, expected \"lenient\" or \"strict\""
            ))),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Configuration for Wilson scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreConfig {
    /// z-score (confidence level parameter)
    pub z: f64,

    /// Degenerate input handling
    pub policy: Policy,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            z: DEFAULT_Z,
            policy: Policy::Lenient,
        }
    }
}

impl ScoreConfig {
    /// Create config from environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_Z) {
            config.z = raw
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("invalid {ENV_Z} {raw:?}: {e}")))?;
        }

        if let Some(raw) = lookup(ENV_POLICY) {
            config.policy = raw.parse()?;
        }

        config.validate()?;
        tracing::debug!(z = config.z, policy = %config.policy, "loaded score config");
        Ok(config)
    }

    /// Set the z-score.
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Set the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the z-score.
    pub fn validate(&self) -> Result<()> {
        wilson::validate_z(self.z)
    }

    /// Wilson lower bound under this configuration.
    pub fn lower_bound(&self, upvotes: u64, downvotes: u64) -> Result<f64> {
        match self.policy {
            Policy::Lenient => Ok(wilson::wilson_lower_bound(upvotes, downvotes, self.z)),
            Policy::Strict => wilson::try_wilson_lower_bound(upvotes, downvotes, self.z),
        }
    }

    /// Wilson interval under this configuration.
    pub fn interval(&self, upvotes: u64, downvotes: u64) -> Result<Interval> {
        match self.policy {
            Policy::Lenient => Ok(wilson::wilson_interval(upvotes, downvotes, self.z)),
            Policy::Strict => wilson::try_wilson_interval(upvotes, downvotes, self.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ScoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ScoreConfig::default());
        assert_eq!(config.z, DEFAULT_Z);
        assert_eq!(config.policy, Policy::Lenient);
    }

    #[test]
    fn reads_overrides() {
        let config =
            ScoreConfig::from_lookup(lookup(&[(ENV_Z, "1.96"), (ENV_POLICY, " Strict ")])).unwrap();
        assert_eq!(config.z, 1.96);
        assert_eq!(config.policy, Policy::Strict);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            ScoreConfig::from_lookup(lookup(&[(ENV_Z, "wide")])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ScoreConfig::from_lookup(lookup(&[(ENV_POLICY, "loose")])),
            Err(Error::Config(_))
        ));
        assert_eq!(
            ScoreConfig::from_lookup(lookup(&[(ENV_Z, "-1")])),
            Err(Error::InvalidZ(-1.0))
        );
    }

    #[test]
    fn policy_controls_empty_tally() {
        let lenient = ScoreConfig::default();
        assert!(lenient.lower_bound(0, 0).unwrap().is_nan());
        assert!(lenient.interval(0, 0).unwrap().is_nan());

        let strict = lenient.with_policy(Policy::Strict);
        assert_eq!(strict.lower_bound(0, 0), Err(Error::EmptySample));
        assert_eq!(strict.interval(0, 0), Err(Error::EmptySample));
    }

    #[test]
    fn builder_overrides_z() {
        let config = ScoreConfig::default().with_z(1.96);
        assert_eq!(
            config.lower_bound(10, 10).unwrap(),
            wilson::wilson_lower_bound(10, 10, 1.96)
        );
    }

    #[test]
    fn policy_round_trips_through_display() {
        for policy in [Policy::Lenient, Policy::Strict] {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }
}
