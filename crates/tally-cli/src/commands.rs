//! Subcommand implementations.
//!
//! Each command computes one score and renders it either as a bare number
//! or as a JSON report.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tally_score::{
    bayesian_lower_bound, hot_score, signed_wilson, star_lower_bound, try_star_lower_bound,
    wilson, Interval, Policy, ScoreConfig,
};

use crate::args::{HotArgs, SignedArgs, StarsArgs, TallyArgs, WilsonArgs};

/// Tally used by the no-argument demo.
pub const DEMO_TALLY: (u64, u64) = (100, 10);

/// JSON rendering of a single score.
#[derive(Debug, Serialize)]
pub struct Report {
    pub score: &'static str,
    #[serde(flatten)]
    pub input: Input,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    pub value: Value,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Input {
    Votes { upvotes: u64, downvotes: u64 },
    Stars { raters: u64, sum: u64 },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(f64),
    Interval(Interval),
}

impl Report {
    fn render(&self, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string(self).context("failed to encode report");
        }
        Ok(match self.value {
            Value::Scalar(v) => v.to_string(),
            Value::Interval(Interval { lower, upper }) => format!("{lower} {upper}"),
        })
    }
}

/// Print `wilson(100, 10)`.
pub fn demo() -> Result<String> {
    let (up, down) = DEMO_TALLY;
    Ok(wilson(up, down).to_string())
}

fn config(z: Option<f64>, strict: bool) -> Result<ScoreConfig> {
    let mut config = ScoreConfig::from_env().context("failed to load configuration")?;
    if let Some(z) = z {
        config = config.with_z(z);
    }
    if strict {
        config = config.with_policy(Policy::Strict);
    }
    config.validate()?;
    tracing::debug!(z = config.z, policy = %config.policy, "effective config");
    Ok(config)
}

fn votes(tally: TallyArgs) -> Input {
    Input::Votes {
        upvotes: tally.upvotes,
        downvotes: tally.downvotes,
    }
}

pub fn wilson_command(args: WilsonArgs) -> Result<String> {
    let config = config(args.z, args.strict)?;
    let TallyArgs { upvotes, downvotes, json } = args.tally;

    let value = if args.interval {
        Value::Interval(config.interval(upvotes, downvotes)?)
    } else {
        Value::Scalar(config.lower_bound(upvotes, downvotes)?)
    };

    Report {
        score: "wilson",
        input: votes(args.tally),
        z: Some(config.z),
        created: None,
        value,
    }
    .render(json)
}

pub fn signed_command(args: SignedArgs) -> Result<String> {
    let config = config(args.z, false)?;
    let TallyArgs { upvotes, downvotes, json } = args.tally;

    Report {
        score: "signed_wilson",
        input: votes(args.tally),
        z: Some(config.z),
        created: None,
        value: Value::Scalar(signed_wilson(upvotes, downvotes, config.z)),
    }
    .render(json)
}

pub fn bayes_command(args: TallyArgs) -> Result<String> {
    Report {
        score: "bayes",
        input: votes(args),
        z: None,
        created: None,
        value: Value::Scalar(bayesian_lower_bound(args.upvotes, args.downvotes)),
    }
    .render(args.json)
}

pub fn stars_command(args: StarsArgs) -> Result<String> {
    let value = if args.strict {
        try_star_lower_bound(args.raters, args.sum)?
    } else {
        star_lower_bound(args.raters, args.sum)
    };

    Report {
        score: "stars",
        input: Input::Stars {
            raters: args.raters,
            sum: args.sum,
        },
        z: None,
        created: None,
        value: Value::Scalar(value),
    }
    .render(args.json)
}

pub fn hot_command(args: HotArgs) -> Result<String> {
    let created = args.created.unwrap_or_else(Utc::now);
    let TallyArgs { upvotes, downvotes, json } = args.tally;

    Report {
        score: "hot",
        input: votes(args.tally),
        z: None,
        created: Some(created),
        value: Value::Scalar(hot_score(upvotes, downvotes, created)),
    }
    .render(json)
}
