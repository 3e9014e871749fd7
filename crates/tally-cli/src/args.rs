//! Command-line arguments for the `tally` binary.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

/// Confidence-aware ranking scores for vote tallies
#[derive(Debug, Parser)]
#[command(name = "tally", version)]
#[command(long_about = "
Score up/down vote tallies by the lower bound of the Wilson score interval.

Running without a subcommand prints the score of 100 up-votes and
10 down-votes at the default z-score.

Common Usage:

  # Wilson lower bound at 95% confidence
  tally wilson 100 10 --z 1.96

  # Both bounds, failing on an empty tally
  tally wilson 0 0 --interval --strict

  # Hot ranking for an item posted at a given time
  tally hot 25 3 --created 2024-05-01T12:00:00Z

Environment:

  TALLY_Z       default z-score (1.644853)
  TALLY_POLICY  lenient (NaN on empty tally) or strict
  RUST_LOG      log filter, logs go to stderr
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wilson score lower bound (or full interval)
    Wilson(WilsonArgs),

    /// Wilson lower bound, negated for tallies without up-votes
    Signed(SignedArgs),

    /// Beta posterior lower bound for up/down votes
    Bayes(TallyArgs),

    /// Beta posterior lower bound for normalised star ratings
    Stars(StarsArgs),

    /// Time-decayed hot ranking
    Hot(HotArgs),
}

#[derive(Debug, Clone, Copy, Args)]
pub struct TallyArgs {
    /// Positive observations
    pub upvotes: u64,

    /// Negative observations
    pub downvotes: u64,

    /// Print a JSON object instead of a bare number
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct WilsonArgs {
    #[command(flatten)]
    pub tally: TallyArgs,

    /// z-score (overrides TALLY_Z)
    #[arg(short, long, allow_negative_numbers = true)]
    pub z: Option<f64>,

    /// Fail on an empty tally instead of printing NaN
    #[arg(long)]
    pub strict: bool,

    /// Print both bounds
    #[arg(long)]
    pub interval: bool,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct SignedArgs {
    #[command(flatten)]
    pub tally: TallyArgs,

    /// z-score (overrides TALLY_Z)
    #[arg(short, long, allow_negative_numbers = true)]
    pub z: Option<f64>,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct StarsArgs {
    /// Number of raters
    pub raters: u64,

    /// Sum of ratings, each normalised to [0, 1]
    pub sum: u64,

    /// Fail when the sum exceeds the rater count
    #[arg(long)]
    pub strict: bool,

    /// Print a JSON object instead of a bare number
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct HotArgs {
    #[command(flatten)]
    pub tally: TallyArgs,

    /// Creation time, RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub created: Option<DateTime<Utc>>,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected RFC 3339 timestamp: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_demo() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_wilson_flags() {
        let cli = Cli::try_parse_from(["tally", "wilson", "3", "1", "--z", "1.96", "--strict"])
            .unwrap();
        match cli.command {
            Some(Command::Wilson(args)) => {
                assert_eq!(args.tally.upvotes, 3);
                assert_eq!(args.tally.downvotes, 1);
                assert_eq!(args.z, Some(1.96));
                assert!(args.strict);
                assert!(!args.interval);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_counts() {
        assert!(Cli::try_parse_from(["tally", "wilson", "-1", "0"]).is_err());
    }

    #[test]
    fn parses_rfc3339() {
        let t = parse_timestamp("2005-12-08T07:46:43Z").unwrap();
        assert_eq!(t.timestamp(), 1_134_028_003);
        assert!(parse_timestamp("yesterday").is_err());
    }
}
