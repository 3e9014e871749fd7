//! tally CLI
//!
//! Prints confidence-aware ranking scores for vote tallies. With no
//! arguments it prints the Wilson lower bound of 100 up-votes and
//! 10 down-votes.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod commands;

use args::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "tally=debug,tally_score=debug"
    } else {
        "tally=info,tally_score=info"
    };

    // Logs go to stderr so stdout stays a bare number
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = match cli.command {
        None => commands::demo()?,
        Some(Command::Wilson(args)) => commands::wilson_command(args)?,
        Some(Command::Signed(args)) => commands::signed_command(args)?,
        Some(Command::Bayes(args)) => commands::bayes_command(args)?,
        Some(Command::Stars(args)) => commands::stars_command(args)?,
        Some(Command::Hot(args)) => commands::hot_command(args)?,
    };

    println!("{output}");
    Ok(())
}
