//! Boardwalk CLI - run single games or mass simulations from the shell.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::process::ExitCode;

/// Boardwalk - a Monopoly-style Monte Carlo simulator
#[derive(Parser, Debug)]
#[command(name = "boardwalk")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Game rule options shared by both subcommands.
#[derive(ClapArgs, Debug, Clone, Copy)]
struct RuleArgs {
    /// Number of players (minimum 2)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Enable house rules: free-parking bonus, no auctions
    #[arg(long)]
    house_rules: bool,

    /// Turns between inflation increases
    #[arg(long, default_value = "50")]
    inflation_period: u32,

    /// Inflation increase per period
    #[arg(long, default_value = "1")]
    inflation_step: u32,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a single game to completion
    Run {
        #[command(flatten)]
        rules: RuleArgs,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Run mass parallel games and aggregate statistics
    Simulate {
        #[command(flatten)]
        rules: RuleArgs,

        /// Number of games to run
        #[arg(short, long, default_value = "50000")]
        games: u64,

        /// Base seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SimulateFormat,

        /// Show progress bar
        #[arg(long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            rules,
            seed,
            format,
        } => cli::run::execute(&rules.into(), seed, format),

        Commands::Simulate {
            rules,
            games,
            seed,
            threads,
            format,
            progress,
        } => cli::simulate::execute(&rules.into(), games, seed, threads, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

impl From<RuleArgs> for boardwalk::GameConfig {
    fn from(args: RuleArgs) -> Self {
        Self {
            players: args.players,
            house_rules: args.house_rules,
            inflation_period: args.inflation_period,
            inflation_step: args.inflation_step,
        }
    }
}
