//! Reversi CLI
//!
//! Commands:
//! - play: play a single game (human and/or AI seats)
//! - match: play a series of AI vs AI games

use clap::{Parser, Subcommand};

mod match_cmd;
mod play_cmd;

#[derive(Parser)]
#[command(name = "reversi")]
#[command(about = "Reversi/Othello with an alpha-beta AI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a series of games between two AIs
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args),
    }
}
