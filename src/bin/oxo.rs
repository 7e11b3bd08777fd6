//! oxo CLI - analysis toolkit for the perfect-play tic-tac-toe engine
//!
//! This CLI provides a unified interface for:
//! - Solving positions (optimal move and game-theoretic value)
//! - Analyzing opening moves
//! - Enumerating the reachable state space
//! - Printing a perfect self-play transcript

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move for a position
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Analyze opening move values and outcome counts
    FirstMoves(oxo::cli::commands::first_moves::FirstMovesArgs),

    /// Enumerate the reachable state space
    Tree(oxo::cli::commands::tree::TreeArgs),

    /// Play out a game with both sides using optimal moves
    Play(oxo::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::FirstMoves(args) => oxo::cli::commands::first_moves::execute(args),
        Commands::Tree(args) => oxo::cli::commands::tree::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
    }
}
