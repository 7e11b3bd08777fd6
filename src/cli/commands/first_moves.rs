//! First move analysis
//!
//! This command analyzes outcomes and values for the essentially different
//! opening moves.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{Board, Move, Player},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Analyze opening move values and outcome counts")]
pub struct FirstMovesArgs {
    /// Export the analysis to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: FirstMovesArgs) -> Result<()> {
    println!("=== First Move Analysis ===\n");

    println!("Essentially different first moves: 3");
    println!("  1. Corner (e.g. (0, 0))");
    println!("  2. Edge (e.g. (0, 1))");
    println!("  3. Center ((1, 1))");

    let openings = [
        (Move::new(0, 0), "Corner"),
        (Move::new(0, 1), "Edge"),
        (Move::new(1, 1), "Center"),
    ];
    let mut results = Vec::new();

    for (mv, name) in openings {
        let board = Board::new().make_move(mv)?;

        // O replies to the opening, so the opening's value is min_value
        let value = search::min_value(&board);
        let (wins, draws, losses) = count_subtree_outcomes(board);
        let total = wins + draws + losses;

        println!("\n{name} first move (value under optimal play: {value}):");
        println!(
            "  X wins: {} ({:.1}%)",
            super::format_number(wins),
            wins as f64 / total as f64 * 100.0
        );
        println!(
            "  Draws: {} ({:.1}%)",
            super::format_number(draws),
            draws as f64 / total as f64 * 100.0
        );
        println!(
            "  O wins: {} ({:.1}%)",
            super::format_number(losses),
            losses as f64 / total as f64 * 100.0
        );

        results.push((name, value, wins, draws, losses, total));
    }

    println!("\n=== Strategic Analysis ===\n");
    println!("Every opening move is minimax-equivalent: the game is a draw");
    println!("under optimal play regardless of where X starts.");

    if let Some(path) = args.export {
        use std::{fs::File, io::Write};

        let mut file = File::create(&path)?;
        writeln!(file, "# First Move Analysis")?;
        writeln!(file)?;
        writeln!(file, "Move,Value,X_Wins,Draws,O_Wins,Total,X_Win_Pct")?;

        for (name, value, wins, draws, losses, total) in results {
            writeln!(
                file,
                "{},{},{},{},{},{},{:.2}",
                name,
                value,
                wins,
                draws,
                losses,
                total,
                wins as f64 / total as f64 * 100.0
            )?;
        }

        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

/// Count outcomes over every playout in a subtree
fn count_subtree_outcomes(initial: Board) -> (usize, usize, usize) {
    let mut x_wins = 0;
    let mut o_wins = 0;
    let mut draws = 0;

    fn count_games(board: Board, x_wins: &mut usize, o_wins: &mut usize, draws: &mut usize) {
        if board.is_terminal() {
            if board.has_won(Player::X) {
                *x_wins += 1;
            } else if board.has_won(Player::O) {
                *o_wins += 1;
            } else {
                *draws += 1;
            }
            return;
        }

        for mv in board.available_moves() {
            if let Ok(next) = board.make_move(mv) {
                count_games(next, x_wins, o_wins, draws);
            }
        }
    }

    count_games(initial, &mut x_wins, &mut o_wins, &mut draws);
    (x_wins, draws, o_wins)
}
