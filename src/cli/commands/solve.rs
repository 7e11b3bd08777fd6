//! Optimal-move analysis for a single position
//!
//! This command parses a board, reports its game-theoretic value, and
//! prints the optimal move (or every minimax-equivalent move).

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{board::Board, search};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a position")]
pub struct SolveArgs {
    /// Board state to analyze, 9 cells row-major ('.' for empty)
    pub state: String,

    /// Show all minimax-equivalent optimal moves
    #[arg(long)]
    pub all: bool,

    /// Export the analysis to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct SolveExport {
    state: String,
    to_move: char,
    value: i32,
    optimal_moves: Vec<(usize, usize)>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.state)?;

    println!("{board}");
    println!();

    if board.is_terminal() {
        match board.winner() {
            Some(winner) => println!("Game over: {} has won", winner.to_cell().to_char()),
            None => println!("Game over: draw"),
        }
        return Ok(());
    }

    let to_move = board.to_move();
    let value = search::value(&board);
    let optimal = search::best_moves(&board);

    println!("To move: {}", to_move.to_cell().to_char());
    println!("Value under optimal play: {} ({})", value, describe(value));

    if args.all {
        println!("Optimal moves (all minimax-equivalent):");
        for mv in &optimal {
            println!("  - {mv}");
        }
    } else {
        let best = search::best_move(&board).expect("non-terminal board has a best move");
        println!("Optimal move: {best}");
    }

    if let Some(path) = args.export {
        let export = SolveExport {
            state: board.encode(),
            to_move: to_move.to_cell().to_char(),
            value,
            optimal_moves: optimal.iter().map(|mv| (mv.row, mv.col)).collect(),
        };

        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

fn describe(value: i32) -> &'static str {
    match value {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}
