//! Perfect self-play
//!
//! This command plays both sides with the engine and prints the transcript.

use anyhow::Result;
use clap::Parser;

use crate::{
    board::Board,
    game::{Game, GameOutcome},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Play out a game with both sides using optimal moves")]
pub struct PlayArgs {
    /// Print only the move list, not the intermediate boards
    #[arg(long)]
    pub moves_only: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    println!("=== Perfect Self-Play ===\n");

    let mut game = Game::new();
    let mut board = Board::new();

    while let Some(mv) = search::best_move(&board) {
        let mover = board.to_move();
        game.play(mv)?;
        board = game.current_state()?;

        println!("{} plays {}", mover.to_cell().to_char(), mv);
        if !args.moves_only {
            println!("{board}");
            println!();
        }
    }

    match game.outcome {
        Some(GameOutcome::Win(player)) => {
            println!("Result: {} wins", player.to_cell().to_char())
        }
        Some(GameOutcome::Draw) => println!("Result: draw"),
        None => println!("Result: game unfinished"),
    }

    Ok(())
}
