//! Perfect-play tic-tac-toe engine
//!
//! This crate provides:
//! - Complete board representation with move generation and validation
//! - Exhaustive minimax search computing optimal play for either side
//! - Game records with derived states and outcomes
//! - A one-shot analysis CLI over the library surface
//!
//! The engine is a pure function from board to move: boards are immutable
//! `Copy` values, the side to move is derived from the mark counts, and a
//! single call to [`search::best_move`] walks the full game tree below the
//! given position.

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod search;

pub use board::{Board, Cell, Move, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use search::{best_move, best_moves, evaluate_moves, max_value, min_value, value};
