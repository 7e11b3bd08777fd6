//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history, starting from the empty board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the initial position
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] when the game has already ended, or the
    /// underlying move error for an illegal coordinate.
    ///
    /// [`Error::GameOver`]: crate::Error::GameOver
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let next = self.current_state()?.make_move(mv)?;
        self.moves.push(mv);

        if next.is_terminal() {
            self.outcome = Some(match next.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board it
    /// is applied to. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = Board::new();
        for mv in self.moves.iter().take(end_index) {
            board = board.make_move(*mv)?;
        }
        Ok(board)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board it
    /// is applied to. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, from the empty board onward
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board it
    /// is applied to. This indicates corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(Board::new());

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
