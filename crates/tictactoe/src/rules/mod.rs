//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Nothing here mutates state, so
//! the outcome can be recomputed on every read.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Derived result of a board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// A mark completed a line.
    #[display("{} wins", _0)]
    Win(Mark),
    /// Board is full with no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Computes the outcome of a board.
///
/// Lines are checked rows first, then columns, then diagonals. A win takes
/// precedence over a full board.
#[instrument(level = "trace")]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
