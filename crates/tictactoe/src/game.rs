//! Game engine for tic-tac-toe.
//!
//! The engine owns the board and the turn. The outcome is never stored;
//! it is recomputed from the board on every read.

use super::position::Position;
use super::rules::{self, Outcome};
use super::types::{Board, Cell, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Index outside 0-8.
    #[display("Index {} is outside the board", _0)]
    OutOfBounds(usize),
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// What happened to an attempted move.
///
/// Rejected moves leave the game untouched, so this value is purely
/// informational and may be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was placed and the turn passed.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// The move was a no-op.
    Ignored(Rejection),
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Tic-tac-toe game engine.
///
/// Serialize-only, like [`Board`]: state is built from moves, never loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    turn: Mark,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    /// Recomputes the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::compute_outcome(&self.board)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Positions that would accept a move right now.
    pub fn available_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// Attempts to place the current mark at `index` (0-8).
    ///
    /// Out-of-range indices, occupied cells and finished games are
    /// ignored: neither the board nor the turn changes.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn attempt_move(&mut self, index: usize) -> Placement {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Ignoring move outside the board");
            return Placement::Ignored(Rejection::OutOfBounds(index));
        };
        self.attempt_move_at(position)
    }

    /// Attempts to place the current mark at `position`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn attempt_move_at(&mut self, position: Position) -> Placement {
        if self.is_over() {
            debug!(%position, "Ignoring move after game end");
            return Placement::Ignored(Rejection::GameOver);
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Ignoring move on occupied cell");
            return Placement::Ignored(Rejection::Occupied(position));
        }

        let mark = self.turn;
        self.board.set(position, Cell::Occupied(mark));
        self.turn = mark.opponent();

        match self.outcome() {
            Outcome::Win(winner) => info!(%winner, "Game won"),
            Outcome::Draw => info!("Game drawn"),
            Outcome::InProgress => debug!(%mark, %position, next = %self.turn, "Move placed"),
        }

        Placement::Placed { mark, position }
    }

    /// Clears the board and gives X the move, from any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.turn = Mark::X;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> Game {
        let mut game = Game::new();
        for &index in moves {
            game.attempt_move(index);
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.available_moves().len(), 9);
    }

    #[test]
    fn test_move_places_and_flips_turn() {
        let mut game = Game::new();
        let placement = game.attempt_move(4);
        assert_eq!(
            placement,
            Placement::Placed {
                mark: Mark::X,
                position: Position::Center
            }
        );
        assert_eq!(game.cell(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = play(&[4]);
        let before = game.clone();
        assert_eq!(
            game.attempt_move(4),
            Placement::Ignored(Rejection::Occupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = play(&[0]);
        let before = game.clone();
        assert_eq!(
            game.attempt_move(9),
            Placement::Ignored(Rejection::OutOfBounds(9))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_game_over_rejected() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(
            game.attempt_move(8),
            Placement::Ignored(Rejection::GameOver)
        );
        assert!(game.available_moves().is_empty());
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(
            game.attempt_move(0),
            Placement::Ignored(Rejection::GameOver)
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = play(&[0, 1, 2]);
        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_game_snapshot_serializes() {
        let game = play(&[4]);
        let json = serde_json::to_value(&game).expect("serialize");
        assert_eq!(json["turn"], "O");
        assert_eq!(json["board"]["cells"][4], serde_json::json!({ "Occupied": "X" }));
        assert_eq!(json["board"]["cells"][0], "Empty");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::Occupied(Position::TopLeft).to_string(),
            "Top-left is already occupied"
        );
        assert_eq!(
            Rejection::OutOfBounds(12).to_string(),
            "Index 12 is outside the board"
        );
    }
}
