//! Presentation-facing projections of a game.
//!
//! Everything here is derived from [`Game`] on demand, so a front end can
//! redraw from scratch after every mutation.

use super::game::Game;
use super::position::Position;
use super::rules::{self, Outcome};
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// Which badge the status line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// Waiting on the next mark.
    Next,
    /// Somebody won.
    Win,
    /// Board full, nobody won.
    Draw,
}

impl Game {
    /// Status text: `Next: X`, `Winner: X` or `It's a draw!`.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!("Next: {}", self.turn()),
            Outcome::Win(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }

    /// Badge for the current status.
    pub fn status_kind(&self) -> StatusKind {
        match self.outcome() {
            Outcome::InProgress => StatusKind::Next,
            Outcome::Win(_) => StatusKind::Win,
            Outcome::Draw => StatusKind::Draw,
        }
    }

    /// Header text: `Player Turn: X`, or `Game Over` once finished.
    pub fn turn_banner(&self) -> String {
        if self.is_over() {
            "Game Over".to_string()
        } else {
            format!("Player Turn: {}", self.turn())
        }
    }

    /// Accessible description of a cell, e.g. `Cell 5 with X`.
    pub fn cell_label(&self, pos: Position) -> String {
        match self.cell(pos) {
            Cell::Empty => format!("Cell {} empty", pos.number()),
            Cell::Occupied(mark) => format!("Cell {} with {}", pos.number(), mark),
        }
    }

    /// Whether selecting the cell would be accepted.
    pub fn cell_enabled(&self, pos: Position) -> bool {
        self.cell(pos).is_empty() && !self.is_over()
    }

    /// Builds a serializable snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView {
            cells: Position::ALL.map(|pos| CellView {
                position: pos,
                mark: self.cell(pos).mark(),
                enabled: self.cell_enabled(pos),
                label: self.cell_label(pos),
            }),
            turn: self.turn(),
            outcome: self.outcome(),
            status: self.status_line(),
            status_kind: self.status_kind(),
            banner: self.turn_banner(),
            winning_line: rules::winning_line(self.board()),
        }
    }
}

/// Render data for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// Mark in the cell, if any.
    pub mark: Option<Mark>,
    /// Whether the cell accepts input.
    pub enabled: bool,
    /// Accessible label.
    pub label: String,
}

/// Render data for the whole screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// Mark to move next.
    pub turn: Mark,
    /// Current outcome.
    pub outcome: Outcome,
    /// Status line text.
    pub status: String,
    /// Status badge.
    pub status_kind: StatusKind,
    /// Header text.
    pub banner: String,
    /// The completed line, if the game was won.
    pub winning_line: Option<[Position; 3]>,
}
