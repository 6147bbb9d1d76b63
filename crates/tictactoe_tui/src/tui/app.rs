//! Application state and input handling.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe::{Game, Placement, Position};
use tracing::{debug, instrument};

use super::input::{self, Action};

/// Main application state.
///
/// Owns the game; every handler mutates it to completion and the caller
/// redraws afterwards.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    show_hints: bool,
    notice: Option<String>,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_hints: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            show_hints,
            notice: None,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Feedback from the last ignored move, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the last frame drew each cell, for mouse hit tests.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match input::action_for(key) {
            Action::Cursor(code) => self.cursor = input::move_cursor(self.cursor, code),
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::Reset => self.restart(),
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Action::Nothing => {}
        }
    }

    /// Handles a mouse event; a left click on a cell plays it.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(pos) = self.cell_at(event.column, event.row) {
            self.cursor = pos;
            self.play(pos);
        }
    }

    /// Finds the cell drawn at a terminal coordinate.
    fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cell_areas
            .iter()
            .position(|r| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .and_then(Position::from_index)
    }

    /// Forwards a selection to the engine.
    fn play(&mut self, pos: Position) {
        match self.game.attempt_move_at(pos) {
            Placement::Placed { mark, position } => {
                debug!(%mark, %position, "Move applied");
                self.notice = None;
            }
            Placement::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                self.notice = Some(reason.to_string());
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.notice = None;
    }
}
