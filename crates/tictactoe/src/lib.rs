//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`] and the named [`Position`]s
//! - **Rules**: pure outcome evaluation over a board ([`compute_outcome`])
//! - **Game**: the engine that owns board and turn ([`Game`])
//! - **View**: status texts and render snapshots for front ends ([`GameView`])
//!
//! Invalid moves are ignored rather than reported as errors:
//!
//! ```
//! use tictactoe::{Game, Mark, Outcome};
//!
//! let mut game = Game::new();
//! game.attempt_move(0);
//! game.attempt_move(0); // occupied, no-op
//! assert_eq!(game.turn(), Mark::O);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;
mod view;

pub use game::{Game, Placement, Rejection};
pub use position::Position;
pub use rules::{LINES, Outcome, check_winner, compute_outcome, is_full, winning_line};
pub use types::{Board, Cell, Mark};
pub use view::{CellView, GameView, StatusKind};
