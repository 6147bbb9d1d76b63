//! Non-interactive replay of a move list.

use tictactoe::{Game, Placement};
use tracing::{info, instrument, warn};

/// Plays `moves` on a fresh game and renders the board and status line.
///
/// Ignored moves are logged and skipped, exactly as the engine treats them.
#[instrument]
pub fn replay(moves: &[usize]) -> String {
    let mut game = Game::new();
    for &index in moves {
        if let Placement::Ignored(reason) = game.attempt_move(index) {
            warn!(index, %reason, "Move ignored");
        }
    }
    info!(outcome = %game.outcome(), "Replay finished");
    format!("{}\n\n{}", game.board().display(), game.status_line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_win() {
        let out = replay(&[0, 3, 1, 4, 2]);
        assert_eq!(out, "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nWinner: X");
    }

    #[test]
    fn test_replay_skips_ignored_moves() {
        let out = replay(&[4, 4, 11, 0]);
        assert_eq!(out, "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9\n\nNext: X");
    }

    #[test]
    fn test_replay_draw() {
        let out = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(out.ends_with("It's a draw!"));
    }
}
