//! Property-based tests for the game engine.
//!
//! Move sequences are arbitrary indices, including out-of-range ones and
//! repeats, so rejected moves are exercised alongside accepted ones.

use proptest::prelude::*;
use tictactoe::{Board, Game, Mark, Outcome, Position, compute_outcome};

prop_compose! {
    fn arbitrary_moves()(moves in prop::collection::vec(0usize..12, 0..20)) -> Vec<usize> {
        moves
    }
}

fn play(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for &index in moves {
        game.attempt_move(index);
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 8192,
        ..ProptestConfig::default()
    })]

    #[test]
    fn mark_counts_stay_balanced(moves in arbitrary_moves()) {
        let mut game = Game::new();
        for index in moves {
            game.attempt_move(index);
            let x = game.board().count(Mark::X);
            let o = game.board().count(Mark::O);
            prop_assert!(x == o || x == o + 1);
        }
    }

    #[test]
    fn turn_follows_mark_counts(moves in arbitrary_moves()) {
        let game = play(&moves);
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        let expected = if x == o { Mark::X } else { Mark::O };
        prop_assert_eq!(game.turn(), expected);
    }

    #[test]
    fn occupied_cell_is_noop(moves in arbitrary_moves(), pick in 0usize..9) {
        let mut game = play(&moves);
        let occupied: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| !game.board().is_empty(*p))
            .collect();
        prop_assume!(!occupied.is_empty());

        let target = occupied[pick % occupied.len()];
        let before = game.clone();
        game.attempt_move(target.to_index());
        prop_assert_eq!(game, before);
    }

    #[test]
    fn finished_game_is_frozen(moves in arbitrary_moves(), extra in 0usize..9) {
        let mut game = play(&moves);
        prop_assume!(game.outcome() != Outcome::InProgress);

        let before = game.clone();
        game.attempt_move(extra);
        prop_assert_eq!(game, before);
    }

    #[test]
    fn reset_always_restores_initial_state(moves in arbitrary_moves()) {
        let mut game = play(&moves);
        game.reset();
        prop_assert_eq!(game.board(), &Board::new());
        prop_assert_eq!(game.turn(), Mark::X);
        prop_assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn outcome_is_pure(moves in arbitrary_moves()) {
        let game = play(&moves);
        let board = game.board().clone();
        let first = compute_outcome(&board);
        let second = compute_outcome(&board);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&board, game.board());
    }

    #[test]
    fn winner_made_last_move(moves in arbitrary_moves()) {
        let game = play(&moves);
        if let Outcome::Win(mark) = game.outcome() {
            // The winner made the last move, so the turn sits with the loser.
            prop_assert_eq!(game.turn(), mark.opponent());
        }
    }
}
