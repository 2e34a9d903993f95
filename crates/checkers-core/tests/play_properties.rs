//! Invariants that must hold across arbitrary sequences of legal moves.

use checkers_core::{Board, Color, Game, GameState, MoveKind, Square, generate_legal_moves, validate};
use proptest::prelude::*;
use proptest::sample::Index;

/// Squares whose contents differ between two boards.
fn changed_squares(before: &Board, after: &Board) -> Vec<Square> {
    Square::all()
        .filter(|&sq| before.piece_on(sq) != after.piece_on(sq))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn random_games_keep_invariants(choices in prop::collection::vec(any::<Index>(), 0..120)) {
        let mut game = Game::new();

        for choice in choices {
            let Some(mover) = game.state().side_to_move() else {
                break;
            };
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let (mv, kind) = *choice.get(moves.as_slice());
            prop_assert_eq!(validate(game.board(), mv, mover), Ok(kind));

            let before = *game.board();
            let moving = before.piece_on(mv.source()).unwrap();
            let outcome = game.play(mv).unwrap();
            let after = *game.board();

            // Every piece stays on a dark, on-board square.
            after.validate().unwrap();
            for (sq, _) in after.pieces() {
                prop_assert!(sq.is_dark());
                prop_assert!(sq.x() < 8 && sq.y() < 8);
            }

            // A capture removes exactly the midpoint piece; a step removes nothing.
            let opponent = !mover;
            match kind {
                MoveKind::Jump { captured } => {
                    prop_assert_eq!(captured, mv.source().midpoint(mv.dest()));
                    prop_assert_eq!(after.count(opponent), before.count(opponent) - 1);
                    prop_assert!(after.piece_on(captured).is_none());
                    let mut changed = changed_squares(&before, &after);
                    changed.sort_by_key(|sq| sq.index());
                    let mut expected = vec![mv.source(), captured, mv.dest()];
                    expected.sort_by_key(|sq| sq.index());
                    prop_assert_eq!(changed, expected);
                }
                MoveKind::Step => {
                    prop_assert_eq!(after.count(opponent), before.count(opponent));
                    prop_assert_eq!(changed_squares(&before, &after).len(), 2);
                }
            }
            prop_assert_eq!(after.count(mover), before.count(mover));

            // Crowning happens exactly when a man lands on its far row.
            let lands_on_far_row = mv.dest().y() == mover.promotion_row();
            let expect_promotion = !moving.is_king() && lands_on_far_row;
            prop_assert_eq!(outcome.promoted, expect_promotion);
            let landed = after.piece_on(mv.dest()).unwrap();
            prop_assert_eq!(landed.is_king(), moving.is_king() || lands_on_far_row);
            prop_assert_eq!(landed.color(), mover);

            // Turns alternate until one side is wiped out.
            if after.count(opponent) == 0 {
                prop_assert_eq!(outcome.state, GameState::GameOver { winner: mover });
            } else {
                prop_assert_eq!(outcome.state, GameState::to_move(opponent));
            }
        }
    }

    #[test]
    fn generated_moves_match_side_to_move(choices in prop::collection::vec(any::<Index>(), 0..40)) {
        let mut game = Game::new();
        for choice in choices {
            let Some(mover) = game.state().side_to_move() else {
                break;
            };
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let regenerated = generate_legal_moves(game.board(), mover);
            prop_assert_eq!(regenerated.as_slice(), moves.as_slice());
            for &(mv, _) in &moves {
                prop_assert_eq!(game.board().color_on(mv.source()), Some(mover));
            }
            let (mv, _) = *choice.get(moves.as_slice());
            game.play(mv).unwrap();
        }
        prop_assert!(game.board().count(Color::White) <= 12);
        prop_assert!(game.board().count(Color::Black) <= 12);
    }
}
