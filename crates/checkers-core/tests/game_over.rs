//! Game-over detection and a short scripted game.

use checkers_core::{Color, Game, GameError, GameState, Move, MoveError, MoveKind, Piece, Square};

fn sq(x: i32, y: i32) -> Square {
    Square::from_coords(x, y).unwrap()
}

fn mv(fx: i32, fy: i32, tx: i32, ty: i32) -> Move {
    Move::new(sq(fx, fy), sq(tx, ty))
}

#[test]
fn removing_every_white_piece_declares_black_the_winner() {
    let mut game = Game::new();
    let white: Vec<Square> = game.board().side(Color::White).collect();
    assert_eq!(white.len(), 12);

    for (removed, &square) in white.iter().enumerate() {
        assert_eq!(game.check_game_over(), None, "over after {removed} removals");
        assert_eq!(game.remove_piece(square), Some(Piece::WHITE_MAN));
    }

    assert_eq!(game.check_game_over(), Some(Color::Black));
    assert_eq!(game.state(), GameState::GameOver { winner: Color::Black });
    assert_eq!(game.state().to_string(), "Black wins.");
    assert_eq!(game.board().count(Color::Black), 12);
}

#[test]
fn scripted_exchange() {
    let mut game = Game::new();

    // White C6-D5, Black F3-E4.
    game.play(mv(2, 5, 3, 4)).unwrap();
    game.play(mv(5, 2, 4, 3)).unwrap();

    // White D5 jumps E4 to F3.
    let outcome = game.play(mv(3, 4, 5, 2)).unwrap();
    assert_eq!(outcome.kind, MoveKind::Jump { captured: sq(4, 3) });
    assert_eq!(outcome.captured, Some((sq(4, 3), Piece::BLACK_MAN)));
    assert_eq!(game.board().count(Color::Black), 11);
    assert_eq!(game.state(), GameState::BlackToMove);

    // Black recaptures: G2 over F3 to E4.
    let outcome = game.play(mv(6, 1, 4, 3)).unwrap();
    assert_eq!(outcome.captured, Some((sq(5, 2), Piece::WHITE_MAN)));
    assert_eq!(game.board().count(Color::White), 11);
    assert_eq!(game.state(), GameState::WhiteToMove);
    assert_eq!(game.ply(), 4);
}

#[test]
fn rejected_move_keeps_the_same_player() {
    let mut game = Game::new();
    game.play(mv(2, 5, 3, 4)).unwrap();

    // White tries to move again, then Black steps back onto its own man.
    assert!(matches!(
        game.play(mv(4, 5, 5, 4)),
        Err(GameError::IllegalMove(MoveError::NotYourPiece { .. }))
    ));
    assert_eq!(
        game.play(mv(1, 2, 2, 1)),
        Err(GameError::IllegalMove(MoveError::DestinationOccupied { square: sq(2, 1) }))
    );
    assert_eq!(game.state(), GameState::BlackToMove);
    assert_eq!(game.ply(), 1);
}
