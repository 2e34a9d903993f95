//! Exhaustive comparison of the move validator against a brute-force
//! reference predicate.
//!
//! Every (from, to) pair with coordinates in -1..=8 is tried for both colors
//! on a handful of hand-built boards, so off-board endpoints are covered too.

use checkers_core::{Board, Color, STARTING_LAYOUT, Square, is_legal, validate_coords};

/// Mixed middlegame with kings of both colors.
const MIDDLEGAME: &str = "1b1b4/2w1b3/1w1W4/4B3/3w1b2/2b5/1w1w1B2/8";

/// Sparse board where kings can step and jump backwards.
const KINGS: &str = "8/8/3B4/2w5/8/4W3/5b2/8";

/// Men crowded against the edges.
const EDGES: &str = "1b5b/w1b5/8/6w1/7b/8/1w3b2/w5w1";

fn reference(board: &Board, fx: i32, fy: i32, tx: i32, ty: i32, mover: Color) -> bool {
    let on_board = |x: i32, y: i32| (0..8).contains(&x) && (0..8).contains(&y);
    if !on_board(fx, fy) || !on_board(tx, ty) {
        return false;
    }
    if (fx, fy) == (tx, ty) {
        return false;
    }

    let at = |x: i32, y: i32| board.piece_on(Square::from_coords(x, y).unwrap());
    let Some(piece) = at(fx, fy) else {
        return false;
    };
    if piece.color() != mover || at(tx, ty).is_some() {
        return false;
    }

    let (dx, dy) = (tx - fx, ty - fy);
    if dx.abs() != dy.abs() {
        return false;
    }

    let forward = if mover == Color::White { -1 } else { 1 };
    if !piece.is_king() && dy.signum() != forward {
        return false;
    }

    match dx.abs() {
        1 => true,
        2 => at(fx + dx / 2, fy + dy / 2).is_some_and(|mid| mid.color() != mover),
        _ => false,
    }
}

fn compare_all_pairs(layout: &str) -> usize {
    let board: Board = layout.parse().unwrap();
    let mut accepted = 0;
    for mover in Color::ALL {
        for fx in -1..=8 {
            for fy in -1..=8 {
                for tx in -1..=8 {
                    for ty in -1..=8 {
                        let expected = reference(&board, fx, fy, tx, ty, mover);
                        let actual = is_legal(&board, fx, fy, tx, ty, mover);
                        assert_eq!(
                            actual, expected,
                            "{layout}: {mover} ({fx},{fy})->({tx},{ty}) validator={actual} reference={expected}"
                        );
                        assert_eq!(
                            validate_coords(&board, fx, fy, tx, ty, mover).is_ok(),
                            actual
                        );
                        if actual {
                            accepted += 1;
                        }
                    }
                }
            }
        }
    }
    accepted
}

#[test]
fn starting_position_matches_reference() {
    assert_eq!(compare_all_pairs(STARTING_LAYOUT), 14);
}

#[test]
fn middlegame_matches_reference() {
    assert!(compare_all_pairs(MIDDLEGAME) > 0);
}

#[test]
fn kings_match_reference() {
    assert!(compare_all_pairs(KINGS) > 0);
}

#[test]
fn edges_match_reference() {
    compare_all_pairs(EDGES);
}

#[test]
fn legal_forward_step_and_rejected_backward_or_orthogonal() {
    let board = Board::starting_position();
    // C6 -> D5: White man one step toward row 1.
    assert!(is_legal(&board, 2, 5, 3, 4, Color::White));
    // Orthogonal.
    assert!(!is_legal(&board, 2, 5, 2, 4, Color::White));
    // Backward onto an occupied square, and backward in open space.
    assert!(!is_legal(&board, 2, 5, 1, 6, Color::White));
    let open: Board = "8/8/8/8/3w4/8/8/8".parse().unwrap();
    assert!(!is_legal(&open, 3, 4, 2, 5, Color::White));
}
