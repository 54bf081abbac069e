//! Mate detection end to end from the opening array

use koushu_core::{Facing, Move, PieceKind, Position, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Short helpmate: bishop exchange, horse check, bishop drop, horse takes gold
const MATE_LINE: [&str; 9] =
    ["7g7f", "3c3d", "8h2b+", "7a6b", "2b3c", "4a4b", "B*2d", "3a2b", "3c4b"];

#[test]
fn test_helpmate_is_detected() {
    let mut pos = Position::startpos();
    let moves: Vec<Move> = MATE_LINE.iter().map(|m| m.parse().unwrap()).collect();

    for (i, mv) in moves.iter().enumerate() {
        assert!(!pos.is_terminal(), "terminal too early before move {} ({mv})", i + 1);
        assert!(pos.is_legal(mv), "{mv} should be legal at ply {}", pos.ply());
        pos.apply_move(*mv).unwrap();
    }

    assert_eq!(pos.side_to_move(), Facing::Backward);
    assert!(pos.is_in_check());
    assert!(pos.is_terminal());
    assert!(pos.legal_moves().is_empty());
    assert_eq!(pos.checkers().iter().collect::<Vec<_>>(), vec![sq("4b")]);

    // the king may not take the horse: the bishop on 2d guards 4b
    assert!(!pos.legal_destinations(sq("5a")).contains(sq("4b")));
    assert!(pos.legal_destinations(sq("5a")).is_empty());
}

#[test]
fn test_check_is_not_mate_when_block_exists() {
    let mut pos = Position::startpos();
    for m in ["7g7f", "3c3d", "8h2b+", "7a6b", "2b3c"] {
        pos.apply_move(m.parse().unwrap()).unwrap();
    }
    assert!(pos.is_in_check());
    assert!(!pos.is_terminal());

    // Only moves that deal with the check on the 3c-5a diagonal survive
    let moves = pos.legal_moves();
    assert!(moves.contains(&"4a4b".parse().unwrap()));
    assert!(!moves.contains(&"8c8d".parse().unwrap()));
    assert!(moves.iter().all(|m| !m.is_drop()));
}

#[test]
fn test_mate_reached_with_reserve_in_hand_still_terminal() {
    // Forward holds pieces, Backward to move with nothing: reserves of the
    // side not to move do not matter
    let pos = Position::from_sfen("4k4/4G4/4G4/9/9/9/9/9/4K4 w RB 1").unwrap();
    assert!(pos.is_in_check());
    assert!(pos.is_terminal());
    assert!(!pos.legal_drops(PieceKind::Rook, Facing::Forward).is_empty());
}

#[test]
fn test_stalemate_like_position_is_terminal() {
    // Not in check, but nothing can move
    let pos = Position::from_sfen("k8/2G6/1G7/9/9/9/9/9/8K w - 1").unwrap();
    assert!(!pos.is_in_check());
    assert!(pos.is_terminal());
}
