//! Optional and forced promotion

use koushu_core::{Move, MoveError, PieceKind, Position, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Legal moves from `from` to `to`, both promotion variants
fn variants(pos: &Position, from: &str, to: &str) -> Vec<Move> {
    pos.legal_moves()
        .into_iter()
        .filter(|m| m.from() == Some(sq(from)) && m.to() == sq(to))
        .collect()
}

#[test]
fn test_pawn_must_promote_on_last_rank() {
    let mut pos = Position::from_sfen("4k4/1P7/9/9/9/9/9/9/4K4 b - 1").unwrap();
    assert_eq!(variants(&pos, "8b", "8a"), vec![Move::board(sq("8b"), sq("8a"), true)]);

    assert_eq!(pos.check_move(&"8b8a".parse().unwrap()), Err(MoveError::PromotionRequired));
    pos.apply_move("8b8a+".parse().unwrap()).unwrap();
    assert_eq!(pos.piece_on(sq("8a")).map(|p| p.kind), Some(PieceKind::ProPawn));
}

#[test]
fn test_lance_must_promote_on_last_rank() {
    let pos = Position::from_sfen("4k4/1L7/9/9/9/9/9/9/4K4 b - 1").unwrap();
    assert_eq!(variants(&pos, "8b", "8a"), vec![Move::board(sq("8b"), sq("8a"), true)]);
    assert_eq!(pos.check_move(&"8b8a".parse().unwrap()), Err(MoveError::PromotionRequired));
}

#[test]
fn test_backward_pawn_must_promote_on_rank_i() {
    let pos = Position::from_sfen("4k4/9/9/9/9/9/9/1p7/4K4 w - 1").unwrap();
    assert_eq!(variants(&pos, "8h", "8i"), vec![Move::board(sq("8h"), sq("8i"), true)]);
}

#[test]
fn test_knight_must_promote_on_two_last_ranks() {
    let pos = Position::from_sfen("4k4/9/9/6N2/9/9/9/9/4K4 b - 1").unwrap();
    assert_eq!(variants(&pos, "3d", "2b"), vec![Move::board(sq("3d"), sq("2b"), true)]);
    assert_eq!(variants(&pos, "3d", "4b"), vec![Move::board(sq("3d"), sq("4b"), true)]);

    let pos = Position::from_sfen("4k4/9/9/9/6N2/9/9/9/4K4 b - 1").unwrap();
    assert_eq!(variants(&pos, "3e", "2c").len(), 2);
}

#[test]
fn test_promotion_zone_entry_and_exit() {
    // Silver on 4d may promote entering 3c; silver on 4c may promote leaving
    let pos = Position::from_sfen("4k4/9/5S3/5S3/9/9/9/9/4K4 b - 1").unwrap();
    assert_eq!(variants(&pos, "4d", "3c").len(), 2);
    assert_eq!(variants(&pos, "4c", "5d").len(), 2);
    assert!(pos.is_legal(&"4c5d+".parse().unwrap()));

    let pos = Position::from_sfen("4k4/9/9/9/5S3/9/9/9/4K4 b - 1").unwrap();
    assert_eq!(variants(&pos, "4e", "4d"), vec![Move::board(sq("4e"), sq("4d"), false)]);
    assert_eq!(pos.check_move(&"4e4d+".parse().unwrap()), Err(MoveError::PromotionNotAllowed));
}

#[test]
fn test_non_promotable_pieces() {
    let pos = Position::from_sfen("4k4/9/9/3G5/9/9/9/9/4K4 b - 1").unwrap();
    assert_eq!(pos.check_move(&"6d6c+".parse().unwrap()), Err(MoveError::PromotionNotAllowed));
    assert!(pos.is_legal(&"6d6c".parse().unwrap()));

    let pos = Position::from_sfen("4k4/9/9/3+R5/9/9/9/9/4K4 b - 1").unwrap();
    assert_eq!(pos.check_move(&"6d6b+".parse().unwrap()), Err(MoveError::PromotionNotAllowed));
}

#[test]
fn test_backward_promotion_zone() {
    let pos = Position::from_sfen("4k4/9/9/9/9/3b5/9/9/4K4 w - 1").unwrap();
    // Bishop on 6f entering 7g (rank g is Backward's zone)
    assert_eq!(variants(&pos, "6f", "7g").len(), 2);
    assert_eq!(variants(&pos, "6f", "7e").len(), 1);
}
