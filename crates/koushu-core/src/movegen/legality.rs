//! Legality filter, drop filter and promotion rules

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::error::MoveError;
use crate::types::{BOARD_SIZE, Facing, Piece, PieceKind, Square};

use super::{is_in_check, pseudo_destinations};

/// Relative ranks counted as the promotion zone
const PROMOTION_ZONE_DEPTH: u8 = 3;

/// Legal destinations of the piece on `from`.
///
/// A pseudo destination is kept when the mover's king is not in check after
/// the move is played on a copy of the board. Capturing the opposing king is
/// always kept.
pub fn legal_board_destinations(board: &Board, from: Square) -> Bitboard {
    let Some(piece) = board.piece_on(from) else {
        return Bitboard::EMPTY;
    };

    pseudo_destinations(board, from)
        .iter()
        .filter(|&to| {
            if board.piece_on(to) == Some(Piece::new(PieceKind::King, piece.facing.opponent())) {
                return true;
            }
            let mut sim = *board;
            sim.remove_piece(from);
            sim.put_piece(to, piece);
            !is_in_check(&sim, piece.facing)
        })
        .collect()
}

/// Whether any piece of `facing` has a legal board move
pub fn has_legal_board_move(board: &Board, facing: Facing) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.facing == facing)
        .any(|(sq, _)| !legal_board_destinations(board, sq).is_empty())
}

/// Drop squares that pass the static filters: empty, no second unpromoted
/// pawn in the file, and not a rank where the piece could never move again.
pub fn drop_candidates(board: &Board, kind: PieceKind, facing: Facing) -> Bitboard {
    if !kind.is_droppable() {
        return Bitboard::EMPTY;
    }
    let mut targets: Bitboard = Square::all()
        .filter(|&sq| board.piece_on(sq).is_none())
        .filter(|&sq| !kind.is_dead_on(sq.relative_rank(facing)))
        .collect();
    if kind == PieceKind::Pawn {
        for file in (0..BOARD_SIZE).filter(|&f| board.has_pawn_in_file(facing, f)) {
            targets &= !Bitboard::file_mask(file);
        }
    }
    targets
}

/// Drop squares for `kind` that do not leave the dropper's king in check
pub fn legal_drop_destinations(board: &Board, kind: PieceKind, facing: Facing) -> Bitboard {
    drop_candidates(board, kind, facing)
        .iter()
        .filter(|&to| {
            let mut sim = *board;
            sim.put_piece(to, Piece::new(kind, facing));
            !is_in_check(&sim, facing)
        })
        .collect()
}

/// 打ち歩詰め: a pawn drop on `to` that checks and leaves the defender
/// without a legal board move.
///
/// A pawn check is a contact check, so no drop of the defender can answer
/// it; looking at board moves alone is exact.
pub fn is_pawn_drop_mate(board: &Board, facing: Facing, to: Square) -> bool {
    let mut sim = *board;
    sim.put_piece(to, Piece::new(PieceKind::Pawn, facing));
    let defender = facing.opponent();
    is_in_check(&sim, defender) && !has_legal_board_move(&sim, defender)
}

/// 成りが可能か: origin or destination inside the three farthest ranks
#[inline]
pub fn is_promotion_eligible(facing: Facing, from: Square, to: Square) -> bool {
    from.relative_rank(facing) < PROMOTION_ZONE_DEPTH
        || to.relative_rank(facing) < PROMOTION_ZONE_DEPTH
}

/// 成りが必須か: the unpromoted piece would have no move from `to`
#[inline]
pub fn is_promotion_forced(kind: PieceKind, facing: Facing, to: Square) -> bool {
    kind.is_dead_on(to.relative_rank(facing))
}

/// Validate the promotion flag of a board move
pub fn check_promotion(
    kind: PieceKind,
    facing: Facing,
    from: Square,
    to: Square,
    promote: bool,
) -> Result<(), MoveError> {
    let forced = is_promotion_forced(kind, facing, to);
    if promote {
        if !kind.can_promote() || !(forced || is_promotion_eligible(facing, from, to)) {
            return Err(MoveError::PromotionNotAllowed);
        }
    } else if forced {
        return Err(MoveError::PromotionRequired);
    }
    Ok(())
}
