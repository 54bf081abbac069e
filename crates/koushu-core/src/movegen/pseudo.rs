//! Pseudo-legal destinations

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::geometry;
use crate::types::Square;

/// Squares the piece on `from` could move to, ignoring check.
///
/// Leaving the board or meeting an own piece stops a ray; an opposing piece
/// is included and stops it. An empty origin yields the empty set.
pub fn pseudo_destinations(board: &Board, from: Square) -> Bitboard {
    let Some(piece) = board.piece_on(from) else {
        return Bitboard::EMPTY;
    };

    let mut dests = Bitboard::EMPTY;
    for step in geometry::steps(piece.kind) {
        let (df, dr) = step.delta(piece.facing);
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr) {
            match board.piece_on(to) {
                Some(other) if other.facing == piece.facing => break,
                Some(_) => {
                    dests.set(to);
                    break;
                }
                None => dests.set(to),
            }
            if !step.slide {
                break;
            }
            cur = to;
        }
    }
    dests
}
