//! Attack and check detection

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Facing, Square};

use super::pseudo_destinations;

/// Squares of `attacker`'s pieces whose pseudo-moves reach `target`
pub fn attackers_of(board: &Board, target: Square, attacker: Facing) -> Bitboard {
    board
        .pieces()
        .filter(|&(sq, p)| p.facing == attacker && pseudo_destinations(board, sq).contains(target))
        .map(|(sq, _)| sq)
        .collect()
}

/// Whether any king of `defender` is attacked by an opposing piece
pub fn is_in_check(board: &Board, defender: Facing) -> bool {
    let kings = board.king_squares(defender);
    if kings.is_empty() {
        return false;
    }
    board
        .pieces()
        .filter(|(_, p)| p.facing != defender)
        .any(|(sq, _)| !(pseudo_destinations(board, sq) & kings).is_empty())
}
