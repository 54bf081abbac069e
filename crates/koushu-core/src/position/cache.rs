//! Legal-move tables
//!
//! Built in one pass from a board and both reserves. The position keeps at
//! most one of these and drops it on every mutation.

use log::trace;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::movegen;
use crate::rules::Rules;
use crate::types::{Facing, PieceKind, Reserve, Square};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LegalMoves {
    /// Per origin square; empty for empty squares
    destinations: [Bitboard; Square::NUM],
    /// [facing][reserve index]; empty when the reserve holds none
    drops: [[Bitboard; 7]; Facing::NUM],
}

impl LegalMoves {
    pub(crate) fn compute(board: &Board, reserves: &[Reserve; Facing::NUM], rules: Rules) -> Self {
        let mut destinations = [Bitboard::EMPTY; Square::NUM];
        for (sq, _) in board.pieces() {
            destinations[sq.index()] = movegen::legal_board_destinations(board, sq);
        }

        let mut drops = [[Bitboard::EMPTY; 7]; Facing::NUM];
        for facing in Facing::ALL {
            let reserve = &reserves[facing.index()];
            for (i, kind) in PieceKind::RESERVE_KINDS.into_iter().enumerate() {
                if reserve.count(kind) == 0 {
                    continue;
                }
                let mut set = movegen::legal_drop_destinations(board, kind, facing);
                if kind == PieceKind::Pawn && rules.forbid_pawn_drop_mate {
                    for to in set {
                        if movegen::is_pawn_drop_mate(board, facing, to) {
                            trace!("pawn drop on {to} would mate, removed");
                            set.clear(to);
                        }
                    }
                }
                drops[facing.index()][i] = set;
            }
        }

        trace!(
            "legal-move tables rebuilt: {} board destinations, {} drop squares",
            destinations.iter().map(|b| b.count()).sum::<u32>(),
            drops.iter().flatten().map(|b| b.count()).sum::<u32>()
        );

        LegalMoves { destinations, drops }
    }

    #[inline]
    pub(crate) fn destinations(&self, from: Square) -> Bitboard {
        self.destinations[from.index()]
    }

    #[inline]
    pub(crate) fn drops(&self, kind: PieceKind, facing: Facing) -> Bitboard {
        kind.reserve_index().map_or(Bitboard::EMPTY, |i| self.drops[facing.index()][i])
    }

    /// 詰み判定用: does `facing` have any legal board move or drop?
    pub(crate) fn has_any(&self, board: &Board, facing: Facing) -> bool {
        board
            .pieces()
            .any(|(sq, p)| p.facing == facing && !self.destinations(sq).is_empty())
            || self.drops[facing.index()].iter().any(|b| !b.is_empty())
    }
}
