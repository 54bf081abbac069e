//! Position: board, reserves, side to move and the legal-move cache
//!
//! Reads of legal-move information go through a lazily rebuilt table kept
//! behind a `parking_lot::Mutex`, so they work through `&self`. Mutation
//! (`apply_move`) takes `&mut self` and clears the table without locking.

mod apply;
mod cache;
mod json;
mod sfen;

use std::fmt;

use log::trace;
use parking_lot::Mutex;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::movegen;
use crate::rules::Rules;
use crate::types::{Facing, Move, MoveVec, Piece, PieceKind, Reserve, Square};

use cache::LegalMoves;

pub use json::{PieceSnapshot, PositionSnapshot, ReservesSnapshot};
pub use sfen::SFEN_STARTPOS;

pub struct Position {
    board: Board,
    reserves: [Reserve; Facing::NUM],
    side_to_move: Facing,
    /// 手数 (1 = first move)
    ply: u32,
    rules: Rules,
    /// `None` = dirty
    legal: Mutex<Option<LegalMoves>>,
}

impl Position {
    /// Assemble a position from its parts. Forward moves first in a new game.
    pub fn new(board: Board, reserves: [Reserve; Facing::NUM], side_to_move: Facing) -> Self {
        Position {
            board,
            reserves,
            side_to_move,
            ply: 1,
            rules: Rules::default(),
            legal: Mutex::new(None),
        }
    }

    /// 平手初期局面
    pub fn startpos() -> Self {
        Position::new(Board::startpos(), [Reserve::new(); Facing::NUM], Facing::Forward)
    }

    /// Replace the rule switches (invalidates cached legal moves)
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self.invalidate();
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    #[inline]
    pub fn reserve(&self, facing: Facing) -> &Reserve {
        &self.reserves[facing.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Facing {
        self.side_to_move
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Legal destinations of the piece on `from`, whichever side owns it
    pub fn legal_destinations(&self, from: Square) -> Bitboard {
        self.with_legal(|legal| legal.destinations(from))
    }

    /// Legal drop squares of `kind` for `facing`; empty if none is held
    pub fn legal_drops(&self, kind: PieceKind, facing: Facing) -> Bitboard {
        self.with_legal(|legal| legal.drops(kind, facing))
    }

    /// Every legal move of the side to move, promotion variants expanded
    pub fn legal_moves(&self) -> MoveVec {
        let us = self.side_to_move;
        self.with_legal(|legal| {
            let mut moves = MoveVec::new();
            for (from, piece) in self.board.pieces().filter(|(_, p)| p.facing == us) {
                for to in legal.destinations(from) {
                    let forced = movegen::is_promotion_forced(piece.kind, us, to);
                    let may_promote = piece.kind.can_promote()
                        && (forced || movegen::is_promotion_eligible(us, from, to));
                    if !forced {
                        moves.push(Move::board(from, to, false));
                    }
                    if may_promote {
                        moves.push(Move::board(from, to, true));
                    }
                }
            }
            for kind in PieceKind::RESERVE_KINDS {
                moves.extend(legal.drops(kind, us).iter().map(|to| Move::drop(kind, to)));
            }
            moves
        })
    }

    /// Side to move has neither a legal board move nor a legal drop
    pub fn is_terminal(&self) -> bool {
        self.with_legal(|legal| !legal.has_any(&self.board, self.side_to_move))
    }

    /// Side to move's king is attacked
    pub fn is_in_check(&self) -> bool {
        movegen::is_in_check(&self.board, self.side_to_move)
    }

    /// Opposing pieces attacking the side to move's king
    pub fn checkers(&self) -> Bitboard {
        let them = self.side_to_move.opponent();
        self.board
            .king_squares(self.side_to_move)
            .iter()
            .fold(Bitboard::EMPTY, |acc, k| acc | movegen::attackers_of(&self.board, k, them))
    }

    /// Whether the legal-move tables are currently built
    pub fn is_cache_valid(&self) -> bool {
        self.legal.lock().is_some()
    }

    fn with_legal<R>(&self, f: impl FnOnce(&LegalMoves) -> R) -> R {
        let mut guard = self.legal.lock();
        let legal = guard.get_or_insert_with(|| {
            trace!("refreshing legal moves at ply {}", self.ply);
            LegalMoves::compute(&self.board, &self.reserves, self.rules)
        });
        f(legal)
    }

    #[inline]
    fn invalidate(&mut self) {
        *self.legal.get_mut() = None;
    }
}

impl Clone for Position {
    fn clone(&self) -> Self {
        Position {
            board: self.board,
            reserves: self.reserves,
            side_to_move: self.side_to_move,
            ply: self.ply,
            rules: self.rules,
            legal: Mutex::new(self.legal.lock().clone()),
        }
    }
}

/// Equality of the game state; the cache is not compared
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.reserves == other.reserves
            && self.side_to_move == other.side_to_move
            && self.ply == other.ply
            && self.rules == other.rules
    }
}

impl Eq for Position {}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("sfen", &self.to_sfen())
            .field("rules", &self.rules)
            .finish()
    }
}

fn fmt_reserve(f: &mut fmt::Formatter<'_>, reserve: &Reserve) -> fmt::Result {
    if reserve.is_empty() {
        return write!(f, "-");
    }
    for (i, (kind, n)) in reserve.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{kind}")?;
        if n > 1 {
            write!(f, "{n}")?;
        }
    }
    Ok(())
}

/// Board diagram with both reserves and the side to move
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Backward reserve: ")?;
        fmt_reserve(f, self.reserve(Facing::Backward))?;
        writeln!(f)?;
        write!(f, "{}", self.board)?;
        write!(f, "Forward reserve: ")?;
        fmt_reserve(f, self.reserve(Facing::Forward))?;
        writeln!(f)?;
        let side = match self.side_to_move {
            Facing::Forward => "Forward",
            Facing::Backward => "Backward",
        };
        write!(f, "Side to move: {side} (ply {})", self.ply)
    }
}
