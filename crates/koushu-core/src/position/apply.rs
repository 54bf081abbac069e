//! Move validation and application

use log::debug;

use super::Position;
use crate::error::MoveError;
use crate::movegen;
use crate::types::{Move, Piece};

impl Position {
    /// Why `mv` is not legal for the side to move, or `Ok(())`
    pub fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        let us = self.side_to_move;
        match *mv {
            Move::Board { from, to, promote } => {
                let piece = self.board.piece_on(from).ok_or(MoveError::EmptySource(from))?;
                if piece.facing != us {
                    return Err(MoveError::NotYourPiece(from));
                }
                if !self.legal_destinations(from).contains(to) {
                    return Err(MoveError::IllegalDestination { to });
                }
                movegen::check_promotion(piece.kind, us, from, to, promote)
            }
            Move::Drop { kind, to } => {
                if !kind.is_droppable() {
                    return Err(MoveError::NotDroppable(kind));
                }
                if self.reserve(us).count(kind) == 0 {
                    return Err(MoveError::NotInReserve(kind));
                }
                if !self.legal_drops(kind, us).contains(to) {
                    return Err(MoveError::IllegalDestination { to });
                }
                Ok(())
            }
        }
    }

    #[inline]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Validate and play `mv`. On error the position is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if let Err(err) = self.check_move(&mv) {
            debug!("rejected {mv} at ply {}: {err}", self.ply);
            return Err(err);
        }
        self.do_move(mv)?;
        debug!("applied {mv}, ply {} to move: {:?}", self.ply, self.side_to_move);
        Ok(())
    }

    /// Play a move already known to be legal. Both error paths return before
    /// anything is changed.
    fn do_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let us = self.side_to_move;
        match mv {
            Move::Board { from, to, promote } => {
                let piece = self.board.remove_piece(from).ok_or(MoveError::EmptySource(from))?;
                let placed = if promote { piece.promoted() } else { piece };
                if let Some(captured) = self.board.put_piece(to, placed) {
                    self.reserves[us.index()].add(captured.kind);
                }
            }
            Move::Drop { kind, to } => {
                if !self.reserves[us.index()].remove(kind) {
                    return Err(MoveError::NotInReserve(kind));
                }
                self.board.put_piece(to, Piece::new(kind, us));
            }
        }
        self.side_to_move = us.opponent();
        self.ply += 1;
        self.invalidate();
        Ok(())
    }
}
