//! 駒（Piece）

use serde::{Deserialize, Serialize};

use super::{Facing, PieceKind};
use crate::error::NotationError;

/// A piece on the board: kind plus owner/facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub facing: Facing,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, facing: Facing) -> Self {
        Piece { kind, facing }
    }

    /// Same piece in its promoted form (unchanged if it cannot promote)
    #[inline]
    pub const fn promoted(self) -> Self {
        match self.kind.promote() {
            Some(kind) => Piece::new(kind, self.facing),
            None => self,
        }
    }

    /// SFEN piece token: upper case for Forward, lower case for Backward,
    /// `+` prefix when promoted
    pub fn to_sfen(self) -> String {
        let c = self.kind.base_char();
        let c = match self.facing {
            Facing::Forward => c,
            Facing::Backward => c.to_ascii_lowercase(),
        };
        if self.kind.is_promoted() { format!("+{c}") } else { c.to_string() }
    }

    /// Parse a single SFEN letter (without `+`)
    pub fn from_sfen_char(c: char) -> Result<Self, NotationError> {
        let facing = if c.is_ascii_uppercase() { Facing::Forward } else { Facing::Backward };
        let kind = PieceKind::from_base_char(c.to_ascii_uppercase())
            .map_err(|_| NotationError::InvalidPiece(c))?;
        Ok(Piece::new(kind, facing))
    }
}
