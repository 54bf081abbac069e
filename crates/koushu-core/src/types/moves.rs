//! Move representation and notation
//!
//! Notation is `7g7f`, `8h2b+` for board moves and `P*5e` for drops. The
//! parser is a little more lenient than the printer and also takes the
//! record form `P7g7f`, `7g-7f` and `7gx7f`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{PieceKind, Square};
use crate::error::NotationError;

/// Move list that stays on the stack for typical positions
pub type MoveVec = SmallVec<[Move; 128]>;

/// A board move or a drop from reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Move {
    Board { from: Square, to: Square, promote: bool },
    Drop { kind: PieceKind, to: Square },
}

impl Move {
    #[inline]
    pub const fn board(from: Square, to: Square, promote: bool) -> Self {
        Move::Board { from, to, promote }
    }

    #[inline]
    pub const fn drop(kind: PieceKind, to: Square) -> Self {
        Move::Drop { kind, to }
    }

    /// 移動先
    #[inline]
    pub const fn to(&self) -> Square {
        match *self {
            Move::Board { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// 移動元（駒打ちは None）
    #[inline]
    pub const fn from(&self) -> Option<Square> {
        match *self {
            Move::Board { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    #[inline]
    pub const fn is_drop(&self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        matches!(self, Move::Board { promote: true, .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Board { from, to, promote } => {
                write!(f, "{from}{to}")?;
                if promote {
                    write!(f, "+")?;
                }
                Ok(())
            }
            Move::Drop { kind, to } => write!(f, "{}*{to}", kind.base_char()),
        }
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NotationError::InvalidMove(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();

        // Drop: "P*5e"
        if let [piece, '*', file, rank] = chars[..] {
            let kind = PieceKind::from_base_char(piece)?;
            if !kind.is_droppable() {
                return Err(NotationError::InvalidPiece(piece));
            }
            return Ok(Move::drop(kind, Square::from_chars(file, rank)?));
        }

        // Optional leading piece letter on board moves ("P7g7f")
        let mut rest = &chars[..];
        if let [c, tail @ ..] = rest {
            if c.is_ascii_alphabetic() {
                PieceKind::from_base_char(*c)?;
                rest = tail;
            }
        }

        let (promote, rest) = match rest {
            [head @ .., '+'] => (true, head),
            _ => (false, rest),
        };

        match *rest {
            [ff, fr, tf, tr] | [ff, fr, '-' | 'x', tf, tr] => Ok(Move::board(
                Square::from_chars(ff, fr)?,
                Square::from_chars(tf, tr)?,
                promote,
            )),
            _ => Err(invalid()),
        }
    }
}
