//! 駒種（PieceKind）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotationError;

/// Piece kinds (14 types)
///
/// The first eight are base kinds, the last six their promoted forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,   // P
    Lance = 1,  // L
    Knight = 2, // N
    Silver = 3, // S
    Gold = 4,   // G
    Bishop = 5, // B
    Rook = 6,   // R
    King = 7,   // K
    ProPawn = 8,
    ProLance = 9,
    ProKnight = 10,
    ProSilver = 11,
    Horse = 12,
    Dragon = 13,
}

impl PieceKind {
    /// 駒種の数
    pub const NUM: usize = 14;

    pub const ALL: [PieceKind; 14] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::King,
        PieceKind::ProPawn,
        PieceKind::ProLance,
        PieceKind::ProKnight,
        PieceKind::ProSilver,
        PieceKind::Horse,
        PieceKind::Dragon,
    ];

    /// Kinds that can be held in reserve, in reserve-array order
    pub const RESERVE_KINDS: [PieceKind; 7] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 成駒を返す（成れない駒は None）
    #[inline]
    pub const fn promote(self) -> Option<PieceKind> {
        match self {
            PieceKind::Pawn => Some(PieceKind::ProPawn),
            PieceKind::Lance => Some(PieceKind::ProLance),
            PieceKind::Knight => Some(PieceKind::ProKnight),
            PieceKind::Silver => Some(PieceKind::ProSilver),
            PieceKind::Bishop => Some(PieceKind::Horse),
            PieceKind::Rook => Some(PieceKind::Dragon),
            _ => None,
        }
    }

    /// 生駒を返す（成っていない駒はそのまま）
    #[inline]
    pub const fn unpromote(self) -> PieceKind {
        match self {
            PieceKind::ProPawn => PieceKind::Pawn,
            PieceKind::ProLance => PieceKind::Lance,
            PieceKind::ProKnight => PieceKind::Knight,
            PieceKind::ProSilver => PieceKind::Silver,
            PieceKind::Horse => PieceKind::Bishop,
            PieceKind::Dragon => PieceKind::Rook,
            other => other,
        }
    }

    #[inline]
    pub const fn can_promote(self) -> bool {
        self.promote().is_some()
    }

    #[inline]
    pub const fn is_promoted(self) -> bool {
        self as u8 >= PieceKind::ProPawn as u8
    }

    /// Whether the kind may sit in a reserve and be dropped
    #[inline]
    pub const fn is_droppable(self) -> bool {
        !self.is_promoted() && !matches!(self, PieceKind::King)
    }

    /// Index into a reserve array, `None` for promoted kinds and the king
    #[inline]
    pub const fn reserve_index(self) -> Option<usize> {
        if self.is_droppable() { Some(self as usize) } else { None }
    }

    /// Pieces of this base kind in a full set, both sides together
    #[inline]
    pub const fn material_count(self) -> u8 {
        match self.unpromote() {
            PieceKind::Pawn => 18,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::King => 2,
            _ => 4,
        }
    }

    /// Pieces that must promote when arriving on these relative ranks.
    ///
    /// Relative rank 0 is the farthest rank; a pawn or lance there, or a
    /// knight on either of the two farthest ranks, would have no move left.
    #[inline]
    pub const fn is_dead_on(self, relative_rank: u8) -> bool {
        match self {
            PieceKind::Pawn | PieceKind::Lance => relative_rank == 0,
            PieceKind::Knight => relative_rank <= 1,
            _ => false,
        }
    }

    /// Letter of the base kind (`P L N S G B R K`)
    #[inline]
    pub const fn base_char(self) -> char {
        match self.unpromote() {
            PieceKind::Pawn => 'P',
            PieceKind::Lance => 'L',
            PieceKind::Knight => 'N',
            PieceKind::Silver => 'S',
            PieceKind::Gold => 'G',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            _ => 'K',
        }
    }

    /// Base kind from its upper-case letter
    pub fn from_base_char(c: char) -> Result<PieceKind, NotationError> {
        match c {
            'P' => Ok(PieceKind::Pawn),
            'L' => Ok(PieceKind::Lance),
            'N' => Ok(PieceKind::Knight),
            'S' => Ok(PieceKind::Silver),
            'G' => Ok(PieceKind::Gold),
            'B' => Ok(PieceKind::Bishop),
            'R' => Ok(PieceKind::Rook),
            'K' => Ok(PieceKind::King),
            _ => Err(NotationError::InvalidPiece(c)),
        }
    }
}

/// `P`, `+P`, ..., `+R`: base letter, prefixed with `+` when promoted
impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_promoted() {
            write!(f, "+")?;
        }
        write!(f, "{}", self.base_char())
    }
}

impl FromStr for PieceKind {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (promoted, rest) = match s.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut chars = rest.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(NotationError::InvalidMove(s.to_string()));
        };
        let base = PieceKind::from_base_char(c)?;
        if promoted {
            base.promote().ok_or(NotationError::InvalidPiece(c))
        } else {
            Ok(base)
        }
    }
}
