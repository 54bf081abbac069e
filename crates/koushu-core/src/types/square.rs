//! 升目（Square）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{BOARD_SIZE, Facing};
use crate::error::NotationError;

/// Square (0-80)
///
/// Layout: `file * 9 + rank`. File index 0 is notation file '1', rank index
/// 0 is notation rank 'a', so `1a` = 0, `1i` = 8, `2a` = 9, `9i` = 80.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// Create from 0-indexed file and rank.
    ///
    /// Both must be below 9; anything else is a caller bug.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < BOARD_SIZE && rank < BOARD_SIZE);
        Square(file * BOARD_SIZE + rank)
    }

    /// Checked constructor for signed coordinates (used when walking rays)
    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Square> {
        if file < 0 || rank < 0 || file >= BOARD_SIZE as i8 || rank >= BOARD_SIZE as i8 {
            None
        } else {
            Some(Square(file as u8 * BOARD_SIZE + rank as u8))
        }
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_index(n: usize) -> Option<Square> {
        if n < Self::NUM { Some(Square(n as u8)) } else { None }
    }

    /// 筋 (0-8)
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// 段 (0-8)
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Square reached by a board delta, `None` when it leaves the board
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        Square::from_coords(self.file() as i8 + file_delta, self.rank() as i8 + rank_delta)
    }

    /// Rank as seen from `facing` (0 = farthest rank)
    #[inline]
    pub const fn relative_rank(self, facing: Facing) -> u8 {
        facing.relative_rank(self.rank())
    }

    /// 上下反転（段のみ）
    #[inline]
    pub const fn flip_rank(self) -> Square {
        Square::new(self.file(), BOARD_SIZE - 1 - self.rank())
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }

    pub(crate) const fn file_char(self) -> char {
        (b'1' + self.file()) as char
    }

    pub(crate) const fn rank_char(self) -> char {
        (b'a' + self.rank()) as char
    }

    /// Parse a file character ('1'-'9') and a rank character ('a'-'i')
    pub fn from_chars(file: char, rank: char) -> Result<Square, NotationError> {
        let f = match file {
            '1'..='9' => file as u8 - b'1',
            _ => return Err(NotationError::InvalidFile(file)),
        };
        let r = match rank {
            'a'..='i' => rank as u8 - b'a',
            _ => return Err(NotationError::InvalidRank(rank)),
        };
        Ok(Square::new(f, r))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => Square::from_chars(f, r),
            _ => Err(NotationError::InvalidSquare(s.to_string())),
        }
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
