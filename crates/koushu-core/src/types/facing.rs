//! 手番・駒の向き（Facing）

use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;

/// Owner of a piece and the direction it advances.
///
/// A player is identified one-to-one with a facing. `Forward` (sente) moves
/// first and advances toward rank index 0 ('a').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Facing {
    Forward = 0,
    Backward = 1,
}

impl Facing {
    /// 手番の数
    pub const NUM: usize = 2;

    pub const ALL: [Facing; 2] = [Facing::Forward, Facing::Backward];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Facing {
        match self {
            Facing::Forward => Facing::Backward,
            Facing::Backward => Facing::Forward,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Board rank delta of one step "forward" for this facing
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Facing::Forward => -1,
            Facing::Backward => 1,
        }
    }

    /// Rank as seen from this facing: 0 is the farthest rank.
    #[inline]
    pub const fn relative_rank(self, rank: u8) -> u8 {
        debug_assert!(rank < BOARD_SIZE);
        match self {
            Facing::Forward => rank,
            Facing::Backward => BOARD_SIZE - 1 - rank,
        }
    }

    /// SFEN の手番文字
    #[inline]
    pub const fn to_sfen_char(self) -> char {
        match self {
            Facing::Forward => 'b',
            Facing::Backward => 'w',
        }
    }
}

impl std::ops::Not for Facing {
    type Output = Facing;

    #[inline]
    fn not(self) -> Facing {
        self.opponent()
    }
}
