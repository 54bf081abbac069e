//! 持ち駒（Reserve）

use serde::{Deserialize, Serialize};

use super::PieceKind;

/// Captured pieces held by one player, counted per base kind.
///
/// Slots follow the base-kind discriminants, `P L N S G B R K`. A captured
/// king is counted so material stays whole, but it can never be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reserve {
    counts: [u8; 8],
}

/// Count slot of a base kind, `None` for promoted kinds
#[inline]
const fn slot(kind: PieceKind) -> Option<usize> {
    if kind.is_promoted() { None } else { Some(kind.index()) }
}

impl Reserve {
    pub const fn new() -> Self {
        Reserve { counts: [0; 8] }
    }

    /// 持ち駒の枚数（成駒は常に 0）
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u8 {
        slot(kind).map_or(0, |i| self.counts[i])
    }

    /// Add one captured piece, demoted first
    #[inline]
    pub fn add(&mut self, kind: PieceKind) {
        if let Some(i) = slot(kind.unpromote()) {
            self.counts[i] += 1;
        }
    }

    /// Take one piece out for a drop; returns false if none was held or the
    /// kind cannot be dropped
    #[inline]
    pub fn remove(&mut self, kind: PieceKind) -> bool {
        match kind.reserve_index() {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn set(&mut self, kind: PieceKind, count: u8) {
        if let Some(i) = slot(kind) {
            self.counts[i] = count;
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// (kind, count) pairs with a non-zero count, king last
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        PieceKind::ALL
            .iter()
            .zip(self.counts.iter())
            .filter(|&(_, &n)| n > 0)
            .map(|(&k, &n)| (k, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_add_remove() {
        let mut r = Reserve::new();
        assert!(r.is_empty());

        r.add(PieceKind::Dragon);
        assert_eq!(r.count(PieceKind::Rook), 1);
        assert_eq!(r.count(PieceKind::Dragon), 0);

        r.add(PieceKind::Pawn);
        r.add(PieceKind::ProPawn);
        assert_eq!(r.count(PieceKind::Pawn), 2);

        assert!(r.remove(PieceKind::Pawn));
        assert!(r.remove(PieceKind::Pawn));
        assert!(!r.remove(PieceKind::Pawn));
        assert!(!r.remove(PieceKind::King));

        assert_eq!(r.iter().collect::<Vec<_>>(), vec![(PieceKind::Rook, 1)]);
    }

    #[test]
    fn test_reserve_holds_king_without_drop() {
        let mut r = Reserve::new();
        r.add(PieceKind::King);
        assert!(!r.is_empty());
        assert_eq!(r.count(PieceKind::King), 1);
        assert!(!r.remove(PieceKind::King));
        assert_eq!(r.count(PieceKind::King), 1);

        r.add(PieceKind::Horse);
        assert_eq!(
            r.iter().collect::<Vec<_>>(),
            vec![(PieceKind::Bishop, 1), (PieceKind::King, 1)]
        );
    }
}
