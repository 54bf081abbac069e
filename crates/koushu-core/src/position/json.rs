//! JSON snapshot of a position for GUI consumers

use serde::{Deserialize, Serialize};

use super::Position;
use crate::types::{Facing, PieceKind, Square};

/// 盤上の駒 1 枚
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub square: Square,
    pub owner: Facing,
    /// "P" ~ "K", promoted kinds as "+P" etc.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Board, reserves and side to move
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionSnapshot {
    /// Occupied squares only, in square order
    pub pieces: Vec<PieceSnapshot>,
    /// Reserve counts per base kind letter, zero counts omitted
    pub reserves: ReservesSnapshot,
    pub turn: Facing,
    pub ply: u32,
    pub in_check: bool,
    pub terminal: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservesSnapshot {
    pub forward: Vec<(String, u8)>,
    pub backward: Vec<(String, u8)>,
}

impl Position {
    pub fn snapshot(&self) -> PositionSnapshot {
        let pieces = self
            .board
            .pieces()
            .map(|(square, p)| PieceSnapshot { square, owner: p.facing, kind: p.kind.to_string() })
            .collect();

        let reserve_of = |facing: Facing| -> Vec<(String, u8)> {
            self.reserve(facing).iter().map(|(k, n): (PieceKind, u8)| (k.to_string(), n)).collect()
        };

        PositionSnapshot {
            pieces,
            reserves: ReservesSnapshot {
                forward: reserve_of(Facing::Forward),
                backward: reserve_of(Facing::Backward),
            },
            turn: self.side_to_move,
            ply: self.ply,
            in_check: self.is_in_check(),
            terminal: self.is_terminal(),
        }
    }

    /// `snapshot()` serialized with serde_json
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_startpos() {
        let snap = Position::startpos().snapshot();
        assert_eq!(snap.pieces.len(), 40);
        assert_eq!(snap.turn, Facing::Forward);
        assert!(snap.reserves.forward.is_empty());
        assert!(!snap.terminal);

        let king = snap.pieces.iter().find(|p| p.square.to_string() == "5i").unwrap();
        assert_eq!(king.kind, "K");
        assert_eq!(king.owner, Facing::Forward);
    }

    #[test]
    fn test_to_json() {
        let mut pos = Position::startpos();
        for m in ["7g7f", "3c3d", "8h2b+"] {
            pos.apply_move(m.parse().unwrap()).unwrap();
        }
        let json = pos.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["turn"], "backward");
        assert_eq!(value["ply"], 4);
        assert_eq!(value["reserves"]["forward"][0][0], "B");
        assert_eq!(value["reserves"]["forward"][0][1], 1);

        let horse = value["pieces"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["square"] == "2b")
            .unwrap();
        assert_eq!(horse["type"], "+B");
        assert_eq!(horse["owner"], "forward");

        let back: PositionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos.snapshot());
    }
}
