//! SFEN set-up and export
//!
//! Board ranks are listed from rank a to rank i, each from file 9 to file 1.
//! Reserves are written Forward first, in the order `R B G S N L P`. A
//! captured king, which only arises after a king capture, is written first
//! as `K`.

use super::Position;
use crate::board::Board;
use crate::error::SfenError;
use crate::types::{BOARD_SIZE, Facing, Piece, PieceKind, Reserve, Square};

/// 平手初期局面
pub const SFEN_STARTPOS: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// Reserve kinds in SFEN output order
const SFEN_RESERVE_ORDER: [PieceKind; 8] = [
    PieceKind::King,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
    PieceKind::Pawn,
];

impl Position {
    /// Set up a position from an SFEN string. The ply field is optional.
    pub fn from_sfen(sfen: &str) -> Result<Position, SfenError> {
        let mut parts = sfen.split_whitespace();
        let board_part = parts.next().ok_or_else(|| SfenError::Board("missing".into()))?;
        let side_part = parts.next().ok_or_else(|| SfenError::SideToMove("missing".into()))?;
        let reserve_part = parts.next().ok_or_else(|| SfenError::Reserve("missing".into()))?;

        let board = parse_board(board_part)?;
        let side_to_move = match side_part {
            "b" => Facing::Forward,
            "w" => Facing::Backward,
            other => return Err(SfenError::SideToMove(other.to_string())),
        };
        let reserves = parse_reserves(reserve_part)?;

        let mut pos = Position::new(board, reserves, side_to_move);
        if let Some(ply) = parts.next() {
            pos.ply = ply.parse().map_err(|_| SfenError::Ply(ply.to_string()))?;
        }
        if let Some(extra) = parts.next() {
            return Err(SfenError::Ply(format!("unexpected trailing field {extra:?}")));
        }
        Ok(pos)
    }

    pub fn to_sfen(&self) -> String {
        let mut out = String::new();
        for rank in 0..BOARD_SIZE {
            if rank > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for file in (0..BOARD_SIZE).rev() {
                match self.board.piece_on(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push_str(&piece.to_sfen());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }

        out.push(' ');
        out.push(self.side_to_move.to_sfen_char());
        out.push(' ');

        let mut reserves = String::new();
        for facing in Facing::ALL {
            for kind in SFEN_RESERVE_ORDER {
                let n = self.reserve(facing).count(kind);
                if n == 0 {
                    continue;
                }
                if n > 1 {
                    reserves.push_str(&n.to_string());
                }
                let c = kind.base_char();
                reserves.push(if facing == Facing::Forward { c } else { c.to_ascii_lowercase() });
            }
        }
        if reserves.is_empty() {
            reserves.push('-');
        }
        out.push_str(&reserves);
        out.push(' ');
        out.push_str(&self.ply.to_string());
        out
    }
}

fn parse_board(s: &str) -> Result<Board, SfenError> {
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(SfenError::Board(format!("expected 9 ranks, got {}", rows.len())));
    }

    let mut board = Board::empty();
    for (rank, row) in rows.iter().enumerate() {
        // file index counts down from 9 (index 8) to 1 (index 0)
        let mut filled: u8 = 0;
        let mut promoted = false;
        for c in row.chars() {
            if filled >= BOARD_SIZE {
                return Err(SfenError::Board(format!("rank {} is too long", rank + 1)));
            }
            match c {
                '1'..='9' if !promoted => {
                    filled += c as u8 - b'0';
                    if filled > BOARD_SIZE {
                        return Err(SfenError::Board(format!("rank {} is too long", rank + 1)));
                    }
                }
                '+' if !promoted => promoted = true,
                _ => {
                    let piece = Piece::from_sfen_char(c)
                        .map_err(|e| SfenError::Board(e.to_string()))?;
                    let piece = if promoted {
                        if !piece.kind.can_promote() {
                            return Err(SfenError::Board(format!("{c} cannot be promoted")));
                        }
                        piece.promoted()
                    } else {
                        piece
                    };
                    board.put_piece(Square::new(BOARD_SIZE - 1 - filled, rank as u8), piece);
                    filled += 1;
                    promoted = false;
                }
            }
        }
        if promoted || filled != BOARD_SIZE {
            return Err(SfenError::Board(format!("rank {} is incomplete", rank + 1)));
        }
    }
    Ok(board)
}

fn parse_reserves(s: &str) -> Result<[Reserve; Facing::NUM], SfenError> {
    let mut reserves = [Reserve::new(); Facing::NUM];
    if s == "-" {
        return Ok(reserves);
    }

    let mut count: u32 = 0;
    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            count = count * 10 + d;
            if count > 18 {
                return Err(SfenError::Reserve(format!("count too large in {s:?}")));
            }
            continue;
        }
        let piece = Piece::from_sfen_char(c).map_err(|e| SfenError::Reserve(e.to_string()))?;
        let n = if count == 0 { 1 } else { count };
        let held: u32 = reserves.iter().map(|r| r.count(piece.kind) as u32).sum();
        if held + n > piece.kind.material_count() as u32 {
            return Err(SfenError::Reserve(format!(
                "{} {c} in reserve exceeds a full set",
                held + n
            )));
        }
        let reserve = &mut reserves[piece.facing.index()];
        reserve.set(piece.kind, reserve.count(piece.kind) + n as u8);
        count = 0;
    }
    if count != 0 {
        return Err(SfenError::Reserve(format!("dangling count in {s:?}")));
    }
    Ok(reserves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_sfen() {
        let pos = Position::from_sfen(SFEN_STARTPOS).unwrap();
        assert_eq!(pos, Position::startpos());
        assert_eq!(pos.to_sfen(), SFEN_STARTPOS);
    }

    #[test]
    fn test_sfen_round_trip_with_reserves() {
        let sfen = "ln1g1g1nl/1r1sk2s1/p1pppp1pp/6p2/1p7/2P6/PP1PPPPPP/7R1/LNSGKGSNL w Bb 10";
        let pos = Position::from_sfen(sfen).unwrap();
        assert_eq!(pos.side_to_move(), Facing::Backward);
        assert_eq!(pos.ply(), 10);
        assert_eq!(pos.reserve(Facing::Forward).count(PieceKind::Bishop), 1);
        assert_eq!(pos.reserve(Facing::Backward).count(PieceKind::Bishop), 1);
        assert_eq!(pos.to_sfen(), sfen);
    }

    #[test]
    fn test_sfen_promoted_and_counts() {
        let sfen = "4k4/9/4+P4/9/9/9/9/9/4K4 b 2P3p 1";
        let pos = Position::from_sfen(sfen).unwrap();
        let p = pos.piece_on("5c".parse().unwrap()).unwrap();
        assert_eq!(p.kind, PieceKind::ProPawn);
        assert_eq!(pos.reserve(Facing::Forward).count(PieceKind::Pawn), 2);
        assert_eq!(pos.reserve(Facing::Backward).count(PieceKind::Pawn), 3);
        assert_eq!(pos.to_sfen(), sfen);
    }

    #[test]
    fn test_sfen_reserve_at_full_set() {
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 10P8P2R 1").unwrap();
        assert_eq!(pos.reserve(Facing::Forward).count(PieceKind::Pawn), 18);
        assert_eq!(pos.reserve(Facing::Forward).count(PieceKind::Rook), 2);
    }

    #[test]
    fn test_sfen_held_king_round_trip() {
        let sfen = "9/9/9/9/9/9/9/9/4K4 w Kp 3";
        let pos = Position::from_sfen(sfen).unwrap();
        assert_eq!(pos.reserve(Facing::Forward).count(PieceKind::King), 1);
        assert_eq!(pos.to_sfen(), sfen);
        assert!(pos.legal_drops(PieceKind::King, Facing::Forward).is_empty());
    }

    #[test]
    fn test_sfen_without_ply() {
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 w -").unwrap();
        assert_eq!(pos.ply(), 1);
        assert_eq!(pos.side_to_move(), Facing::Backward);
    }

    #[test]
    fn test_sfen_errors() {
        assert!(matches!(Position::from_sfen(""), Err(SfenError::Board(_))));
        assert!(matches!(
            Position::from_sfen("9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K3 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K5 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4+G4 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 x - 1"),
            Err(SfenError::SideToMove(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 3K 1"),
            Err(SfenError::Reserve(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 2R1r 1"),
            Err(SfenError::Reserve(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 10P9P 1"),
            Err(SfenError::Reserve(_))
        ));
        let repeated = format!("4k4/9/9/9/9/9/9/9/4K4 b {} 1", "18P".repeat(15));
        assert!(matches!(Position::from_sfen(&repeated), Err(SfenError::Reserve(_))));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 2 1"),
            Err(SfenError::Reserve(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b - x"),
            Err(SfenError::Ply(_))
        ));
    }
}
