//! Board representation
//!
//! `Board` is a plain `Copy` value: 81 optional pieces. Hypothetical moves
//! are simulated on a copy, so nothing the filter does can leak into the
//! live position.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::types::{BOARD_SIZE, Facing, Piece, PieceKind, Square};

/// 9x9 grid, indexed by `Square::index`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::NUM],
}

/// Back rank from file 1 to file 9
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Lance,
    PieceKind::Knight,
    PieceKind::Silver,
    PieceKind::Gold,
    PieceKind::King,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
];

impl Board {
    pub const fn empty() -> Self {
        Board { squares: [None; Square::NUM] }
    }

    /// Standard opening array.
    ///
    /// Forward occupies ranks g-i with the bishop on 8h and the rook on 2h;
    /// Backward mirrors it on ranks a-c (bishop 2b, rook 8b).
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for facing in Facing::ALL {
            let back = facing.relative_rank(8);
            let second = facing.relative_rank(7);
            let pawns = facing.relative_rank(6);
            for file in 0..BOARD_SIZE {
                board.put_piece(Square::new(file, back), Piece::new(BACK_RANK[file as usize], facing));
                board.put_piece(Square::new(file, pawns), Piece::new(PieceKind::Pawn, facing));
            }
            // Seen from its owner, the bishop sits on the left and the rook on the right.
            let (bishop_file, rook_file) = match facing {
                Facing::Forward => (7, 1),
                Facing::Backward => (1, 7),
            };
            board.put_piece(Square::new(bishop_file, second), Piece::new(PieceKind::Bishop, facing));
            board.put_piece(Square::new(rook_file, second), Piece::new(PieceKind::Rook, facing));
        }
        board
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Place a piece, returning whatever stood there before
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Every occupied square with its piece, in square order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|p| (sq, p)))
    }

    /// Squares holding pieces of `facing`
    pub fn occupied(&self, facing: Facing) -> Bitboard {
        self.pieces().filter(|(_, p)| p.facing == facing).map(|(sq, _)| sq).collect()
    }

    /// Squares holding a king of `facing` (normally zero or one)
    pub fn king_squares(&self, facing: Facing) -> Bitboard {
        let king = Piece::new(PieceKind::King, facing);
        self.pieces().filter(|&(_, p)| p == king).map(|(sq, _)| sq).collect()
    }

    /// 二歩判定用: unpromoted pawn of `facing` somewhere in `file`
    pub fn has_pawn_in_file(&self, facing: Facing, file: u8) -> bool {
        let pawn = Piece::new(PieceKind::Pawn, facing);
        (0..BOARD_SIZE).any(|rank| self.piece_on(Square::new(file, rank)) == Some(pawn))
    }

    /// Number of pieces on the board whose base kind is `kind`
    pub fn count_base_kind(&self, kind: PieceKind) -> usize {
        self.pieces().filter(|(_, p)| p.kind.unpromote() == kind).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Text diagram, file 9 on the left and rank a at the top.
///
/// Forward pieces print as ` P`, Backward as `vP`, promoted kinds use their
/// `+` form and empty squares ` .`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  9  8  7  6  5  4  3  2  1")?;
        for rank in 0..BOARD_SIZE {
            write!(f, " ")?;
            for file in (0..BOARD_SIZE).rev() {
                match self.piece_on(Square::new(file, rank)) {
                    Some(p) => {
                        let mark = if p.facing == Facing::Backward { 'v' } else { ' ' };
                        if p.kind.is_promoted() {
                            write!(f, "{mark}{:<2}", p.kind.to_string())?;
                        } else {
                            write!(f, "{mark}{} ", p.kind.base_char())?;
                        }
                    }
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f, " {}", (b'a' + rank) as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board\n{self}")
    }
}
