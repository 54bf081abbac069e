//! # koushu-core
//!
//! Position and legality engine for shogi.
//!
//! ## Module layout
//!
//! - `types`: value types (Facing, Square, PieceKind, Piece, Move, Reserve)
//! - `bitboard`: 81-bit square sets used for destination sets
//! - `board`: the 9x9 grid as a copyable value
//! - `geometry`: declarative movement table per piece kind
//! - `movegen`: pseudo-moves, check detection, legality filter and drops
//! - `position`: the mutable aggregate, lazy legal-move cache and set-up
//! - `rules`: rule switches that differ between rule sets
//! - `error`: error types shared by notation, set-up and move application
//!
//! ```
//! use koushu_core::{Move, Position};
//!
//! let mut pos = Position::startpos();
//! let mv: Move = "7g7f".parse().unwrap();
//! assert!(pos.is_legal(&mv));
//! pos.apply_move(mv).unwrap();
//! assert!(!pos.is_terminal());
//! ```

pub mod bitboard;
pub mod board;
pub mod error;
pub mod geometry;
pub mod movegen;
pub mod position;
pub mod rules;
pub mod types;

pub use bitboard::Bitboard;
pub use board::Board;
pub use error::{MoveError, NotationError, SfenError};
pub use position::{Position, PositionSnapshot, SFEN_STARTPOS};
pub use rules::Rules;
pub use types::{Facing, Move, MoveVec, Piece, PieceKind, Reserve, Square};
