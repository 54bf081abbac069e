//! Basic value types
//!
//! ```text
//! Facing
//!   ↓
//! Square
//!   ↓
//! PieceKind
//!   ↓
//! Piece ← Move
//!   ↓
//! Reserve
//! ```

mod facing;
mod moves;
mod piece;
mod piece_kind;
mod reserve;
mod square;

pub use facing::Facing;
pub use moves::{Move, MoveVec};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use reserve::Reserve;
pub use square::Square;

/// Number of files and ranks
pub const BOARD_SIZE: u8 = 9;
