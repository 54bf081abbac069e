//! Error types
//!
//! Malformed input (notation, SFEN) and rejected moves are recoverable and
//! reported through these enums. Out-of-range coordinates handed to the
//! engine directly are contract violations and are caught by `debug_assert!`.

use crate::types::{PieceKind, Square};

/// Error while parsing squares, piece codes or moves
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid file character: {0:?}")]
    InvalidFile(char),

    #[error("invalid rank character: {0:?}")]
    InvalidRank(char),

    #[error("invalid piece character: {0:?}")]
    InvalidPiece(char),

    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0:?}")]
    InvalidMove(String),
}

/// Error while setting up a position from SFEN
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SfenError {
    #[error("invalid board: {0}")]
    Board(String),

    #[error("invalid side to move: {0}")]
    SideToMove(String),

    #[error("invalid reserve: {0}")]
    Reserve(String),

    #[error("invalid ply: {0}")]
    Ply(String),
}

/// Reason a move was rejected by `Position::check_move` / `apply_move`
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySource(Square),

    #[error("piece on {0} does not belong to the side to move")]
    NotYourPiece(Square),

    #[error("no {0:?} in reserve")]
    NotInReserve(PieceKind),

    #[error("{0:?} cannot be dropped")]
    NotDroppable(PieceKind),

    #[error("promotion is not allowed for this move")]
    PromotionNotAllowed,

    #[error("promotion is mandatory for this move")]
    PromotionRequired,

    #[error("{to} is not a legal destination")]
    IllegalDestination { to: Square },
}
