//! 駒の利きの定義表
//!
//! Movement is declared once per kind from the owner's point of view:
//! `rank > 0` is toward the opponent, `file` is sideways. Only the rank is
//! reflected for the Backward facing; every table is left/right symmetric.

use crate::types::{Facing, PieceKind};

/// One movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub file: i8,
    pub rank: i8,
    /// Repeat the step until blocked
    pub slide: bool,
}

impl Step {
    const fn one(file: i8, rank: i8) -> Step {
        Step { file, rank, slide: false }
    }

    const fn ray(file: i8, rank: i8) -> Step {
        Step { file, rank, slide: true }
    }

    /// Board delta `(file, rank)` for a piece of `facing`
    #[inline]
    pub const fn delta(self, facing: Facing) -> (i8, i8) {
        (self.file, self.rank * facing.forward_step())
    }
}

const KING: [Step; 8] = [
    Step::one(-1, 1),
    Step::one(0, 1),
    Step::one(1, 1),
    Step::one(-1, 0),
    Step::one(1, 0),
    Step::one(-1, -1),
    Step::one(0, -1),
    Step::one(1, -1),
];

const GOLD: [Step; 6] = [
    Step::one(-1, 1),
    Step::one(0, 1),
    Step::one(1, 1),
    Step::one(-1, 0),
    Step::one(1, 0),
    Step::one(0, -1),
];

const SILVER: [Step; 5] = [
    Step::one(-1, 1),
    Step::one(0, 1),
    Step::one(1, 1),
    Step::one(-1, -1),
    Step::one(1, -1),
];

const PAWN: [Step; 1] = [Step::one(0, 1)];

const KNIGHT: [Step; 2] = [Step::one(-1, 2), Step::one(1, 2)];

const LANCE: [Step; 1] = [Step::ray(0, 1)];

const ROOK: [Step; 4] = [Step::ray(0, 1), Step::ray(0, -1), Step::ray(-1, 0), Step::ray(1, 0)];

const BISHOP: [Step; 4] = [Step::ray(-1, 1), Step::ray(1, 1), Step::ray(-1, -1), Step::ray(1, -1)];

const DRAGON: [Step; 8] = [
    Step::ray(0, 1),
    Step::ray(0, -1),
    Step::ray(-1, 0),
    Step::ray(1, 0),
    Step::one(-1, 1),
    Step::one(1, 1),
    Step::one(-1, -1),
    Step::one(1, -1),
];

const HORSE: [Step; 8] = [
    Step::ray(-1, 1),
    Step::ray(1, 1),
    Step::ray(-1, -1),
    Step::ray(1, -1),
    Step::one(0, 1),
    Step::one(0, -1),
    Step::one(-1, 0),
    Step::one(1, 0),
];

/// Movement directions of `kind`
pub const fn steps(kind: PieceKind) -> &'static [Step] {
    match kind {
        PieceKind::King => &KING,
        PieceKind::Gold
        | PieceKind::ProSilver
        | PieceKind::ProKnight
        | PieceKind::ProLance
        | PieceKind::ProPawn => &GOLD,
        PieceKind::Silver => &SILVER,
        PieceKind::Pawn => &PAWN,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Lance => &LANCE,
        PieceKind::Rook => &ROOK,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Dragon => &DRAGON,
        PieceKind::Horse => &HORSE,
    }
}
