//! Rule switches

use serde::{Deserialize, Serialize};

/// Rules that differ between rule sets.
///
/// The default is the classic behaviour of the engine: a pawn drop that
/// delivers mate is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Reject pawn drops that checkmate (打ち歩詰め)
    pub forbid_pawn_drop_mate: bool,
}

impl Rules {
    /// Tournament rules: pawn-drop mate is illegal
    pub const fn standard() -> Self {
        Rules { forbid_pawn_drop_mate: true }
    }
}
