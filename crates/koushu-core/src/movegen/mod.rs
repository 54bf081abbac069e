//! Move generation on a bare `Board`
//!
//! Everything here is a pure function of a board value (plus facing and
//! kind). `Position` owns the reserves and the cache and calls into these.
//!
//! - `pseudo`: geometry walk for one occupied square, no check awareness
//! - `attacks`: attackers of a square and check detection
//! - `legality`: self-check filter, drop filters and promotion rules

mod attacks;
mod legality;
mod pseudo;

pub use attacks::{attackers_of, is_in_check};
pub use legality::{
    check_promotion, drop_candidates, has_legal_board_move, is_pawn_drop_mate,
    is_promotion_eligible, is_promotion_forced, legal_board_destinations, legal_drop_destinations,
};
pub use pseudo::pseudo_destinations;
