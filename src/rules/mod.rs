//! Game rules: move generation, legality, turn order, sanctuary and the
//! duel transition.
//!
//! All functions operate on a [`Position`]. Functions that need to try a
//! move take `&mut Position` and restore it before returning.

pub mod policy;
pub mod position;
pub mod attacks;
pub mod movegen;
pub mod legality;
pub mod sanctuary;
pub mod turn;
pub mod duel;
pub mod repetition;

pub use policy::{rules_for, DuelRules, GameOutcome, GamePhase, RulesPolicy, StuckSeat, SurvivalRules};
pub use position::{MoveUndo, Position};
pub use attacks::{is_square_attacked, opponents_of};
pub use movegen::pseudo_moves;
pub use legality::{has_legal_move, is_checkmated, king_in_check, legal_moves_for_piece, legal_moves_for_seat};
pub use sanctuary::SanctuaryState;
pub use turn::{first_in_check, next_to_move, settle, Settled, TurnState};
pub use duel::{enter_duel, DuelOrigins};
pub use repetition::{position_key, PositionHistory, REPETITION_LIMIT};
