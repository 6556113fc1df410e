//! Game lifecycle: the context collaborators talk to, its serializable
//! snapshot, and the binary history export.

pub mod config;
pub mod context;
pub mod history;
pub mod snapshot;

pub use config::EngineConfig;
pub use context::{CastlingRights, GameContext, MoveOutcome};
pub use history::MoveHistory;
pub use snapshot::{Elimination, EliminationReason, PlacedPiece, StateSnapshot};
