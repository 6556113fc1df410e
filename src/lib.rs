//! # quad-duel
//!
//! Rules engine and search for a four-seat chess variant that collapses
//! into a standard two-player duel once only two seats survive.
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: A `GameContext` owns everything about one game.
//!    There is no process-wide state, so a server can run many games side
//!    by side.
//!
//! 2. **Phase Policies**: What differs between the four-seat game and the
//!    duel (bounds, corners, en passant, stuck seats) is answered by a
//!    `RulesPolicy`, chosen from the position.
//!
//! 3. **Lossless Simulation**: Every applied move returns an undo record;
//!    legality checks and search apply and revert moves in place.
//!
//! ## Modules
//!
//! - `core`: Seats, squares, pieces, the board, moves, errors, RNG
//! - `rules`: Position, move generation, legality, corner sanctuary, turn
//!   order, the duel transition, repetition
//! - `search`: Greedy and iterative-deepening move pickers with deadlines
//! - `game`: The `GameContext` collaborators talk to, its config,
//!   snapshots, history

pub mod core;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, EngineError, GameRng, Move, MoveError, MoveKind, MoveRecord, Piece, PieceKind, Seat,
    SeatMap, Square,
};

pub use crate::rules::{GameOutcome, GamePhase, Position, RulesPolicy, TurnState};

pub use crate::search::{DuelAsymmetry, SearchConfig, SearchPolicy, SearchStats, Searcher};

pub use crate::game::{
    CastlingRights, Elimination, EliminationReason, EngineConfig, GameContext, MoveHistory, MoveOutcome, StateSnapshot,
};
