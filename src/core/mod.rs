//! Core types: seats, squares, pieces, the board, moves, errors, RNG.
//!
//! Everything here is phase-agnostic. The rules layer decides what a move
//! may do; these types only describe positions and moves.

pub mod seat;
pub mod square;
pub mod piece;
pub mod board;
pub mod layout;
pub mod moves;
pub mod error;
pub mod rng;

pub use seat::{Seat, SeatMap, SeatSet, TURN_ORDER};
pub use square::{in_home_corner, Bounds, Square, ARENA_MAX, ARENA_MIN, BOARD_SIZE};
pub use piece::{Piece, PieceKind};
pub use board::Board;
pub use moves::{Move, MoveKind, MoveList, MoveRecord};
pub use error::{EngineError, MoveError};
pub use rng::GameRng;
