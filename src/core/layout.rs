//! Starting layouts: the four-seat opening and the standard duel position.

use super::board::Board;
use super::piece::{Piece, PieceKind};
use super::seat::Seat;
use super::square::{Square, ARENA_MAX, ARENA_MIN};

/// Back-rank order from index 2 to index 9 along each seat's home line.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Home lines of a seat in the four-seat opening: (back line, pawn line).
///
/// For White/Black these are rows, for Grey/Pink columns.
#[must_use]
pub const fn home_lines(seat: Seat) -> (u8, u8) {
    match seat {
        Seat::White => (11, 10),
        Seat::Black => (0, 1),
        Seat::Grey => (0, 1),
        Seat::Pink => (11, 10),
    }
}

/// Square on `line` at position `along`, oriented for `seat`'s axis.
fn on_line(seat: Seat, line: u8, along: u8) -> Square {
    if seat.moves_along_rows() {
        Square { row: line, col: along }
    } else {
        Square { row: along, col: line }
    }
}

fn place_army(board: &mut Board, seat: Seat, back: u8, pawns: u8) {
    for (i, kind) in BACK_RANK.iter().enumerate() {
        let along = ARENA_MIN + i as u8;
        board.set(on_line(seat, back, along), Some(Piece::new(*kind, seat)));
        board.set(on_line(seat, pawns, along), Some(Piece::new(PieceKind::Pawn, seat)));
    }
}

/// The four-seat opening: each seat's army on its outer edge strip.
#[must_use]
pub fn survival_start() -> Board {
    let mut board = Board::new();
    for seat in Seat::all() {
        let (back, pawns) = home_lines(seat);
        place_army(&mut board, seat, back, pawns);
    }
    board
}

/// Standard chess start inside the arena: White at the bottom (row 9),
/// Black at the top (row 2).
#[must_use]
pub fn duel_start() -> Board {
    let mut board = Board::new();
    place_army(&mut board, Seat::White, ARENA_MAX, ARENA_MAX - 1);
    place_army(&mut board, Seat::Black, ARENA_MIN, ARENA_MIN + 1);
    board
}
