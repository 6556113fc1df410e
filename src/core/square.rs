//! Board geometry: squares, the inner arena, and the corner sanctuaries.

use serde::{Deserialize, Serialize};

use super::seat::Seat;

/// Side length of the full board.
pub const BOARD_SIZE: usize = 12;

/// First row/column of the centered 8x8 arena.
pub const ARENA_MIN: u8 = 2;

/// Last row/column of the centered 8x8 arena.
pub const ARENA_MAX: u8 = 9;

/// A board square, `row` 0 at the top, `col` 0 on the left.
///
/// Construct through [`Square::new`] or [`Square::offset`]; both reject
/// coordinates outside the 12x12 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square, or `None` if it lies outside the board.
    #[must_use]
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square `(dr, dc)` away, or `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::new(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// Flat index `row * 12 + col`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inside the centered 8x8 arena.
    #[inline]
    #[must_use]
    pub const fn in_arena(self) -> bool {
        self.row >= ARENA_MIN && self.row <= ARENA_MAX && self.col >= ARENA_MIN && self.col <= ARENA_MAX
    }

    /// Inside any of the four 2x2 corner regions.
    #[inline]
    #[must_use]
    pub const fn is_corner(self) -> bool {
        let outer_row = self.row < ARENA_MIN || self.row > ARENA_MAX;
        let outer_col = self.col < ARENA_MIN || self.col > ARENA_MAX;
        outer_row && outer_col
    }

    /// The seat whose home corner contains this square, if any.
    #[must_use]
    pub fn corner_owner(self) -> Option<Seat> {
        if !self.is_corner() {
            return None;
        }
        let bottom = self.row > ARENA_MAX;
        let right = self.col > ARENA_MAX;
        Some(match (bottom, right) {
            (true, false) => Seat::White,
            (false, false) => Seat::Grey,
            (false, true) => Seat::Black,
            (true, true) => Seat::Pink,
        })
    }

    /// Chebyshev distance to another square.
    #[must_use]
    pub fn distance(self, other: Square) -> u8 {
        let dr = (self.row as i32 - other.row as i32).unsigned_abs();
        let dc = (self.col as i32 - other.col as i32).unsigned_abs();
        dr.max(dc) as u8
    }

    /// Iterate every square of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Is `sq` inside the given seat's home corner?
#[must_use]
pub fn in_home_corner(sq: Square, seat: Seat) -> bool {
    sq.corner_owner() == Some(seat)
}

/// Rectangular region legal moves must stay inside.
///
/// The whole board in Survival; the arena once the duel locks in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: u8,
    pub max: u8,
}

impl Bounds {
    /// The full 12x12 board.
    pub const FULL: Bounds = Bounds {
        min: 0,
        max: BOARD_SIZE as u8 - 1,
    };

    /// The 8x8 arena.
    pub const ARENA: Bounds = Bounds {
        min: ARENA_MIN,
        max: ARENA_MAX,
    };

    /// Square `(dr, dc)` from `sq`, if it stays inside these bounds.
    #[inline]
    #[must_use]
    pub fn step(self, sq: Square, dr: i32, dc: i32) -> Option<Square> {
        sq.offset(dr, dc).filter(|t| self.contains(*t))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        sq.row >= self.min && sq.row <= self.max && sq.col >= self.min && sq.col <= self.max
    }
}
