//! The 12x12 board with a lazily revalidated king cache.

use std::cell::Cell;

use super::piece::{Piece, PieceKind};
use super::seat::{Seat, SeatMap, SeatSet};
use super::square::{Square, BOARD_SIZE};

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// 12x12 grid of optional pieces.
///
/// The king cache may go stale after a raw [`Board::set`] of some other
/// square, but [`Board::find_king`] re-checks the cached square before
/// trusting it and rescans on a miss, so it never reports a square that
/// does not hold that seat's king.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
    king_cache: SeatMap<Cell<Option<Square>>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
            king_cache: SeatMap::new(|_| Cell::new(None)),
        }
    }

    /// The piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Mutable access to the piece on `sq`. Changing a piece's kind or owner
    /// through this reference bypasses the king cache; prefer [`Board::set`].
    #[inline]
    pub fn get_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.cells[sq.index()].as_mut()
    }

    /// True if `sq` holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Place (or clear) a square, returning what was there.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        let previous = std::mem::replace(&mut self.cells[sq.index()], piece);

        // Any cache entry pointing at this square is now suspect.
        for (_, cached) in self.king_cache.iter() {
            if cached.get() == Some(sq) {
                cached.set(None);
            }
        }
        if let Some(p) = piece {
            if p.is_king() {
                self.king_cache[p.owner].set(Some(sq));
            }
        }

        previous
    }

    /// Remove and return the piece on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.set(sq, None)
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.cells = [None; CELLS];
        for (_, cached) in self.king_cache.iter() {
            cached.set(None);
        }
    }

    /// Locate a seat's king, using the cache when it is still valid.
    #[must_use]
    pub fn find_king(&self, seat: Seat) -> Option<Square> {
        let cached = &self.king_cache[seat];
        if let Some(sq) = cached.get() {
            if self.holds_king_of(sq, seat) {
                return Some(sq);
            }
        }

        let found = Square::all().find(|sq| self.holds_king_of(*sq, seat));
        cached.set(found);
        found
    }

    fn holds_king_of(&self, sq: Square, seat: Seat) -> bool {
        matches!(self.get(sq), Some(p) if p.is_king() && p.owner == seat)
    }

    /// Seats whose king is on the board, in turn order.
    #[must_use]
    pub fn alive_seats(&self) -> Vec<Seat> {
        Seat::all().filter(|s| self.find_king(*s).is_some()).collect()
    }

    /// Same as [`Board::alive_seats`], as a set.
    #[must_use]
    pub fn alive_set(&self) -> SeatSet {
        SeatSet::from_seats(Seat::all().filter(|s| self.find_king(*s).is_some()))
    }

    /// Every occupied square with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Squares holding pieces owned by `seat`.
    pub fn squares_of(&self, seat: Seat) -> impl Iterator<Item = Square> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == seat).map(|(sq, _)| sq)
    }

    /// Number of `kind` pieces owned by `seat`.
    #[must_use]
    pub fn count(&self, seat: Seat, kind: PieceKind) -> usize {
        self.pieces().filter(|(_, p)| p.owner == seat && p.kind == kind).count()
    }

    /// Remove every piece owned by `seat`, returning how many were removed.
    pub fn remove_seat(&mut self, seat: Seat) -> usize {
        let squares: Vec<Square> = self.squares_of(seat).collect();
        for sq in &squares {
            self.take(*sq);
        }
        squares.len()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl std::hash::Hash for Board {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}
