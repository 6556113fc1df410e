//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The four fixed player identities, named after the board edge they start
//! on. Turn order is clockwise: White, Grey, Black, Pink.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage backed by an array indexed by the seat
//! ordinal. Every seat is always present; there is no hashing.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::EngineError;

/// One of the four player identities on the 12x12 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// Bottom edge. Pawns move up (toward row 0).
    White = 0,
    /// Left edge. Pawns move right (toward col 11).
    Grey = 1,
    /// Top edge. Pawns move down (toward row 11).
    Black = 2,
    /// Right edge. Pawns move left (toward col 0).
    Pink = 3,
}

/// Clockwise turn order.
pub const TURN_ORDER: [Seat; 4] = [Seat::White, Seat::Grey, Seat::Black, Seat::Pink];

impl Seat {
    /// Number of seats.
    pub const COUNT: usize = 4;

    /// Seat ordinal (0-based, turn order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Seat from its ordinal.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        TURN_ORDER[index % Self::COUNT]
    }

    /// Iterate over all seats in turn order.
    pub fn all() -> impl Iterator<Item = Seat> {
        TURN_ORDER.into_iter()
    }

    /// The seat `steps` places clockwise from this one.
    #[must_use]
    pub const fn clockwise(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    /// True for seats whose pawns advance along rows (White, Black).
    #[must_use]
    pub const fn moves_along_rows(self) -> bool {
        matches!(self, Seat::White | Seat::Black)
    }

    /// Upper-case name, as used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Seat::White => "WHITE",
            Seat::Grey => "GREY",
            Seat::Black => "BLACK",
            Seat::Pink => "PINK",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Seat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WHITE" => Ok(Seat::White),
            "GREY" | "GRAY" => Ok(Seat::Grey),
            "BLACK" => Ok(Seat::Black),
            "PINK" => Ok(Seat::Pink),
            _ => Err(EngineError::UnknownSeat(s.to_string())),
        }
    }
}

/// A small set of seats, stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatSet(u8);

impl SeatSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from an iterator of seats.
    pub fn from_seats(seats: impl IntoIterator<Item = Seat>) -> Self {
        let mut set = Self::empty();
        for seat in seats {
            set.insert(seat);
        }
        set
    }

    /// Add a seat.
    pub fn insert(&mut self, seat: Seat) {
        self.0 |= 1 << seat.index();
    }

    /// Remove a seat.
    pub fn remove(&mut self, seat: Seat) {
        self.0 &= !(1 << seat.index());
    }

    /// Membership test.
    #[must_use]
    pub const fn contains(self, seat: Seat) -> bool {
        self.0 & (1 << seat.index()) != 0
    }

    /// Number of seats in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no seat is in the set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in turn order.
    pub fn iter(self) -> impl Iterator<Item = Seat> {
        Seat::all().filter(move |s| self.contains(*s))
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `[T; 4]`, so every seat always has an entry.
///
/// ## Example
///
/// ```
/// use quad_duel::core::{Seat, SeatMap};
///
/// let mut queens: SeatMap<u8> = SeatMap::with_value(1);
/// queens[Seat::Grey] = 3;
/// assert_eq!(queens[Seat::Grey], 3);
/// assert_eq!(queens[Seat::Pink], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; Seat::COUNT],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: TURN_ORDER.map(factory),
        }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        TURN_ORDER.iter().copied().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        TURN_ORDER.iter().copied().zip(self.data.iter_mut())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_order() {
        assert_eq!(Seat::White.clockwise(1), Seat::Grey);
        assert_eq!(Seat::Pink.clockwise(1), Seat::White);
        assert_eq!(Seat::Black.clockwise(3), Seat::Grey);
        assert_eq!(Seat::from_index(6), Seat::Black);
    }

    #[test]
    fn test_seat_parse() {
        assert_eq!("white".parse::<Seat>().unwrap(), Seat::White);
        assert_eq!(" GREY ".parse::<Seat>().unwrap(), Seat::Grey);
        assert_eq!("Pink".parse::<Seat>().unwrap(), Seat::Pink);
        assert!("green".parse::<Seat>().is_err());
        assert_eq!(format!("{}", Seat::Black), "BLACK");
    }

    #[test]
    fn test_seat_axes() {
        assert!(Seat::White.moves_along_rows());
        assert!(Seat::Black.moves_along_rows());
        assert!(!Seat::Grey.moves_along_rows());
        assert!(!Seat::Pink.moves_along_rows());
    }

    #[test]
    fn test_seat_set() {
        let mut set = SeatSet::from_seats([Seat::White, Seat::Pink]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Seat::Pink));
        assert!(!set.contains(Seat::Grey));

        set.insert(Seat::Grey);
        set.remove(Seat::White);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![Seat::Grey, Seat::Pink]);
        assert!(SeatSet::empty().is_empty());
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);
        assert_eq!(map[Seat::White], 0);
        assert_eq!(map[Seat::Grey], 10);
        assert_eq!(map[Seat::Black], 20);
        assert_eq!(map[Seat::Pink], 30);
    }

    #[test]
    fn test_seat_map_mutation_and_iter() {
        let mut map: SeatMap<i32> = SeatMap::with_value(0);
        map[Seat::Black] = 7;
        *map.get_mut(Seat::Pink) += 2;

        let pairs: Vec<_> = map.iter().map(|(s, v)| (s, *v)).collect();
        assert_eq!(
            pairs,
            vec![(Seat::White, 0), (Seat::Grey, 0), (Seat::Black, 7), (Seat::Pink, 2)]
        );
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<bool> = SeatMap::new(|s| s == Seat::Grey);
        let json = serde_json::to_string(&map).unwrap();
        let back: SeatMap<bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
