//! Attack detection.
//!
//! Walks outward from the target square: pawn geometry per attacking seat,
//! knight offsets, the eight slider rays and the adjacent squares for
//! kings. The target itself may be a corner square; corners only block a
//! ray when they lie strictly between attacker and target.

use crate::core::{PieceKind, Seat, SeatSet, Square};

use super::position::Position;

pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// All eight king directions.
pub fn king_steps() -> impl Iterator<Item = (i32, i32)> {
    ORTHOGONAL.into_iter().chain(DIAGONAL)
}

/// Is `target` attacked by any piece owned by a seat in `attackers`?
#[must_use]
pub fn is_square_attacked(position: &Position, target: Square, attackers: SeatSet) -> bool {
    if attackers.is_empty() {
        return false;
    }
    let board = &position.board;
    let hostile = |sq: Square, kinds: &[PieceKind]| -> bool {
        matches!(board.get(sq), Some(p) if attackers.contains(p.owner) && kinds.contains(&p.kind))
    };

    // Pawns: a pawn on `target - forward ± side` hits `target`.
    for seat in attackers.iter() {
        let (fr, fc) = position.pawn_forward(seat);
        for side in [-1, 1] {
            let (dr, dc) = if seat.moves_along_rows() { (fr, side) } else { (side, fc) };
            if let Some(from) = target.offset(-dr, -dc) {
                if matches!(board.get(from), Some(p) if p.owner == seat && p.kind == PieceKind::Pawn) {
                    return true;
                }
            }
        }
    }

    if KNIGHT_JUMPS
        .iter()
        .filter_map(|(dr, dc)| target.offset(*dr, *dc))
        .any(|sq| hostile(sq, [PieceKind::Knight].as_slice()))
    {
        return true;
    }

    if king_steps()
        .filter_map(|(dr, dc)| target.offset(dr, dc))
        .any(|sq| hostile(sq, [PieceKind::King].as_slice()))
    {
        return true;
    }

    let rays = [
        (&ORTHOGONAL, [PieceKind::Rook, PieceKind::Queen]),
        (&DIAGONAL, [PieceKind::Bishop, PieceKind::Queen]),
    ];
    for (directions, sliders) in rays {
        for (dr, dc) in directions.iter().copied() {
            if let Some(sq) = first_occupant(position, target, dr, dc) {
                if hostile(sq, sliders.as_slice()) {
                    return true;
                }
            }
        }
    }

    false
}

/// First occupied square along a ray, stopping at corners and the edge.
fn first_occupant(position: &Position, from: Square, dr: i32, dc: i32) -> Option<Square> {
    let mut current = from;
    while let Some(next) = current.offset(dr, dc) {
        if next.is_corner() {
            return None;
        }
        if !position.board.is_empty(next) {
            return Some(next);
        }
        current = next;
    }
    None
}

/// Seats that can attack `seat`: every other living seat.
#[must_use]
pub fn opponents_of(position: &Position, seat: Seat) -> SeatSet {
    let mut set = position.board.alive_set();
    set.remove(seat);
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Piece};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn position_with(pieces: &[(i32, i32, PieceKind, Seat)]) -> Position {
        let mut board = Board::new();
        for (r, c, kind, seat) in pieces {
            board.set(sq(*r, *c), Some(Piece::new(*kind, *seat)));
        }
        Position::from_board(board, false)
    }

    fn only(seat: Seat) -> SeatSet {
        SeatSet::from_seats([seat])
    }

    #[test]
    fn test_rook_attacks_into_corner() {
        let position = position_with(&[(11, 5, PieceKind::Rook, Seat::Black)]);
        assert!(is_square_attacked(&position, sq(11, 1), only(Seat::Black)));
        assert!(!is_square_attacked(&position, sq(11, 1), only(Seat::Grey)));
    }

    #[test]
    fn test_corner_blocks_ray() {
        let position = position_with(&[(2, 0, PieceKind::Rook, Seat::Black)]);
        assert!(is_square_attacked(&position, sq(1, 0), only(Seat::Black)));
        // (1,0) lies between the rook and (0,0).
        assert!(!is_square_attacked(&position, sq(0, 0), only(Seat::Black)));
    }

    #[test]
    fn test_blockers_stop_rays() {
        let position = position_with(&[
            (5, 2, PieceKind::Queen, Seat::Pink),
            (5, 4, PieceKind::Pawn, Seat::White),
        ]);
        assert!(is_square_attacked(&position, sq(5, 4), only(Seat::Pink)));
        assert!(!is_square_attacked(&position, sq(5, 6), only(Seat::Pink)));
        assert!(is_square_attacked(&position, sq(8, 5), only(Seat::Pink)));
    }

    #[test]
    fn test_pawn_geometry_per_seat() {
        let position = position_with(&[
            (6, 6, PieceKind::Pawn, Seat::White),
            (6, 2, PieceKind::Pawn, Seat::Grey),
        ]);
        // White captures toward row 5.
        assert!(is_square_attacked(&position, sq(5, 5), only(Seat::White)));
        assert!(is_square_attacked(&position, sq(5, 7), only(Seat::White)));
        assert!(!is_square_attacked(&position, sq(7, 5), only(Seat::White)));
        // Grey captures toward col 3.
        assert!(is_square_attacked(&position, sq(5, 3), only(Seat::Grey)));
        assert!(is_square_attacked(&position, sq(7, 3), only(Seat::Grey)));
        assert!(!is_square_attacked(&position, sq(5, 1), only(Seat::Grey)));
    }

    #[test]
    fn test_knight_and_king() {
        let position = position_with(&[
            (4, 4, PieceKind::Knight, Seat::Black),
            (8, 8, PieceKind::King, Seat::Pink),
        ]);
        assert!(is_square_attacked(&position, sq(6, 5), only(Seat::Black)));
        assert!(!is_square_attacked(&position, sq(6, 6), only(Seat::Black)));
        assert!(is_square_attacked(&position, sq(9, 9), only(Seat::Pink)));
        assert!(!is_square_attacked(&position, sq(10, 10), only(Seat::Pink)));
    }

    #[test]
    fn test_opponents_are_living_others() {
        let position = Position::opening();
        let set = opponents_of(&position, Seat::Grey);
        assert_eq!(set.len(), 3);
        assert!(!set.contains(Seat::Grey));
    }
}
