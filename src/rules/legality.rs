//! Legal move filtering and check detection.
//!
//! A pseudo-legal move is legal when, after applying it, the mover's king
//! is not in check. The move is applied to the position and reverted
//! through its undo record, so callers hand in a `&mut Position` that comes
//! back unchanged.

use crate::core::{Move, MoveList, Seat, Square};

use super::attacks::{is_square_attacked, opponents_of};
use super::movegen::pseudo_moves;
use super::position::Position;
use super::sanctuary;

/// Is `seat`'s king attacked by another living seat?
///
/// Always false for a sanctuary-immune seat and for a seat without a king.
#[must_use]
pub fn king_in_check(position: &Position, seat: Seat) -> bool {
    if sanctuary::is_immune(position, seat) {
        return false;
    }
    let Some(king) = position.board.find_king(seat) else {
        return false;
    };
    is_square_attacked(position, king, opponents_of(position, seat))
}

/// Would `mv` leave its mover in check?
fn leaves_own_king_safe(position: &mut Position, seat: Seat, mv: Move) -> bool {
    let undo = position.do_move(mv);
    let safe = !king_in_check(position, seat);
    position.undo_move(undo);
    safe
}

/// Legal moves of the piece on `from`, with eviction applied to the king.
pub fn legal_moves_for_piece(position: &mut Position, from: Square) -> Vec<Move> {
    let Some(piece) = position.board.get(from) else {
        return Vec::new();
    };
    let mut pseudo = MoveList::new();
    pseudo_moves(position, from, &mut pseudo);

    let seat = piece.owner;
    let mut legal: Vec<Move> = pseudo
        .into_iter()
        .filter(|mv| leaves_own_king_safe(position, seat, *mv))
        .collect();
    if piece.is_king() {
        sanctuary::apply_eviction(position, seat, &mut legal, |m| (m.from, m.to));
    }
    legal
}

/// Every legal move for `seat`, in board order.
pub fn legal_moves_for_seat(position: &mut Position, seat: Seat) -> Vec<Move> {
    let squares: Vec<Square> = position.board.squares_of(seat).collect();
    let mut legal = Vec::new();
    for from in squares {
        legal.extend(legal_moves_for_piece(position, from));
    }
    legal
}

/// Does `seat` have at least one legal move? Stops at the first one found.
pub fn has_legal_move(position: &mut Position, seat: Seat) -> bool {
    let squares: Vec<Square> = position.board.squares_of(seat).collect();
    let mut pseudo = MoveList::new();
    for from in squares {
        pseudo.clear();
        pseudo_moves(position, from, &mut pseudo);
        if pseudo.iter().any(|mv| leaves_own_king_safe(position, seat, *mv)) {
            return true;
        }
    }
    false
}

/// In check with no legal move.
pub fn is_checkmated(position: &mut Position, seat: Seat) -> bool {
    king_in_check(position, seat) && !has_legal_move(position, seat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, MoveKind, Piece, PieceKind};

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

    #[test]
    fn test_opening_move_count() {
        let mut position = Position::opening();
        let before = position.clone();
        let moves = legal_moves_for_seat(&mut position, Seat::White);
        // 8 pawns x 2 pushes, 2 knights x 2 jumps, and the queen swap.
        assert_eq!(moves.len(), 16 + 4 + 1);
        assert!(moves.iter().any(|m| m.kind == MoveKind::Swap));
        assert_eq!(position, before);
    }

    #[test]
    fn test_pinned_piece_cannot_expose_king() {
        let mut position = position_with(&[
            (9, 6, PieceKind::King, Seat::White),
            (7, 6, PieceKind::Rook, Seat::White),
            (3, 6, PieceKind::Rook, Seat::Black),
            (0, 6, PieceKind::King, Seat::Black),
        ]);
        let moves = legal_moves_for_piece(&mut position, sq(7, 6));
        assert!(moves.iter().all(|m| m.to.col == 6));
        assert!(moves.iter().any(|m| m.to == sq(3, 6)));
    }

    #[test]
    fn test_immune_king_never_in_check() {
        let mut position = position_with(&[
            (10, 2, PieceKind::King, Seat::White),
            (5, 5, PieceKind::Queen, Seat::White),
            (5, 6, PieceKind::Queen, Seat::White),
            (5, 7, PieceKind::Queen, Seat::White),
            (11, 5, PieceKind::Rook, Seat::Black),
            (0, 6, PieceKind::King, Seat::Black),
        ]);
        assert!(!king_in_check(&position, Seat::White));
        let moves = legal_moves_for_piece(&mut position, sq(10, 2));
        let into_corner = moves.iter().find(|m| m.to == sq(11, 1)).copied();
        assert!(into_corner.is_some(), "immunity makes the attacked corner square legal");

        if let Some(mv) = into_corner {
            position.do_move(mv);
        }
        assert!(position.sanctuary[Seat::White].immune);
        assert!(is_square_attacked(&position, sq(11, 1), opponents_of(&position, Seat::White)));
        assert!(!king_in_check(&position, Seat::White));
    }

    #[test]
    fn test_check_without_immunity() {
        let position = position_with(&[
            (11, 1, PieceKind::King, Seat::White),
            (11, 5, PieceKind::Rook, Seat::Black),
            (0, 6, PieceKind::King, Seat::Black),
        ]);
        assert!(king_in_check(&position, Seat::White));
    }

    #[test]
    fn test_eviction_prefers_exit() {
        let mut position = position_with(&[
            (10, 1, PieceKind::King, Seat::White),
            (5, 5, PieceKind::Queen, Seat::White),
        ]);
        // Construction already counts as the first corner entry.
        assert!(position.sanctuary[Seat::White].promoted);
        assert!(position.sanctuary[Seat::White].eviction_pending);

        let moves = legal_moves_for_piece(&mut position, sq(10, 1));
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| !m.to.is_corner()));
    }

    #[test]
    fn test_checkmate_detection() {
        // Two rooks mate the duel king on the back rank.
        let mut board = Board::new();
        board.set(sq(9, 6), Some(Piece::new(PieceKind::King, Seat::White)));
        board.set(sq(9, 2), Some(Piece::new(PieceKind::Rook, Seat::Black)));
        board.set(sq(8, 3), Some(Piece::new(PieceKind::Rook, Seat::Black)));
        board.set(sq(2, 6), Some(Piece::new(PieceKind::King, Seat::Black)));
        let mut position = Position::from_board(board, true);
        assert!(king_in_check(&position, Seat::White));
        assert!(is_checkmated(&mut position, Seat::White));
        assert!(!is_checkmated(&mut position, Seat::Black));
    }
}
