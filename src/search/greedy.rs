//! One-ply greedy move picker.
//!
//! Every legal move is applied, scored statically from the mover's point of
//! view and undone. The best score wins; ties are broken at random.

use crate::core::{GameRng, Move, MoveKind, Seat};
use crate::rules::{is_square_attacked, king_in_check, legal_moves_for_seat, opponents_of, Position, PositionHistory};

use super::config::DuelAsymmetry;
use super::eval::evaluate;
use super::stats::SearchStats;
use super::{MovePicker, SearchRequest};

/// Penalty for walking into a third repetition.
pub const REPETITION_PENALTY: i32 = 5_000;

/// Bonus for a move that checks some opponent.
pub const CHECK_BONUS: i32 = 30;

/// Score one move for `seat`. The position is restored before returning.
pub fn score_move(
    position: &mut Position,
    seat: Seat,
    mv: Move,
    history: &PositionHistory,
    asymmetry: Option<&DuelAsymmetry>,
) -> i32 {
    let mover_value = position.board.get(mv.from).map_or(0, |p| p.kind.centipawns());
    let undo = position.do_move(mv);

    let mut score = evaluate(position, seat, asymmetry);
    let opponents = opponents_of(position, seat);
    if mv.kind != MoveKind::Swap && is_square_attacked(position, mv.to, opponents) {
        score -= mover_value / 2;
    }
    if history.would_repeat_thrice(position) {
        score -= REPETITION_PENALTY;
    }
    if opponents.iter().any(|s| king_in_check(position, s)) {
        score += CHECK_BONUS;
    }

    position.undo_move(undo);
    score
}

/// Greedy picker.
#[derive(Clone, Debug, Default)]
pub struct GreedyPicker {
    /// Yield the thread after this many scored moves (0 = never).
    pub yield_every: u32,
    pub asymmetry: Option<DuelAsymmetry>,
}

impl GreedyPicker {
    #[must_use]
    pub fn new(yield_every: u32, asymmetry: Option<DuelAsymmetry>) -> Self {
        Self { yield_every, asymmetry }
    }
}

impl MovePicker for GreedyPicker {
    fn pick(&mut self, request: &SearchRequest<'_>, rng: &mut GameRng, stats: &mut SearchStats) -> Option<Move> {
        let mut scratch = request.position.clone();
        let seat = request.seat;
        let moves = legal_moves_for_seat(&mut scratch, seat);
        let asymmetry = if scratch.duel { self.asymmetry.as_ref() } else { None };

        let mut best_score = i32::MIN;
        let mut best: Vec<Move> = Vec::new();
        for (i, mv) in moves.iter().enumerate() {
            if !best.is_empty() && request.deadline.expired() {
                log::debug!("greedy search stopped after {i} of {} moves", moves.len());
                break;
            }
            if self.yield_every > 0 && i > 0 && i % self.yield_every as usize == 0 {
                std::thread::yield_now();
            }

            let score = score_move(&mut scratch, seat, *mv, request.history, asymmetry);
            stats.nodes += 1;
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(*mv);
            } else if score == best_score {
                best.push(*mv);
            }
        }

        debug_assert_eq!(&scratch, request.position, "greedy search must not disturb the position");
        if !best.is_empty() {
            stats.completed_depth = 1;
        }
        rng.choose(&best).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Piece, PieceKind, Square};
    use crate::search::Deadline;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_takes_free_queen() {
        let mut board = Board::new();
        board.set(sq(9, 6), Some(Piece::new(PieceKind::King, Seat::White)));
        board.set(sq(2, 2), Some(Piece::new(PieceKind::King, Seat::Black)));
        board.set(sq(5, 3), Some(Piece::new(PieceKind::Rook, Seat::White)));
        board.set(sq(5, 8), Some(Piece::new(PieceKind::Queen, Seat::Black)));
        let position = Position::from_board(board, true);
        let history = PositionHistory::new();

        let request = SearchRequest {
            position: &position,
            seat: Seat::White,
            history: &history,
            deadline: Deadline::after_ms(1_000),
        };
        let mut picker = GreedyPicker::new(8, None);
        let mut stats = SearchStats::new();
        let choice = picker.pick(&request, &mut GameRng::new(1), &mut stats);
        assert_eq!(choice, Some(Move::normal(sq(5, 3), sq(5, 8))));
        assert!(stats.nodes > 1);
    }

    #[test]
    fn test_attacked_landing_penalised() {
        let mut board = Board::new();
        board.set(sq(9, 6), Some(Piece::new(PieceKind::King, Seat::White)));
        board.set(sq(2, 2), Some(Piece::new(PieceKind::King, Seat::Black)));
        board.set(sq(7, 4), Some(Piece::new(PieceKind::Queen, Seat::White)));
        board.set(sq(3, 6), Some(Piece::new(PieceKind::Rook, Seat::Black)));
        let mut position = Position::from_board(board, true);
        let history = PositionHistory::new();

        // (6,5) is safe; (7,6) sits on the rook's file.
        let safe = score_move(&mut position, Seat::White, Move::normal(sq(7, 4), sq(6, 5)), &history, None);
        let hanging = score_move(&mut position, Seat::White, Move::normal(sq(7, 4), sq(7, 6)), &history, None);
        assert!(safe > hanging);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut board = Board::new();
        board.set(sq(9, 6), Some(Piece::new(PieceKind::King, Seat::White)));
        let position = Position::from_board(board, true);
        let history = PositionHistory::new();
        let request = SearchRequest {
            position: &position,
            seat: Seat::Black,
            history: &history,
            deadline: Deadline::after_ms(10),
        };
        let mut stats = SearchStats::new();
        assert_eq!(GreedyPicker::default().pick(&request, &mut GameRng::new(1), &mut stats), None);
    }
}
