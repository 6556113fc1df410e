//! Iterative-deepening negamax with alpha-beta.
//!
//! Four-seat search is paranoid: the root seat plays against a coalition
//! of every other living seat. Scores are kept in negamax form from the
//! point of view of the side to move, and a child's score is negated only
//! when the move passes from one side to the other, so consecutive
//! coalition moves share a window.
//!
//! Timeouts surface as `Err(SearchAborted)`; every applied move is undone
//! before the error propagates, and the interrupted iteration is dropped.

use crate::core::{GameRng, Move, Seat};
use crate::rules::turn::next_living;
use crate::rules::{king_in_check, legal_moves_for_seat, next_to_move, Position, PositionHistory};

use super::config::{DuelAsymmetry, SearchConfig};
use super::deadline::{Deadline, SearchAborted};
use super::eval::{evaluate, is_mate_score, ELIMINATION, INF, MATE};
use super::ordering::order_moves;
use super::stats::SearchStats;
use super::{MovePicker, SearchRequest};

/// Recursive search state for one move choice.
struct Negamax<'a> {
    root: Seat,
    deadline: Deadline,
    history: &'a PositionHistory,
    asymmetry: Option<DuelAsymmetry>,
    nodes: u64,
}

impl Negamax<'_> {
    fn same_side(&self, a: Seat, b: Seat) -> bool {
        (a == self.root) == (b == self.root)
    }

    /// Static score from `to_move`'s side.
    fn leaf(&self, position: &Position, to_move: Seat) -> i32 {
        let root_view = evaluate(position, self.root, self.asymmetry.as_ref());
        if to_move == self.root {
            root_view
        } else {
            -root_view
        }
    }

    /// Search `next` after `mover` and return the score from `mover`'s side.
    #[allow(clippy::too_many_arguments)]
    fn child(
        &mut self,
        position: &mut Position,
        mover: Seat,
        next: Seat,
        depth: u8,
        alpha: i32,
        beta: i32,
        ply: i32,
    ) -> Result<i32, SearchAborted> {
        if self.same_side(mover, next) {
            self.search(position, next, depth, alpha, beta, ply)
        } else {
            Ok(-self.search(position, next, depth, -beta, -alpha, ply)?)
        }
    }

    fn search(
        &mut self,
        position: &mut Position,
        to_move: Seat,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: i32,
    ) -> Result<i32, SearchAborted> {
        self.deadline.check()?;
        self.nodes += 1;

        if self.history.would_repeat_thrice(position) {
            return Ok(0);
        }
        if depth == 0 {
            return Ok(self.leaf(position, to_move));
        }

        let mut moves = legal_moves_for_seat(position, to_move);
        if moves.is_empty() {
            if king_in_check(position, to_move) {
                let lost = if position.duel || to_move == self.root {
                    -(MATE - ply)
                } else {
                    -ELIMINATION
                };
                return Ok(lost);
            }
            if position.duel {
                return Ok(0);
            }
            // A stuck seat passes in the four-seat game.
            let next = next_living(position, to_move);
            if next == to_move {
                return Ok(self.leaf(position, to_move));
            }
            return self.child(position, to_move, next, depth - 1, alpha, beta, ply + 1);
        }

        self.deadline.check()?;
        order_moves(position, to_move, &mut moves, None);

        let mut best = -INF;
        for mv in moves {
            let undo = position.do_move(mv);
            let next = next_to_move(position, to_move).active();
            let result = self.child(position, to_move, next, depth - 1, alpha, beta, ply + 1);
            position.undo_move(undo);
            let value = result?;

            best = best.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }

    /// One full-width root iteration. `moves` is already ordered.
    fn root_iteration(&mut self, position: &mut Position, moves: &[Move], depth: u8) -> Result<Option<(Move, i32)>, SearchAborted> {
        let mut alpha = -INF;
        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            self.deadline.check()?;
            let undo = position.do_move(*mv);
            let next = next_to_move(position, self.root).active();
            let result = self.child(position, self.root, next, depth - 1, alpha, INF, 1);
            position.undo_move(undo);
            let value = result?;

            if best.map_or(true, |(_, s)| value > s) {
                best = Some((*mv, value));
            }
            alpha = alpha.max(value);
        }
        Ok(best)
    }
}

/// Iterative-deepening picker.
#[derive(Clone, Debug, Default)]
pub struct DeepeningPicker {
    config: SearchConfig,
}

impl DeepeningPicker {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl MovePicker for DeepeningPicker {
    fn pick(&mut self, request: &SearchRequest<'_>, _rng: &mut GameRng, stats: &mut SearchStats) -> Option<Move> {
        let mut scratch = request.position.clone();
        let seat = request.seat;
        let mut root_moves = legal_moves_for_seat(&mut scratch, seat);
        if root_moves.len() <= 1 {
            return root_moves.first().copied();
        }

        let max_depth = self.config.depth_for(scratch.duel, seat);
        let mut engine = Negamax {
            root: seat,
            deadline: request.deadline,
            history: request.history,
            asymmetry: if scratch.duel { self.config.duel_asymmetry } else { None },
            nodes: 0,
        };

        order_moves(&mut scratch, seat, &mut root_moves, None);
        let mut best: Option<Move> = None;
        for depth in 1..=max_depth {
            if engine.deadline.expired() {
                stats.aborted_iterations += 1;
                break;
            }
            order_moves(&mut scratch, seat, &mut root_moves, best);
            match engine.root_iteration(&mut scratch, &root_moves, depth) {
                Ok(Some((mv, score))) => {
                    best = Some(mv);
                    stats.completed_depth = depth;
                    log::debug!("{seat} depth {depth}: {mv} scores {score} ({} nodes)", engine.nodes);
                    if is_mate_score(score) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(SearchAborted) => {
                    stats.aborted_iterations += 1;
                    log::debug!("{seat} depth {depth} aborted at the deadline");
                    break;
                }
            }
        }

        stats.nodes += engine.nodes;
        debug_assert_eq!(&scratch, request.position, "search must not disturb the position");

        best.or_else(|| {
            log::warn!("{seat}: no iteration finished; playing the first ordered move");
            root_moves.first().copied()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Piece, PieceKind, Square};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn pick(position: &Position, seat: Seat, config: SearchConfig, ms: u64) -> (Option<Move>, SearchStats) {
        let history = PositionHistory::new();
        let request = SearchRequest {
            position,
            seat,
            history: &history,
            deadline: Deadline::after_ms(ms),
        };
        let mut stats = SearchStats::new();
        let choice = DeepeningPicker::new(config).pick(&request, &mut GameRng::new(3), &mut stats);
        (choice, stats)
    }

    #[test]
    fn test_finds_back_rank_mate() {
        let mut board = Board::new();
        board.set(sq(2, 8), Some(Piece::new(PieceKind::King, Seat::Black)));
        board.set(sq(3, 7), Some(Piece::new(PieceKind::Pawn, Seat::Black)));
        board.set(sq(3, 8), Some(Piece::new(PieceKind::Pawn, Seat::Black)));
        board.set(sq(3, 9), Some(Piece::new(PieceKind::Pawn, Seat::Black)));
        board.set(sq(9, 6), Some(Piece::new(PieceKind::King, Seat::White)));
        board.set(sq(8, 2), Some(Piece::new(PieceKind::Rook, Seat::White)));
        let position = Position::from_board(board, true);

        let (choice, stats) = pick(&position, Seat::White, SearchConfig::default().with_duel_max_depth(3), 5_000);
        assert_eq!(choice, Some(Move::normal(sq(8, 2), sq(2, 2))));
        assert!(stats.completed_depth >= 1);
    }

    #[test]
    fn test_expired_deadline_falls_back_to_legal_move() {
        let position = Position::opening();
        let (choice, stats) = pick(&position, Seat::White, SearchConfig::default(), 0);
        let mut scratch = position.clone();
        let legal = legal_moves_for_seat(&mut scratch, Seat::White);
        assert!(choice.is_some_and(|mv| legal.contains(&mv)));
        assert_eq!(stats.completed_depth, 0);
    }

    #[test]
    fn test_four_seat_search_returns_legal_move() {
        let position = Position::opening();
        let (choice, _) = pick(&position, Seat::Grey, SearchConfig::default().with_max_depth(2), 2_000);
        let mut scratch = position.clone();
        let legal = legal_moves_for_seat(&mut scratch, Seat::Grey);
        assert!(choice.is_some_and(|mv| legal.contains(&mv)));
    }

    #[test]
    fn test_single_move_returned_immediately() {
        let mut board = Board::new();
        board.set(sq(2, 2), Some(Piece::new(PieceKind::King, Seat::Black)));
        board.set(sq(4, 3), Some(Piece::new(PieceKind::Rook, Seat::White)));
        board.set(sq(9, 9), Some(Piece::new(PieceKind::King, Seat::White)));
        let position = Position::from_board(board, true);
        // The rook covers (2,3) and (3,3), leaving (3,2).
        let mut scratch = position.clone();
        let legal = legal_moves_for_seat(&mut scratch, Seat::Black);
        assert_eq!(legal, vec![Move::normal(sq(2, 2), sq(3, 2))]);

        let (choice, stats) = pick(&position, Seat::Black, SearchConfig::default(), 1_000);
        assert_eq!(choice, Some(Move::normal(sq(2, 2), sq(3, 2))));
        assert_eq!(stats.nodes, 0);
    }
}
