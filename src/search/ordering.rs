//! Move ordering for alpha-beta.
//!
//! Previous best move first, then captures by victim minus attacker value,
//! then promotions, then checking moves, then everything else.

use crate::core::{Move, MoveKind, PieceKind, Seat};
use crate::rules::{king_in_check, opponents_of, Position};

const PV_SCORE: i32 = 1_000_000;
const CAPTURE_BASE: i32 = 100_000;
const PROMOTION_SCORE: i32 = 50_000;
const CHECK_SCORE: i32 = 10_000;

/// Value of the piece `mv` captures, if any.
#[must_use]
pub fn captured_value(position: &Position, mv: Move) -> Option<i32> {
    match mv.kind {
        MoveKind::EnPassant { .. } => Some(PieceKind::Pawn.centipawns()),
        MoveKind::Swap | MoveKind::Castle { .. } => None,
        MoveKind::Normal | MoveKind::DoublePush => position.board.get(mv.to).map(|p| p.kind.centipawns()),
    }
}

fn is_promotion(position: &Position, seat: Seat, mv: Move) -> bool {
    matches!(position.board.get(mv.from), Some(p) if p.kind == PieceKind::Pawn)
        && position.on_promotion_line(seat, mv.to)
}

fn gives_check(position: &mut Position, seat: Seat, mv: Move) -> bool {
    let undo = position.do_move(mv);
    let check = opponents_of(position, seat).iter().any(|s| king_in_check(position, s));
    position.undo_move(undo);
    check
}

fn score(position: &mut Position, seat: Seat, mv: Move, pv: Option<Move>) -> i32 {
    if pv == Some(mv) {
        return PV_SCORE;
    }
    if let Some(victim) = captured_value(position, mv) {
        let attacker = position.board.get(mv.from).map_or(0, |p| p.kind.centipawns());
        return CAPTURE_BASE + victim - attacker;
    }
    if is_promotion(position, seat, mv) {
        return PROMOTION_SCORE;
    }
    if gives_check(position, seat, mv) {
        return CHECK_SCORE;
    }
    0
}

/// Sort `moves` best-first for `seat`. Ties keep generation order.
pub fn order_moves(position: &mut Position, seat: Seat, moves: &mut [Move], pv: Option<Move>) {
    let mut keyed: Vec<(i32, Move)> = moves.iter().map(|mv| (score(position, seat, *mv, pv), *mv)).collect();
    keyed.sort_by_key(|(s, _)| std::cmp::Reverse(*s));
    for (slot, (_, mv)) in moves.iter_mut().zip(keyed) {
        *slot = mv;
    }
}
