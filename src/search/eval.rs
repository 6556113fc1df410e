//! Static evaluation in centipawns.
//!
//! Four-seat positions weigh the seat's own material above the average of
//! its living opponents; duel positions are a plain material and activity
//! difference plus king-safety pressure.

use crate::core::{Board, Bounds, Seat, Square};
use crate::rules::{is_square_attacked, opponents_of, Position};

use super::config::DuelAsymmetry;

/// Score for delivering mate (minus ply distance).
pub const MATE: i32 = 1_000_000;

/// Score for mating one member of the coalition in four-seat search.
pub const ELIMINATION: i32 = 50_000;

/// Larger than any reachable score.
pub const INF: i32 = 2_000_000;

/// Own material weight during Survival, in percent.
const OWN_WEIGHT_PCT: i32 = 120;

const ARENA_BONUS: i32 = 8;
const CENTRE_WEIGHT: i32 = 3;
const KING_PRESSURE: i32 = 12;

/// Mate scores are within this distance of `MATE`.
#[must_use]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE - 1_000
}

/// Total material of `seat` in centipawns.
#[must_use]
pub fn material(board: &Board, seat: Seat) -> i32 {
    board
        .pieces()
        .filter(|(_, p)| p.owner == seat)
        .map(|(_, p)| p.kind.centipawns())
        .sum()
}

/// 0 on the rim up to 5 on the four central squares.
fn centrality(sq: Square) -> i32 {
    let dr = (2 * i32::from(sq.row) - 11).abs();
    let dc = (2 * i32::from(sq.col) - 11).abs();
    (11 - dr.max(dc)) / 2
}

/// Centralisation and arena presence of `seat`'s non-king pieces.
#[must_use]
pub fn activity(board: &Board, seat: Seat) -> i32 {
    board
        .pieces()
        .filter(|(_, p)| p.owner == seat && !p.is_king())
        .map(|(sq, _)| {
            let arena = if sq.in_arena() { ARENA_BONUS } else { 0 };
            centrality(sq) * CENTRE_WEIGHT + arena
        })
        .sum()
}

/// Attacked squares around `seat`'s king, scaled.
#[must_use]
pub fn king_pressure(position: &Position, seat: Seat) -> i32 {
    let Some(king) = position.board.find_king(seat) else {
        return 0;
    };
    let bounds = if position.duel { Bounds::ARENA } else { Bounds::FULL };
    let attackers = opponents_of(position, seat);
    let attacked = crate::rules::attacks::king_steps()
        .filter_map(|(dr, dc)| bounds.step(king, dr, dc))
        .filter(|sq| is_square_attacked(position, *sq, attackers))
        .count() as i32;
    attacked * KING_PRESSURE
}

/// Evaluation from `seat`'s point of view.
#[must_use]
pub fn evaluate(position: &Position, seat: Seat, asymmetry: Option<&DuelAsymmetry>) -> i32 {
    let board = &position.board;
    let own = material(board, seat) + activity(board, seat);

    let opponents = opponents_of(position, seat);
    if opponents.is_empty() {
        return own;
    }

    if position.duel {
        let mut score = own;
        for opp in opponents.iter() {
            score -= material(board, opp) + activity(board, opp);
            score += king_pressure(position, opp);
        }
        score -= king_pressure(position, seat);
        if let Some(a) = asymmetry {
            score += if a.favored == seat { a.eval_bonus } else { -a.eval_bonus };
        }
        return score;
    }

    let total: i32 = opponents
        .iter()
        .map(|opp| material(board, opp) + activity(board, opp))
        .sum();
    let average = total / opponents.len() as i32;
    own * OWN_WEIGHT_PCT / 100 - average
}
