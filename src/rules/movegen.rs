//! Pseudo-legal move generation.
//!
//! Moves here obey piece geometry, occupancy, corners and the phase's
//! bounds, but may still leave the mover's own king attacked; the legality
//! filter removes those.

use crate::core::{Move, MoveKind, MoveList, Piece, PieceKind, Seat, Square, ARENA_MAX, ARENA_MIN};

use super::attacks::{self, DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL};
use super::policy::{rules_for, RulesPolicy};
use super::position::Position;

/// Half-moves during which the edge-pawn guard applies.
pub const EDGE_GUARD_HALF_MOVES: u32 = 4;

/// Append the pseudo-legal moves of the piece on `from`.
pub fn pseudo_moves(position: &Position, from: Square, out: &mut MoveList) {
    let Some(piece) = position.board.get(from) else {
        return;
    };
    let rules = rules_for(position);

    match piece.kind {
        PieceKind::Pawn => pawn_moves(position, rules, from, piece, out),
        PieceKind::Knight => {
            for (dr, dc) in KNIGHT_JUMPS {
                if let Some(to) = from.offset(dr, dc) {
                    push_if_open(position, rules, piece, from, to, out);
                }
            }
        }
        PieceKind::Bishop => slide(position, rules, piece, from, &DIAGONAL, out),
        PieceKind::Rook => slide(position, rules, piece, from, &ORTHOGONAL, out),
        PieceKind::Queen => {
            slide(position, rules, piece, from, &ORTHOGONAL, out);
            slide(position, rules, piece, from, &DIAGONAL, out);
            swap_move(position, rules, piece, from, out);
        }
        PieceKind::King => {
            for (dr, dc) in attacks::king_steps() {
                if let Some(to) = from.offset(dr, dc) {
                    push_if_open(position, rules, piece, from, to, out);
                }
            }
            castle_moves(position, rules, piece, from, out);
        }
    }
}

/// Non-slider step: empty or enemy non-king destination the piece may land on.
fn push_if_open(
    position: &Position,
    rules: &dyn RulesPolicy,
    piece: Piece,
    from: Square,
    to: Square,
    out: &mut MoveList,
) {
    if !rules.may_land(piece, to) {
        return;
    }
    match position.board.get(to) {
        None => out.push(Move::normal(from, to)),
        Some(target) if target.owner != piece.owner && !target.is_king() => {
            out.push(Move::normal(from, to));
        }
        Some(_) => {}
    }
}

fn slide(
    position: &Position,
    rules: &dyn RulesPolicy,
    piece: Piece,
    from: Square,
    directions: &[(i32, i32)],
    out: &mut MoveList,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            if !rules.ray_open(to) {
                break;
            }
            match position.board.get(to) {
                None => out.push(Move::normal(from, to)),
                Some(target) => {
                    if target.owner != piece.owner && !target.is_king() {
                        out.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// An edge pawn stands on the outermost arena line across its seat's axis.
#[must_use]
pub fn is_edge_pawn(seat: Seat, sq: Square) -> bool {
    let across = if seat.moves_along_rows() { sq.col } else { sq.row };
    across == ARENA_MIN || across == ARENA_MAX
}

fn pawn_moves(position: &Position, rules: &dyn RulesPolicy, from: Square, piece: Piece, out: &mut MoveList) {
    let seat = piece.owner;
    let (fr, fc) = position.pawn_forward(seat);

    if let Some(one) = from.offset(fr, fc) {
        if rules.may_land(piece, one) && position.board.is_empty(one) {
            out.push(Move::normal(from, one));
            if !piece.has_moved {
                if let Some(two) = one.offset(fr, fc) {
                    if rules.may_land(piece, two) && position.board.is_empty(two) {
                        out.push(Move::new(from, two, MoveKind::DoublePush));
                    }
                }
            }
        }
    }

    let guard = rules.edge_pawn_guard()
        && position.half_moves < EDGE_GUARD_HALF_MOVES
        && is_edge_pawn(seat, from);

    for side in [-1, 1] {
        let (dr, dc) = if seat.moves_along_rows() { (fr, side) } else { (side, fc) };
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        if !rules.may_land(piece, to) {
            continue;
        }

        match position.board.get(to) {
            Some(target) if target.owner != seat && !target.is_king() => {
                let edge_on_edge = guard && target.kind == PieceKind::Pawn && is_edge_pawn(target.owner, to);
                if !edge_on_edge {
                    out.push(Move::normal(from, to));
                }
            }
            None if rules.en_passant() && position.en_passant == Some(to) => {
                if let Some(captured) = to.offset(-fr, -fc) {
                    if matches!(position.board.get(captured), Some(p) if p.owner != seat && p.kind == PieceKind::Pawn) {
                        out.push(Move::new(from, to, MoveKind::EnPassant { captured }));
                    }
                }
            }
            _ => {}
        }
    }
}

/// Short king jump toward an unmoved rook on the king's home line.
///
/// The same rule is standard castling once the duel seeds fresh pieces.
fn castle_moves(position: &Position, rules: &dyn RulesPolicy, king: Piece, from: Square, out: &mut MoveList) {
    if king.has_moved {
        return;
    }
    let seat = king.owner;
    let opponents = attacks::opponents_of(position, seat);
    if attacks::is_square_attacked(position, from, opponents) {
        return;
    }

    let axes: [(i32, i32); 2] = if seat.moves_along_rows() { [(0, -1), (0, 1)] } else { [(-1, 0), (1, 0)] };

    for (dr, dc) in axes {
        // Find the first occupant along the home line.
        let mut distance = 0;
        let mut current = from;
        let mut rook_square = None;
        while let Some(next) = current.offset(dr, dc) {
            if !rules.ray_open(next) {
                break;
            }
            distance += 1;
            if let Some(p) = position.board.get(next) {
                if p.owner == seat && p.kind == PieceKind::Rook && !p.has_moved {
                    rook_square = Some(next);
                }
                break;
            }
            current = next;
        }

        let Some(rook_from) = rook_square else {
            continue;
        };
        if distance < 3 {
            continue;
        }
        let (Some(transit), Some(landing)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        if attacks::is_square_attacked(position, transit, opponents)
            || attacks::is_square_attacked(position, landing, opponents)
        {
            continue;
        }

        out.push(Move::new(
            from,
            landing,
            MoveKind::Castle {
                rook_from,
                rook_to: transit,
            },
        ));
    }
}

/// One-time swap with the seat's king, offered from each queen.
fn swap_move(position: &Position, rules: &dyn RulesPolicy, queen: Piece, from: Square, out: &mut MoveList) {
    if !rules.swap_allowed() || !position.swap_available[queen.owner] {
        return;
    }
    if let Some(king) = position.board.find_king(queen.owner) {
        out.push(Move::new(from, king, MoveKind::Swap));
    }
}
