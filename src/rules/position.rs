//! The mutable game position and its exact do/undo.
//!
//! Every piece of state a move can touch lives in [`Position`], and
//! [`Position::do_move`] returns a [`MoveUndo`] holding everything needed to
//! put it back. Legality checks and search simulate moves this way on a
//! single position; the live game applies moves the same way and simply
//! drops the undo record.

use crate::core::{
    layout, Board, Move, MoveKind, Piece, PieceKind, Seat, SeatMap, Square, ARENA_MAX, ARENA_MIN,
};

use super::sanctuary::{self, GuardianSquares, SanctuaryState};

/// Board plus every flag that move application reads or writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub sanctuary: SeatMap<SanctuaryState>,
    /// One-time king/queen swap still available.
    pub swap_available: SeatMap<bool>,
    /// Pawn direction along the seat's axis: -1 or +1.
    pub pawn_dir: SeatMap<i8>,
    /// Half-moves applied since the current phase began.
    pub half_moves: u32,
    /// Square a duel pawn skipped on its last double push.
    pub en_passant: Option<Square>,
    /// Standard two-player chess rules are in force.
    pub duel: bool,
}

/// Everything [`Position::undo_move`] needs to restore the prior position.
#[derive(Clone, Debug)]
pub struct MoveUndo {
    pub mv: Move,
    /// The moving piece as it was before the move (the queen for a swap).
    pub moved: Option<Piece>,
    /// Captured piece and the square it stood on.
    pub captured: Option<(Square, Piece)>,
    /// Castling rook as it was before the move.
    pub rook: Option<Piece>,
    /// The moving pawn became a queen.
    pub promoted: bool,
    /// Bishops turned into queens by guardian promotion.
    pub guardians: GuardianSquares,
    sanctuary: SeatMap<SanctuaryState>,
    swap_available: SeatMap<bool>,
    en_passant: Option<Square>,
    half_moves: u32,
}

/// Default pawn direction per seat.
#[must_use]
pub const fn default_pawn_dir(seat: Seat) -> i8 {
    match seat {
        Seat::White | Seat::Pink => -1,
        Seat::Grey | Seat::Black => 1,
    }
}

impl Position {
    /// Build a position around a board.
    #[must_use]
    pub fn from_board(board: Board, duel: bool) -> Self {
        let mut position = Self {
            board,
            sanctuary: SeatMap::with_value(SanctuaryState::default()),
            swap_available: SeatMap::with_value(!duel),
            pawn_dir: SeatMap::new(default_pawn_dir),
            half_moves: 0,
            en_passant: None,
            duel,
        };
        if !duel {
            sanctuary::refresh(&mut position.board, &mut position.sanctuary);
        }
        position
    }

    /// The four-seat opening.
    #[must_use]
    pub fn opening() -> Self {
        Self::from_board(layout::survival_start(), false)
    }

    /// The standard chess start inside the arena.
    #[must_use]
    pub fn duel_opening() -> Self {
        Self::from_board(layout::duel_start(), true)
    }

    /// One pawn step for `seat` as `(dr, dc)`.
    #[must_use]
    pub fn pawn_forward(&self, seat: Seat) -> (i32, i32) {
        let dir = i32::from(self.pawn_dir[seat]);
        if seat.moves_along_rows() {
            (dir, 0)
        } else {
            (0, dir)
        }
    }

    /// Does a `seat` pawn on `sq` stand on its promotion line?
    ///
    /// Only the coordinate along the seat's axis matters: the far arena edge
    /// in the direction of travel.
    #[must_use]
    pub fn on_promotion_line(&self, seat: Seat, sq: Square) -> bool {
        let along = if seat.moves_along_rows() { sq.row } else { sq.col };
        let target = if self.pawn_dir[seat] < 0 { ARENA_MIN } else { ARENA_MAX };
        along == target
    }

    /// Apply a move generated for this position.
    pub fn do_move(&mut self, mv: Move) -> MoveUndo {
        let mut undo = MoveUndo {
            mv,
            moved: self.board.get(mv.from),
            captured: None,
            rook: None,
            promoted: false,
            guardians: GuardianSquares::new(),
            sanctuary: self.sanctuary,
            swap_available: self.swap_available,
            en_passant: self.en_passant,
            half_moves: self.half_moves,
        };
        self.en_passant = None;

        if let MoveKind::Swap = mv.kind {
            let queen = self.board.take(mv.from);
            let king = self.board.take(mv.to);
            if let Some(q) = queen {
                self.swap_available[q.owner] = false;
            }
            self.board.set(mv.from, king);
            self.board.set(mv.to, queen);
        } else if let Some(piece) = self.board.take(mv.from) {
            let victim_square = match mv.kind {
                MoveKind::EnPassant { captured } => captured,
                _ => mv.to,
            };
            undo.captured = self.board.take(victim_square).map(|p| (victim_square, p));

            if let MoveKind::Castle { rook_from, rook_to } = mv.kind {
                let rook = self.board.take(rook_from);
                undo.rook = rook;
                self.board.set(rook_to, rook.map(|r| Piece { has_moved: true, ..r }));
            }

            let mut placed = Piece {
                has_moved: true,
                ..piece
            };
            if piece.kind == PieceKind::Pawn && self.on_promotion_line(piece.owner, mv.to) {
                placed.kind = PieceKind::Queen;
                undo.promoted = true;
            }
            self.board.set(mv.to, Some(placed));

            if self.duel && mv.kind == MoveKind::DoublePush {
                let (dr, dc) = self.pawn_forward(piece.owner);
                self.en_passant = mv.from.offset(dr, dc);
            }
            self.swap_available[piece.owner] = false;
        }

        self.half_moves += 1;
        if !self.duel {
            undo.guardians = sanctuary::refresh(&mut self.board, &mut self.sanctuary);
        }
        undo
    }

    /// Revert a move applied with [`Position::do_move`]. Undo records must be
    /// replayed in reverse order of application.
    pub fn undo_move(&mut self, undo: MoveUndo) {
        for sq in &undo.guardians {
            if let Some(piece) = self.board.get_mut(*sq) {
                piece.kind = PieceKind::Bishop;
            }
        }

        let mv = undo.mv;
        if let MoveKind::Swap = mv.kind {
            let queen = self.board.take(mv.to);
            let king = self.board.take(mv.from);
            self.board.set(mv.from, queen);
            self.board.set(mv.to, king);
        } else {
            self.board.take(mv.to);
            self.board.set(mv.from, undo.moved);
            if let MoveKind::Castle { rook_from, rook_to } = mv.kind {
                self.board.take(rook_to);
                self.board.set(rook_from, undo.rook);
            }
            if let Some((sq, piece)) = undo.captured {
                self.board.set(sq, Some(piece));
            }
        }

        self.sanctuary = undo.sanctuary;
        self.swap_available = undo.swap_available;
        self.en_passant = undo.en_passant;
        self.half_moves = undo.half_moves;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::opening()
    }
}
