//! The game context: one explicit object per game.
//!
//! `GameContext` owns the position, the turn machine, the repetition
//! history, the move log, elimination bookkeeping and the AI. Every
//! operation a collaborator needs goes through it; nothing in the engine
//! is process-global.
//!
//! ```rust
//! use quad_duel::core::Seat;
//! use quad_duel::game::{EngineConfig, GameContext};
//!
//! let mut game = GameContext::new(EngineConfig::default());
//! let outcome = game.apply_move(Seat::White, 10, 3, 8, 3).unwrap();
//! assert_eq!(outcome.next, Some(Seat::Grey));
//! ```

use std::cmp::Reverse;

use crate::core::{
    in_home_corner, EngineError, GameRng, Move, MoveError, MoveKind, MoveRecord, PieceKind, Seat,
    SeatMap, Square, TURN_ORDER,
};
use crate::rules::duel::enter_duel;
use crate::rules::turn::next_living;
use crate::rules::{
    first_in_check, is_checkmated, king_in_check, legal_moves_for_piece, legal_moves_for_seat, next_to_move,
    rules_for, settle, DuelOrigins, GameOutcome, GamePhase, Position, PositionHistory, SanctuaryState, Settled,
    TurnState, REPETITION_LIMIT,
};
use crate::search::eval::material;
use crate::search::{SearchStats, Searcher};

use super::config::EngineConfig;
use super::history::MoveHistory;
use super::snapshot::{placements, Elimination, EliminationReason, StateSnapshot};

/// Castling availability for one seat, ignoring whether the path is clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    /// Toward the queen's starting side (lower index along the back line).
    pub queen_side: bool,
    /// Toward the other side.
    pub king_side: bool,
}

impl CastlingRights {
    #[must_use]
    pub fn both(&self) -> bool {
        self.queen_side && self.king_side
    }
}

/// What an accepted move led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Seats eliminated as a consequence, in order.
    pub eliminated: Vec<Seat>,
    /// The duel started on this move.
    pub duel_started: bool,
    /// Set when the move ended the game.
    pub outcome: Option<GameOutcome>,
    /// Seat to move next, `None` once the game is over.
    pub next: Option<Seat>,
}

/// A running game.
#[derive(Debug)]
pub struct GameContext {
    position: Position,
    phase: GamePhase,
    turn: TurnState,
    history: PositionHistory,
    moves_log: im::Vector<MoveRecord>,
    outcome: Option<GameOutcome>,
    eliminated: Vec<Elimination>,
    captured_points: SeatMap<u32>,
    duel_origins: Option<DuelOrigins>,
    config: EngineConfig,
    rng: GameRng,
    searcher: Searcher,
}

impl GameContext {
    /// Four-seat game from the standard opening.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut position = Position::opening();
        if !config.king_queen_swap {
            position.swap_available = SeatMap::with_value(false);
        }
        Self::from_position(position, config)
    }

    /// Start directly in the duel with the standard chess position.
    #[must_use]
    pub fn new_duel_only(config: EngineConfig) -> Self {
        let mut game = Self::from_position(Position::duel_opening(), config);
        game.duel_origins = Some(DuelOrigins {
            white: Seat::White,
            black: Seat::Black,
        });
        game
    }

    /// Game from an arbitrary position. The phase follows `position.duel`
    /// and the first living seat in turn order moves first.
    ///
    /// A four-seat position with exactly two seats alive goes straight into
    /// the duel when `duel_on_two` is set.
    #[must_use]
    pub fn from_position(position: Position, config: EngineConfig) -> Self {
        let mut history = PositionHistory::new();
        history.record(&position);

        let alive = position.board.alive_set();
        let first = TURN_ORDER
            .iter()
            .copied()
            .find(|s| alive.contains(*s))
            .unwrap_or(Seat::White);
        let phase = if position.duel { GamePhase::Duel } else { GamePhase::Survival };

        let mut game = Self {
            rng: GameRng::new(config.seed),
            searcher: Searcher::new(config.search.clone()),
            position,
            phase,
            turn: TurnState::new(first),
            history,
            moves_log: im::Vector::new(),
            outcome: None,
            eliminated: Vec::new(),
            captured_points: SeatMap::with_value(0),
            duel_origins: None,
            config,
        };
        if game.phase == GamePhase::Survival && alive.len() == 2 && game.config.duel_on_two {
            game.start_duel();
        } else {
            game.settle_turn();
        }
        game
    }

    // === Queries ===

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seat to move, `None` once the game is over.
    #[must_use]
    pub fn active_seat(&self) -> Option<Seat> {
        if self.is_over() {
            None
        } else {
            Some(self.turn.active())
        }
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn moves_log(&self) -> &im::Vector<MoveRecord> {
        &self.moves_log
    }

    #[must_use]
    pub fn eliminated(&self) -> &[Elimination] {
        &self.eliminated
    }

    /// Material `seat` has lost to captures since the game (or duel) began.
    #[must_use]
    pub fn captured_points(&self, seat: Seat) -> u32 {
        self.captured_points[seat]
    }

    #[must_use]
    pub fn duel_origins(&self) -> Option<DuelOrigins> {
        self.duel_origins
    }

    #[must_use]
    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    /// Statistics of the most recent AI search.
    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        self.searcher.stats()
    }

    /// Every legal move for `seat`, whether or not it is that seat's turn.
    #[must_use]
    pub fn legal_moves_for_seat(&self, seat: Seat) -> Vec<Move> {
        let mut scratch = self.position.clone();
        legal_moves_for_seat(&mut scratch, seat)
    }

    #[must_use]
    pub fn king_in_check(&self, seat: Seat) -> bool {
        king_in_check(&self.position, seat)
    }

    /// Living seats in turn order.
    #[must_use]
    pub fn alive_seats(&self) -> Vec<Seat> {
        self.position.board.alive_seats()
    }

    /// Unmoved king with an unmoved own rook somewhere along its back line
    /// on each side.
    #[must_use]
    pub fn castling_rights(&self, seat: Seat) -> CastlingRights {
        let board = &self.position.board;
        let Some(king_sq) = board.find_king(seat) else {
            return CastlingRights::default();
        };
        if board.get(king_sq).map_or(true, |k| k.has_moved) {
            return CastlingRights::default();
        }

        let bounds = rules_for(&self.position).bounds();
        let rook_toward = |step: i32| {
            let (dr, dc) = if seat.moves_along_rows() { (0, step) } else { (step, 0) };
            let mut sq = king_sq;
            while let Some(next) = bounds.step(sq, dr, dc) {
                sq = next;
                if let Some(p) = board.get(sq) {
                    if p.owner == seat && p.kind == PieceKind::Rook && !p.has_moved {
                        return true;
                    }
                }
            }
            false
        };
        CastlingRights {
            queen_side: rook_toward(-1),
            king_side: rook_toward(1),
        }
    }

    // === Moves ===

    /// Validate and play `seat`'s move from `(sr, sc)` to `(er, ec)`.
    ///
    /// Rejections leave the game untouched. The checks run in a fixed
    /// order: game over, bounds, corner access, turn, ownership, legality.
    pub fn apply_move(&mut self, seat: Seat, sr: u8, sc: u8, er: u8, ec: u8) -> Result<MoveOutcome, MoveError> {
        let result = self
            .validate(seat, sr, sc, er, ec)
            .map(|mv| self.play(seat, mv));
        if let Err(err) = &result {
            log::debug!("rejected {seat} ({sr},{sc})->({er},{ec}): {err}");
        }
        result
    }

    fn validate(&mut self, seat: Seat, sr: u8, sc: u8, er: u8, ec: u8) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let rules = rules_for(&self.position);
        let square = |r: u8, c: u8| {
            Square::new(i32::from(r), i32::from(c))
                .filter(|sq| rules.bounds().contains(*sq))
                .ok_or(MoveError::OutOfBounds)
        };
        let from = square(sr, sc)?;
        let to = square(er, ec)?;

        let piece = self.position.board.get(from);
        if to.is_corner() {
            let king_home = piece.is_some_and(|p| p.is_king() && p.owner == seat && in_home_corner(to, seat));
            if !king_home {
                return Err(MoveError::CornerSquare);
            }
        }

        let active = self.turn.active();
        if seat != active {
            return Err(MoveError::NotYourTurn { seat, active });
        }

        let piece = piece.ok_or(MoveError::NoPiece)?;
        if piece.owner != seat {
            return Err(MoveError::NotOwnPiece { seat });
        }

        legal_moves_for_piece(&mut self.position, from)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(MoveError::Illegal)
    }

    fn play(&mut self, seat: Seat, mv: Move) -> MoveOutcome {
        let undo = self.position.do_move(mv);
        let record = MoveRecord {
            by: seat,
            from: mv.from,
            to: mv.to,
            captured: undo.captured.map(|(_, p)| p.kind),
            promoted: undo.promoted,
            swap: mv.kind == MoveKind::Swap,
            castle: matches!(mv.kind, MoveKind::Castle { .. }),
        };
        if let Some((_, victim)) = undo.captured {
            self.captured_points[victim.owner] += victim.kind.points();
        }
        self.moves_log.push_back(record.clone());

        let mut outcome = MoveOutcome {
            record,
            eliminated: Vec::new(),
            duel_started: false,
            outcome: None,
            next: None,
        };

        if self.history.record(&self.position) >= REPETITION_LIMIT {
            self.finish(GameOutcome::Draw, "threefold repetition");
            outcome.outcome = self.outcome;
            return outcome;
        }

        self.turn = next_to_move(&self.position, seat);
        let was_duel = self.position.duel;

        self.resolve_eliminations(seat, &mut outcome.eliminated);
        if self.apply_auto_elimination(&mut outcome.eliminated) {
            self.resolve_eliminations(seat, &mut outcome.eliminated);
        }

        // Removed pieces may have changed who is in check.
        if !outcome.eliminated.is_empty() && !self.is_over() && self.phase == GamePhase::Survival {
            self.turn = next_to_move(&self.position, seat);
        }
        if !self.is_over() {
            self.settle_turn();
        }

        outcome.duel_started = !was_duel && self.position.duel;
        outcome.outcome = self.outcome;
        outcome.next = self.active_seat();
        outcome
    }

    // === Eliminations and phases ===

    /// Earliest checkmated living seat clockwise after `anchor`, with
    /// `anchor` itself checked last.
    fn find_checkmated(&mut self, anchor: Seat) -> Option<Seat> {
        let alive = self.position.board.alive_set();
        let position = &mut self.position;
        (1..=Seat::COUNT)
            .map(|step| anchor.clockwise(step))
            .filter(|s| alive.contains(*s))
            .find(|s| is_checkmated(position, *s))
    }

    /// Settle the consequences of pieces leaving the board: end the game or
    /// start the duel on the seat count, otherwise drop every seat that is
    /// now checkmated, until nothing changes.
    fn resolve_eliminations(&mut self, anchor: Seat, eliminated: &mut Vec<Seat>) {
        while !self.is_over() {
            if self.phase == GamePhase::Survival {
                match self.position.board.alive_seats().as_slice() {
                    [] => {
                        self.finish(GameOutcome::Draw, "no seats left");
                        return;
                    }
                    [winner] => {
                        let winner = *winner;
                        self.finish(GameOutcome::Winner(winner), "last seat standing");
                        return;
                    }
                    [_, _] if self.config.duel_on_two => {
                        self.start_duel();
                        return;
                    }
                    _ => {}
                }
            }
            let Some(seat) = self.find_checkmated(anchor) else {
                return;
            };
            self.drop_seat(seat, EliminationReason::Checkmate);
            eliminated.push(seat);
        }
    }

    /// Drop seats whose captured material reached the threshold. Returns
    /// true if any seat was dropped.
    fn apply_auto_elimination(&mut self, eliminated: &mut Vec<Seat>) -> bool {
        let threshold = self.config.auto_elim_threshold;
        if threshold == 0 {
            return false;
        }
        let mut any = false;
        for seat in TURN_ORDER {
            if self.is_over() || self.phase != GamePhase::Survival || self.position.board.alive_seats().len() < 2 {
                break;
            }
            if self.position.board.find_king(seat).is_some() && self.captured_points[seat] >= threshold {
                log::info!("{seat} lost {} points of material", self.captured_points[seat]);
                self.drop_seat(seat, EliminationReason::AutoElimination);
                eliminated.push(seat);
                any = true;
            }
        }
        any
    }

    /// Remove `seat` from the game. Returns false when the game is over or
    /// the seat is already gone.
    ///
    /// In the four-seat game the seat's pieces leave the board; in the duel
    /// the other side wins and the board is kept as it stands.
    pub fn eliminate(&mut self, seat: Seat, reason: EliminationReason) -> bool {
        if !self.drop_seat(seat, reason) {
            return false;
        }
        let mut cascade = Vec::new();
        self.resolve_eliminations(seat, &mut cascade);
        if self.is_over() {
            return true;
        }
        if self.phase == GamePhase::Survival {
            let still_forced = self.turn.forced.filter(|s| king_in_check(&self.position, *s));
            self.turn.forced = still_forced.or_else(|| first_in_check(&self.position, self.turn.rotation));
        }
        self.settle_turn();
        true
    }

    fn drop_seat(&mut self, seat: Seat, reason: EliminationReason) -> bool {
        if self.is_over() || self.position.board.find_king(seat).is_none() {
            return false;
        }
        self.eliminated.push(Elimination { seat, reason });
        log::info!("{seat} eliminated ({reason:?})");

        if self.position.duel {
            let winner = if seat == Seat::White { Seat::Black } else { Seat::White };
            self.finish(GameOutcome::Winner(winner), "duel decided");
            return true;
        }

        let removed = self.position.board.remove_seat(seat);
        self.position.sanctuary[seat] = SanctuaryState::default();
        log::debug!("removed {removed} pieces of {seat}");
        if self.turn.forced == Some(seat) {
            self.turn.forced = None;
        }
        if self.turn.rotation == seat {
            self.turn.rotation = next_living(&self.position, seat);
        }
        true
    }

    fn start_duel(&mut self) -> bool {
        self.phase = GamePhase::Transition;
        let Some(origins) = enter_duel(&mut self.position) else {
            self.phase = GamePhase::Survival;
            return false;
        };
        self.duel_origins = Some(origins);
        self.captured_points = SeatMap::with_value(0);
        self.history.clear();
        self.history.record(&self.position);
        self.turn = TurnState::new(Seat::White);
        self.phase = GamePhase::Duel;
        self.settle_turn();
        true
    }

    /// End the four-seat phase immediately.
    ///
    /// The two seats with the most material stay (ties go to the earlier
    /// seat in turn order); the rest are eliminated with
    /// [`EliminationReason::DuelOverride`]. Returns false outside the
    /// four-seat phase or with fewer than two seats alive.
    pub fn force_duel_now(&mut self) -> bool {
        if self.is_over() || self.phase != GamePhase::Survival {
            return false;
        }
        let mut alive = self.position.board.alive_seats();
        if alive.len() < 2 {
            return false;
        }
        alive.sort_by_key(|s| (Reverse(material(&self.position.board, *s)), s.index()));
        for seat in alive.split_off(2) {
            self.drop_seat(seat, EliminationReason::DuelOverride);
        }
        log::info!("duel forced between {} and {}", alive[0], alive[1]);
        self.start_duel()
    }

    fn settle_turn(&mut self) {
        match settle(&mut self.position, self.turn) {
            Settled::Ready(turn) => self.turn = turn,
            Settled::Stalemate(seat) => self.finish(GameOutcome::Draw, &format!("{seat} is stalemated")),
            Settled::NoMoves => self.finish(GameOutcome::Draw, "no seat can move"),
        }
    }

    fn finish(&mut self, outcome: GameOutcome, why: &str) {
        log::info!("game over: {outcome:?} ({why})");
        self.outcome = Some(outcome);
    }

    // === AI and export ===

    /// Let the configured AI pick a move for `seat` within `budget_ms`.
    ///
    /// The move is not played. `None` when the game is over or the seat has
    /// no legal move.
    pub fn choose_ai_move(&mut self, seat: Seat, budget_ms: u64) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        self.searcher
            .choose(&self.position, seat, &self.history, budget_ms, &mut self.rng)
    }

    /// Public state for collaborators.
    #[must_use]
    pub fn serialize_state(&self) -> StateSnapshot {
        let alive = self.alive_seats();
        StateSnapshot {
            turn: self.active_seat(),
            forced: self.turn.forced,
            phase: self.phase,
            board: placements(&self.position.board),
            in_check: alive.iter().copied().filter(|s| self.king_in_check(*s)).collect(),
            alive,
            moves_log: self.moves_log.iter().cloned().collect(),
            outcome: self.outcome,
            eliminated: self.eliminated.clone(),
            captured_points: self.captured_points,
            swap_available: self.position.swap_available,
            sanctuary: self.position.sanctuary,
            duel_origins: self.duel_origins,
            half_moves: self.position.half_moves,
        }
    }

    /// Move log and current board encoded with bincode.
    pub fn export_history(&self) -> Result<Vec<u8>, EngineError> {
        MoveHistory {
            moves: self.moves_log.iter().cloned().collect(),
            final_board: placements(&self.position.board),
            outcome: self.outcome,
            eliminated: self.eliminated.clone(),
            duel_origins: self.duel_origins,
        }
        .encode()
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Piece, PieceKind};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    fn assert_send<T: Send>() {}

    #[test]
    fn test_context_is_send() {
        assert_send::<GameContext>();
    }

    #[test]
    fn test_rejection_order() {
        let mut game = GameContext::default();
        assert_eq!(game.apply_move(Seat::White, 12, 3, 8, 3), Err(MoveError::OutOfBounds));
        assert_eq!(game.apply_move(Seat::White, 10, 2, 11, 1), Err(MoveError::CornerSquare));
        assert_eq!(
            game.apply_move(Seat::Grey, 3, 1, 3, 3),
            Err(MoveError::NotYourTurn {
                seat: Seat::Grey,
                active: Seat::White
            })
        );
        assert_eq!(game.apply_move(Seat::White, 6, 6, 5, 6), Err(MoveError::NoPiece));
        assert_eq!(
            game.apply_move(Seat::White, 1, 3, 2, 3),
            Err(MoveError::NotOwnPiece { seat: Seat::White })
        );
        assert_eq!(game.apply_move(Seat::White, 10, 3, 7, 3), Err(MoveError::Illegal));
        assert!(game.moves_log().is_empty());
        assert_eq!(game.position(), &Position::opening());
    }

    #[test]
    fn test_rotation_after_moves() {
        let mut game = GameContext::default();
        let outcome = game.apply_move(Seat::White, 10, 3, 8, 3).unwrap();
        assert_eq!(outcome.next, Some(Seat::Grey));
        assert_eq!(outcome.record.by, Seat::White);
        assert!(!outcome.record.castle);

        game.apply_move(Seat::Grey, 3, 1, 3, 3).unwrap();
        assert_eq!(game.active_seat(), Some(Seat::Black));
        assert_eq!(game.moves_log().len(), 2);
    }

    #[test]
    fn test_swap_disabled_by_config() {
        let game = GameContext::new(EngineConfig::default().with_king_queen_swap(false));
        assert!(game
            .legal_moves_for_seat(Seat::White)
            .iter()
            .all(|mv| mv.kind != MoveKind::Swap));

        let game = GameContext::default();
        assert!(game
            .legal_moves_for_seat(Seat::White)
            .iter()
            .any(|mv| mv.kind == MoveKind::Swap));
    }

    #[test]
    fn test_eliminate_skips_seat_in_rotation() {
        let mut game = GameContext::default();
        assert!(game.eliminate(Seat::Grey, EliminationReason::Resignation));
        assert!(!game.eliminate(Seat::Grey, EliminationReason::Resignation));
        game.apply_move(Seat::White, 10, 3, 8, 3).unwrap();
        assert_eq!(game.active_seat(), Some(Seat::Black));
        assert_eq!(game.alive_seats(), vec![Seat::White, Seat::Black, Seat::Pink]);
    }

    #[test]
    fn test_capture_tallies_points() {
        let mut board = Board::new();
        board.set(sq(11, 6), Some(Piece::new(PieceKind::King, Seat::White)));
        board.set(sq(0, 6), Some(Piece::new(PieceKind::King, Seat::Black)));
        board.set(sq(6, 0), Some(Piece::new(PieceKind::King, Seat::Grey)));
        board.set(sq(5, 4), Some(Piece::new(PieceKind::Rook, Seat::White)));
        board.set(sq(5, 8), Some(Piece::new(PieceKind::Rook, Seat::Black)));
        let config = EngineConfig::default().with_duel_on_two(false);
        let mut game = GameContext::from_position(Position::from_board(board, false), config);

        let outcome = game.apply_move(Seat::White, 5, 4, 5, 8).unwrap();
        assert_eq!(outcome.record.captured, Some(PieceKind::Rook));
        assert_eq!(game.captured_points(Seat::Black), 5);
        assert_eq!(game.captured_points(Seat::White), 0);
    }

    #[test]
    fn test_auto_elimination_threshold() {
        let mut board = Board::new();
        board.set(sq(11, 6), Some(Piece::new(PieceKind::King, Seat::White)));
        board.set(sq(0, 6), Some(Piece::new(PieceKind::King, Seat::Black)));
        board.set(sq(6, 0), Some(Piece::new(PieceKind::King, Seat::Grey)));
        board.set(sq(5, 4), Some(Piece::new(PieceKind::Rook, Seat::White)));
        board.set(sq(5, 8), Some(Piece::new(PieceKind::Rook, Seat::Black)));
        let config = EngineConfig::default().with_duel_on_two(false).with_auto_elim_threshold(5);
        let mut game = GameContext::from_position(Position::from_board(board, false), config);

        let outcome = game.apply_move(Seat::White, 5, 4, 5, 8).unwrap();
        assert_eq!(outcome.eliminated, vec![Seat::Black]);
        assert_eq!(
            game.eliminated(),
            &[Elimination {
                seat: Seat::Black,
                reason: EliminationReason::AutoElimination
            }]
        );
        assert_eq!(game.phase(), GamePhase::Survival);
        assert_eq!(game.active_seat(), Some(Seat::Grey));
    }

    #[test]
    fn test_last_seat_wins() {
        let mut game = GameContext::new(EngineConfig::default().with_duel_on_two(false));
        game.eliminate(Seat::Grey, EliminationReason::Timeout);
        game.eliminate(Seat::Black, EliminationReason::Timeout);
        assert_eq!(game.phase(), GamePhase::Survival);
        game.eliminate(Seat::Pink, EliminationReason::Resignation);
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Seat::White)));
        assert_eq!(game.active_seat(), None);
        assert_eq!(game.apply_move(Seat::White, 10, 3, 8, 3), Err(MoveError::GameOver));
    }

    #[test]
    fn test_duel_only_start() {
        let game = GameContext::new_duel_only(EngineConfig::default());
        assert_eq!(game.phase(), GamePhase::Duel);
        assert_eq!(game.active_seat(), Some(Seat::White));
        assert_eq!(game.legal_moves_for_seat(Seat::White).len(), 20);
        assert!(game.castling_rights(Seat::White).both());
        assert!(game.castling_rights(Seat::Black).both());
    }

    #[test]
    fn test_duel_resignation_hands_win_to_other_side() {
        let mut game = GameContext::new_duel_only(EngineConfig::default());
        assert!(game.eliminate(Seat::White, EliminationReason::Resignation));
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Seat::Black)));
    }

    #[test]
    fn test_force_duel_keeps_richest_seats() {
        let mut game = GameContext::default();
        // Strip Grey's queen so it drops below the others.
        game.position.board.take(sq(5, 0));
        assert!(game.force_duel_now());
        assert_eq!(game.phase(), GamePhase::Duel);
        assert_eq!(
            game.duel_origins(),
            Some(DuelOrigins {
                white: Seat::White,
                black: Seat::Black
            })
        );
        let reasons: Vec<_> = game.eliminated().iter().map(|e| (e.seat, e.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (Seat::Pink, EliminationReason::DuelOverride),
                (Seat::Grey, EliminationReason::DuelOverride)
            ]
        );
        assert!(!game.force_duel_now());
    }

    #[test]
    fn test_snapshot_and_history_export() {
        let mut game = GameContext::default();
        game.apply_move(Seat::White, 10, 3, 8, 3).unwrap();

        let snapshot = game.serialize_state();
        assert_eq!(snapshot.turn, Some(Seat::Grey));
        assert_eq!(snapshot.board.len(), 64);
        assert_eq!(snapshot.moves_log.len(), 1);
        assert!(snapshot.in_check.is_empty());
        assert!(!snapshot.swap_available[Seat::White]);
        assert!(snapshot.swap_available[Seat::Grey]);

        let bytes = game.export_history().unwrap();
        let history = MoveHistory::decode(&bytes).unwrap();
        assert_eq!(history.moves, snapshot.moves_log);
        assert_eq!(history.final_board, snapshot.board);
    }

    #[test]
    fn test_ai_move_is_legal_and_not_played() {
        let mut game = GameContext::new(
            EngineConfig::default().with_search(crate::search::SearchConfig::default().with_max_depth(1)),
        );
        let mv = game.choose_ai_move(Seat::White, 100).unwrap();
        assert!(game.legal_moves_for_seat(Seat::White).contains(&mv));
        assert!(game.moves_log().is_empty());
    }
}
