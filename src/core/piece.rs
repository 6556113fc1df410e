//! Pieces and their material values.

use serde::{Deserialize, Serialize};

use super::seat::Seat;

/// Piece kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Material value in whole points (K0 Q9 R5 B3 N3 P1).
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 9,
            PieceKind::Rook => 5,
            PieceKind::Bishop | PieceKind::Knight => 3,
            PieceKind::Pawn => 1,
        }
    }

    /// Material value in centipawns, used by the evaluator.
    #[must_use]
    pub const fn centipawns(self) -> i32 {
        self.points() as i32 * 100
    }

    /// Single-letter symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
}

/// A piece on the board.
///
/// Each piece lives in exactly one board cell; moving it transfers the
/// value from one cell to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Seat,
    pub has_moved: bool,
}

impl Piece {
    /// A fresh, unmoved piece.
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Seat) -> Self {
        Self {
            kind,
            owner,
            has_moved: false,
        }
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        assert_eq!(PieceKind::Queen.points(), 9);
        assert_eq!(PieceKind::King.centipawns(), 0);
        assert_eq!(PieceKind::Knight.centipawns(), 300);
    }

    #[test]
    fn test_new_piece_unmoved() {
        let p = Piece::new(PieceKind::Rook, Seat::Pink);
        assert!(!p.has_moved);
        assert!(!p.is_king());
        assert_eq!(p.kind.symbol(), 'R');
    }
}
