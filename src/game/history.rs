//! Binary export of a finished (or ongoing) game.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, MoveRecord};
use crate::rules::{DuelOrigins, GameOutcome};

use super::snapshot::{Elimination, PlacedPiece};

/// Move log plus the final board, as handed to a history store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
    pub final_board: Vec<PlacedPiece>,
    pub outcome: Option<GameOutcome>,
    pub eliminated: Vec<Elimination>,
    pub duel_origins: Option<DuelOrigins>,
}

impl MoveHistory {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`MoveHistory::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_bytes_rejected() {
        let history = MoveHistory {
            moves: Vec::new(),
            final_board: Vec::new(),
            outcome: None,
            eliminated: Vec::new(),
            duel_origins: None,
        };
        let bytes = history.encode().unwrap();
        assert_eq!(MoveHistory::decode(&bytes).unwrap(), history);
        assert!(matches!(
            MoveHistory::decode(&bytes[..bytes.len() - 1]),
            Err(EngineError::History(_))
        ));
    }
}
