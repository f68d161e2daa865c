//! Position - a board plus the side to move, as a JSON document

use crate::board::{Board, Color};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved position for starting play somewhere other than move one
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub to_move: Color,
}

impl Position {
    /// The standard game start: four center discs, Black to move
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            to_move: Color::Black,
        }
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let position = serde_json::from_str(&content)?;
        Ok(position)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let position = Position::initial();
        let json = serde_json::to_string(&position).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, position);
    }

    #[test]
    fn test_initial_position() {
        let position = Position::initial();
        assert_eq!(position.to_move, Color::Black);
        assert_eq!(position.board.score(), (2, 2));
    }
}
