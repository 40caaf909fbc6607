//! Game status and result types.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player fulfilled their mission.
    Winner(PlayerId),
    /// The round cap ran out with no mission fulfilled.
    NoWinner { rounds: u32 },
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::NoWinner { .. } => None,
        }
    }
}

/// Two-state game lifecycle. `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    Finished(GameResult),
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::Running => None,
            GameStatus::Finished(result) => Some(*result),
        }
    }
}
