//! Game configuration.
//!
//! `GameConfig` describes everything fixed at game start:
//! - Player colors, in turn order
//! - Initial territory layout
//! - The mission catalog
//! - Loop limits (round cap, selection attempts)
//!
//! `GameConfig::default()` is the standard two-player, eight-territory game.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::board::Territory;
use crate::missions::MissionCatalog;

/// Rounds played before the game ends without a winner.
pub const DEFAULT_ROUND_CAP: u32 = 50;

/// Random map draws allowed when looking for an attacker or a defender.
pub const DEFAULT_SELECTION_ATTEMPTS: u32 = 20;

/// Standard player colors, in turn order.
pub const DEFAULT_PLAYERS: [&str; 2] = ["Blue", "Red"];

/// Standard initial layout: (name, owner, troops).
pub const DEFAULT_TERRITORIES: [(&str, &str, u32); 8] = [
    ("T1", "Blue", 3),
    ("T2", "Red", 4),
    ("T3", "Blue", 2),
    ("T4", "Red", 5),
    ("T5", "Blue", 3),
    ("T6", "Red", 4),
    ("T7", "Blue", 2),
    ("T8", "Red", 3),
];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player colors, in turn order. Each color doubles as the player's
    /// identity on the map.
    pub players: Vec<String>,

    /// Initial territory layout, in map order.
    pub territories: Vec<Territory>,

    /// Phrases players draw their missions from.
    pub missions: MissionCatalog,

    /// Maximum number of rounds.
    pub round_cap: u32,

    /// Random draws per attacker/defender search before the turn is skipped.
    pub selection_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS.iter().map(|c| c.to_string()).collect(),
            territories: DEFAULT_TERRITORIES
                .iter()
                .map(|&(name, owner, troops)| Territory::new(name, owner, troops))
                .collect(),
            missions: MissionCatalog::default(),
            round_cap: DEFAULT_ROUND_CAP,
            selection_attempts: DEFAULT_SELECTION_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the player list.
    #[must_use]
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the initial territory layout.
    #[must_use]
    pub fn with_territories(mut self, territories: Vec<Territory>) -> Self {
        self.territories = territories;
        self
    }

    /// Replace the mission catalog.
    #[must_use]
    pub fn with_missions(mut self, missions: MissionCatalog) -> Self {
        self.missions = missions;
        self
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_round_cap(mut self, round_cap: u32) -> Self {
        self.round_cap = round_cap;
        self
    }

    /// Set the attacker/defender search budget.
    #[must_use]
    pub fn with_selection_attempts(mut self, attempts: u32) -> Self {
        self.selection_attempts = attempts;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the configuration can drive a game.
    ///
    /// An empty mission catalog and a zero round cap are allowed: the first
    /// leaves every player without a mission, the second ends the game
    /// immediately with no winner.
    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(GameError::InvalidConfig("at least one player is required".into()));
        }
        if self.players.len() > 255 {
            return Err(GameError::InvalidConfig("at most 255 players supported".into()));
        }
        for (i, color) in self.players.iter().enumerate() {
            if self.players[..i].contains(color) {
                return Err(GameError::InvalidConfig(format!("duplicate player color {color:?}")));
            }
        }
        if self.territories.is_empty() {
            return Err(GameError::InvalidConfig("the map needs at least one territory".into()));
        }
        if self.selection_attempts == 0 {
            return Err(GameError::InvalidConfig("selection_attempts must be positive".into()));
        }
        Ok(())
    }
}
