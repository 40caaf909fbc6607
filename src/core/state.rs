//! Game state: the map, the players and their missions.
//!
//! ## GameState
//!
//! Everything that changes or is decided during a game:
//! - Players (turn order and colors)
//! - The territory map
//! - Each player's mission (drawn once, read-only afterwards)
//! - Round counter and status
//!
//! The random source is not part of the state; it is owned by the `Game`
//! driving this state and lent to each operation that draws. A seeded game's
//! `Checkpoint` stores both.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::{reserve_exact, Result};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::RandomSource;
use crate::board::TerritoryMap;
use crate::missions::{assign_mission, evaluate, Mission};
use crate::rules::{GameResult, GameStatus};

/// Complete game state, minus the random source. Serializable for
/// checkpoints and inspection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Players in turn order.
    pub players: PlayerMap<Player>,

    /// The territory map.
    pub map: TerritoryMap,

    /// Assigned missions. `None` only when the catalog was empty.
    missions: PlayerMap<Option<Mission>>,

    /// Rounds completed so far.
    pub round: u32,

    /// Running or finished.
    pub status: GameStatus,
}

impl GameState {
    /// Build the initial state: lay out the map and draw one mission per
    /// player, in turn order.
    ///
    /// Map and mission buffers are reserved up front; allocator failure is
    /// returned as `GameError::Allocation`.
    pub fn new(config: &GameConfig, rng: &mut impl RandomSource) -> Result<Self> {
        config.validate()?;

        let map = TerritoryMap::from_territories(&config.territories)?;

        let players = PlayerMap::from_vec(
            PlayerId::all(config.player_count())
                .zip(&config.players)
                .map(|(id, color)| Player::new(id, color.clone()))
                .collect(),
        );

        let mut slots = Vec::new();
        reserve_exact(&mut slots, config.player_count(), "missoes dos jogadores")?;
        for player in PlayerId::all(config.player_count()) {
            let mut slot = None;
            assign_mission(&mut slot, &config.missions, rng);
            match &slot {
                Some(mission) => tracing::debug!(%player, mission = mission.text(), "mission assigned"),
                None => tracing::warn!(%player, "mission catalog is empty; no mission assigned"),
            }
            slots.push(slot);
        }

        Ok(Self {
            players,
            map,
            missions: PlayerMap::from_vec(slots),
            round: 0,
            status: GameStatus::Running,
        })
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    /// A player's color.
    #[must_use]
    pub fn color(&self, player: PlayerId) -> &str {
        &self.players[player].color
    }

    /// A player's mission, if one was assigned.
    #[must_use]
    pub fn mission(&self, player: PlayerId) -> Option<&Mission> {
        self.missions[player].as_ref()
    }

    /// Has `player` fulfilled their mission on the current map?
    #[must_use]
    pub fn mission_complete(&self, player: PlayerId) -> bool {
        self.mission(player)
            .is_some_and(|mission| evaluate(mission, &self.map, self.color(player)))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.status.result()
    }

    /// Move to `Finished`. Has no effect once the game is already finished.
    pub fn finish(&mut self, result: GameResult) {
        if !self.is_finished() {
            self.status = GameStatus::Finished(result);
        }
    }
}
