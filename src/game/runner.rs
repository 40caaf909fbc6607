//! The round loop.

use std::io::Write;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::selection::{select_attacker, select_defender};
use crate::board::TerritoryId;
use crate::combat::{resolve_attack, CombatReport};
use crate::core::{GameConfig, GameError, GameRng, GameRngState, GameState, PlayerId, RandomSource, Result};
use crate::display;
use crate::rules::GameResult;

/// What happened on one player's turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// No owned territory with more than one troop turned up in the draws.
    NoAttacker,
    /// An attacker was found but no enemy territory turned up.
    NoTarget { attacker: TerritoryId },
    /// An attack was made. `combat` is `None` only if the resolver refused it.
    Attacked {
        attacker: TerritoryId,
        defender: TerritoryId,
        combat: Option<CombatReport>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: PlayerId,
    pub outcome: TurnOutcome,
    /// The player's mission was fulfilled at the end of this turn.
    pub mission_complete: bool,
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// Turns actually taken. Players after a winner do not act.
    pub turns: SmallVec<[TurnReport; 4]>,
    pub winner: Option<PlayerId>,
}

/// A seeded game frozen between rounds: the full state plus the RNG
/// position, so play resumes with exactly the draws it would have made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub state: GameState,
    pub rng: GameRngState,
}

/// A game in progress: configuration, state and the random source.
///
/// ```
/// use territory_missions::core::GameConfig;
/// use territory_missions::game::Game;
///
/// let mut game = Game::with_seed(GameConfig::default(), 42).unwrap();
/// let mut out = Vec::new();
/// let result = game.run(&mut out).unwrap();
///
/// assert!(game.state().is_finished());
/// assert_eq!(game.state().result(), Some(result));
/// ```
#[derive(Debug)]
pub struct Game<R> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl Game<GameRng> {
    /// Create a game driven by a seeded `GameRng`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, GameRng::new(seed))
    }

    /// Snapshot the state and RNG position.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Resume a game from a checkpoint taken under `config`.
    ///
    /// The checkpoint's players and map must have the sizes `config`
    /// describes.
    pub fn restore(config: GameConfig, checkpoint: Checkpoint) -> Result<Self> {
        config.validate()?;
        let Checkpoint { state, rng } = checkpoint;

        if state.player_count() != config.player_count() {
            return Err(GameError::InvalidConfig(format!(
                "checkpoint has {} players, config has {}",
                state.player_count(),
                config.player_count()
            )));
        }
        if state.map.len() != config.territories.len() {
            return Err(GameError::InvalidConfig(format!(
                "checkpoint map has {} territories, config has {}",
                state.map.len(),
                config.territories.len()
            )));
        }

        tracing::info!(seed = rng.seed, round = state.round, "game restored from checkpoint");
        Ok(Self {
            config,
            state,
            rng: GameRng::from_state(&rng),
        })
    }
}

impl<R: RandomSource> Game<R> {
    /// Set up the map and draw missions.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self> {
        let state = GameState::new(&config, &mut rng)?;
        Ok(Self { config, state, rng })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Play to the end: initial display, rounds until a mission is fulfilled
    /// or the round cap runs out, then the summary line.
    pub fn run(&mut self, out: &mut impl Write) -> Result<GameResult> {
        self.render_opening(out)?;
        self.check_round_cap();

        let result = loop {
            if let Some(result) = self.state.result() {
                break result;
            }
            self.play_round(out)?;
        };
        display::render_result(out, &result, &self.state.players)?;

        match result {
            GameResult::Winner(player) => tracing::info!(
                %player,
                color = self.state.color(player),
                rounds = self.state.round,
                "mission fulfilled"
            ),
            GameResult::NoWinner { rounds } => tracing::info!(rounds, "round cap reached with no winner"),
        }

        Ok(result)
    }

    /// Map listing followed by each player's mission.
    pub fn render_opening(&self, out: &mut impl Write) -> Result<()> {
        display::render_map(out, &self.state.map)?;
        for player in self.state.player_ids() {
            display::render_mission(out, &self.state.players[player], self.state.mission(player))?;
        }
        Ok(())
    }

    /// Play one round: each player in turn order attacks once, stopping as
    /// soon as someone fulfills their mission. The map is shown afterwards.
    ///
    /// Does nothing if the game is already finished.
    pub fn play_round(&mut self, out: &mut impl Write) -> Result<RoundReport> {
        let round = self.state.round + 1;
        let mut report = RoundReport {
            round,
            turns: SmallVec::new(),
            winner: None,
        };
        if self.state.is_finished() {
            return Ok(report);
        }

        display::render_round_header(out, round)?;

        let players: Vec<PlayerId> = self.state.player_ids().collect();
        for player in players {
            let turn = self.play_turn(player, out)?;
            let won = turn.mission_complete;
            report.turns.push(turn);

            if won {
                report.winner = Some(player);
                self.state.finish(GameResult::Winner(player));
                break;
            }
        }

        display::render_map(out, &self.state.map)?;
        self.state.round = round;

        tracing::debug!(round, territories = ?self.state.map.owner_counts(), "round complete");

        self.check_round_cap();
        Ok(report)
    }

    /// One player's turn: pick attacker and defender, fight, check mission.
    pub fn play_turn(&mut self, player: PlayerId, out: &mut impl Write) -> Result<TurnReport> {
        let attempts = self.config.selection_attempts;
        let color = self.state.color(player).to_string();

        let Some(attacker) = select_attacker(&self.state.map, &color, attempts, &mut self.rng) else {
            tracing::debug!(%player, "no territory able to attack");
            display::render_no_attacker(out, &self.state.players[player])?;
            return Ok(TurnReport {
                player,
                outcome: TurnOutcome::NoAttacker,
                mission_complete: false,
            });
        };

        let Some(defender) = select_defender(&self.state.map, &color, attempts, &mut self.rng) else {
            tracing::debug!(%player, "no enemy territory found");
            display::render_no_target(out, &self.state.players[player])?;
            return Ok(TurnReport {
                player,
                outcome: TurnOutcome::NoTarget { attacker },
                mission_complete: false,
            });
        };

        let combat = match self.state.map.pair_mut(attacker, defender) {
            Some((a, d)) => resolve_attack(a, d, &mut self.rng),
            None => None,
        };
        if let Some(report) = &combat {
            display::render_combat(out, report)?;
        }

        let mission_complete = self.state.mission_complete(player);
        if mission_complete {
            if let Some(mission) = self.state.mission(player) {
                display::render_mission_complete(out, &self.state.players[player], mission)?;
            }
        }

        Ok(TurnReport {
            player,
            outcome: TurnOutcome::Attacked {
                attacker,
                defender,
                combat,
            },
            mission_complete,
        })
    }

    fn check_round_cap(&mut self) {
        if self.state.round >= self.config.round_cap {
            self.state.finish(GameResult::NoWinner {
                rounds: self.config.round_cap,
            });
        }
    }
}
