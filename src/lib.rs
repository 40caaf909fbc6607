//! # territory-missions
//!
//! A small territorial-conquest board game: a fixed map of territories owned
//! by colored players, one secret mission per player, single-die combat, and
//! a round loop that ends when someone fulfills their mission or the round
//! cap runs out.
//!
//! ## Design Principles
//!
//! 1. **Injectable randomness**: every draw (missions, territory picks, dice)
//!    goes through `RandomSource`, so games replay exactly from a seed and
//!    tests can script individual rolls.
//!
//! 2. **Parse once**: mission phrases are parsed into a `MissionKind` when
//!    assigned; evaluation works on the structured form.
//!
//! 3. **Output is observation**: the `display` module formats reports the
//!    rules produce; nothing in the rules reads the output.
//!
//! ## Modules
//!
//! - `core`: Players, state, RNG, configuration, errors
//! - `board`: Territories and the map
//! - `missions`: Catalog, parsing, evaluation
//! - `combat`: Attack resolution
//! - `rules`: Game status and results
//! - `game`: Round loop and attacker/defender selection
//! - `display`: Text output

pub mod core;
pub mod board;
pub mod missions;
pub mod combat;
pub mod rules;
pub mod game;
pub mod display;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, GameState,
    Player, PlayerId, PlayerMap, RandomSource, Result,
};

pub use crate::board::{Territory, TerritoryId, TerritoryMap};

pub use crate::missions::{assign_mission, evaluate, evaluate_phrase, Mission, MissionCatalog, MissionKind};

pub use crate::combat::{resolve_attack, CombatOutcome, CombatReport, Rolls};

pub use crate::rules::{GameResult, GameStatus};

pub use crate::game::{Checkpoint, Game, RoundReport, TurnOutcome, TurnReport};
