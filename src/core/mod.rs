//! Core game types: players, state, RNG, configuration, errors.
//!
//! Everything the rest of the crate builds on. Gameplay modules receive the
//! random source as a `RandomSource` so seeded and scripted sources can be
//! swapped in freely.

pub mod error;
pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::GameConfig;
pub use state::GameState;
