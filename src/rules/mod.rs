//! Game progression and results.
//!
//! A game is `Running` until either a player's mission is fulfilled or the
//! round cap runs out. Both endings are `Finished`; neither is an error.

pub mod engine;

pub use engine::{GameResult, GameStatus};
