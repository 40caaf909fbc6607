//! Game orchestration.
//!
//! `Game` owns the state and the random source and runs the round loop:
//! each round, every player in turn order picks a random attacker among
//! their own territories and a random enemy target, fights, and checks their
//! mission. The first fulfilled mission ends the game; otherwise it ends
//! with no winner at the round cap.

pub mod selection;
mod runner;

pub use runner::{Checkpoint, Game, RoundReport, TurnOutcome, TurnReport};
pub use selection::{select_attacker, select_defender};
