//! Combat resolution between two territories.
//!
//! One die each; the attacker must roll strictly higher to take the
//! territory, ties go to the defender.

pub mod resolver;

pub use resolver::{resolve_attack, CombatOutcome, CombatReport, Rolls};
