//! Single-die attack resolution.
//!
//! ## Rules
//!
//! - The attack only happens if the two territories have different owners
//!   and the attacker holds more than one troop. Otherwise nothing changes
//!   and no dice are rolled.
//! - Attacker rolls first, then defender.
//! - Attacker wins on a strictly higher roll: half its troops (at least one)
//!   move into the defender's territory, which changes owner.
//! - Otherwise the attacker loses one troop.

use serde::{Deserialize, Serialize};

use crate::board::Territory;
use crate::core::rng::RandomSource;

/// Dice rolled for one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rolls {
    pub attacker: u8,
    pub defender: u8,
}

impl Rolls {
    /// Ties favor the defender.
    #[must_use]
    pub fn attacker_wins(self) -> bool {
        self.attacker > self.defender
    }
}

/// How an attack ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// Territory captured with `transferred` troops moving in.
    Conquered { transferred: u32 },
    /// Defender held; attacker has `attacker_remaining` troops left.
    Repelled { attacker_remaining: u32 },
}

/// Record of a resolved attack, captured before any state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub attacker_name: String,
    pub attacker_owner: String,
    pub attacker_troops: u32,
    pub defender_name: String,
    pub defender_owner: String,
    pub defender_troops: u32,
    pub rolls: Rolls,
    pub outcome: CombatOutcome,
}

impl CombatReport {
    #[must_use]
    pub fn is_conquest(&self) -> bool {
        matches!(self.outcome, CombatOutcome::Conquered { .. })
    }
}

/// Resolve one attack from `attacker` into `defender`.
///
/// Returns `None`, with both territories untouched and no randomness
/// consumed, when the attack is not allowed.
pub fn resolve_attack(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut impl RandomSource,
) -> Option<CombatReport> {
    if attacker.owner == defender.owner || !attacker.can_attack() {
        return None;
    }

    let rolls = Rolls {
        attacker: rng.roll_die(),
        defender: rng.roll_die(),
    };

    let attacker_name = attacker.name().to_string();
    let attacker_owner = attacker.owner.clone();
    let attacker_troops = attacker.troops;
    let defender_name = defender.name().to_string();
    let defender_owner = defender.owner.clone();
    let defender_troops = defender.troops;

    let outcome = if rolls.attacker_wins() {
        let transferred = (attacker.troops / 2).max(1);
        defender.troops = transferred;
        defender.owner.clone_from(&attacker.owner);
        attacker.lose_troops(transferred);
        CombatOutcome::Conquered { transferred }
    } else {
        attacker.lose_troops(1);
        CombatOutcome::Repelled {
            attacker_remaining: attacker.troops,
        }
    };

    tracing::debug!(
        attacker = %attacker_name,
        defender = %defender_name,
        attacker_roll = rolls.attacker,
        defender_roll = rolls.defender,
        ?outcome,
        "attack resolved"
    );

    Some(CombatReport {
        attacker_name,
        attacker_owner,
        attacker_troops,
        defender_name,
        defender_owner,
        defender_troops,
        rolls,
        outcome,
    })
}
