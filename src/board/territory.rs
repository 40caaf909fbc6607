//! A single map cell.

use serde::{Deserialize, Serialize};

/// Index of a territory on the map (0-based, stable for the whole game).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(pub usize);

impl TerritoryId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A territory: name, controlling color and garrison.
///
/// `troops` is unsigned, so the "never negative" rule holds by construction;
/// every loss is applied with saturating subtraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: String,
    /// Color of the controlling player.
    pub owner: String,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, owner: impl Into<String>, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            troops,
        }
    }

    /// Territory name. Fixed once the map is built.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Is this territory controlled by `color`?
    #[must_use]
    pub fn is_owned_by(&self, color: &str) -> bool {
        self.owner == color
    }

    /// Can this territory launch an attack? Needs more than one troop.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.troops > 1
    }

    /// Remove up to `count` troops, stopping at zero.
    pub fn lose_troops(&mut self, count: u32) {
        self.troops = self.troops.saturating_sub(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_territory_basics() {
        let t = Territory::new("T1", "Blue", 3);

        assert_eq!(t.name(), "T1");
        assert!(t.is_owned_by("Blue"));
        assert!(!t.is_owned_by("Red"));
        assert!(t.can_attack());
    }

    #[test]
    fn test_single_troop_cannot_attack() {
        assert!(!Territory::new("T2", "Red", 1).can_attack());
        assert!(!Territory::new("T2", "Red", 0).can_attack());
    }

    #[test]
    fn test_lose_troops_floors_at_zero() {
        let mut t = Territory::new("T3", "Blue", 2);

        t.lose_troops(1);
        assert_eq!(t.troops, 1);

        t.lose_troops(5);
        assert_eq!(t.troops, 0);
    }

    #[test]
    fn test_territory_id_index() {
        assert_eq!(TerritoryId::new(4).index(), 4);
        assert_eq!(TerritoryId::new(4), TerritoryId(4));
    }

    #[test]
    fn test_territory_serde() {
        let t = Territory::new("T4", "Red", 5);
        let json = serde_json::to_string(&t).unwrap();
        let back: Territory = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
