//! Mission evaluation against the current map.
//!
//! Evaluation is a read-only query: it borrows the map immutably and has no
//! side effects.

use super::mission::{Mission, MissionKind};
use crate::board::TerritoryMap;

impl MissionKind {
    /// Is this mission fulfilled for the player controlling `color`?
    #[must_use]
    pub fn is_satisfied(&self, map: &TerritoryMap, color: &str) -> bool {
        match self {
            MissionKind::OwnCount(n) | MissionKind::ConquerCount(n) => {
                map.count_owned_by(color) >= *n as usize
            }
            MissionKind::EliminateColor(target) => map.troops_of(target) == 0,
            MissionKind::Unrecognized => false,
        }
    }
}

/// Check a player's assigned mission.
#[must_use]
pub fn evaluate(mission: &Mission, map: &TerritoryMap, color: &str) -> bool {
    mission.kind().is_satisfied(map, color)
}

/// Check a raw mission phrase without keeping the parsed form.
#[must_use]
pub fn evaluate_phrase(phrase: &str, map: &TerritoryMap, color: &str) -> bool {
    MissionKind::parse(phrase).is_satisfied(map, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Territory;

    fn map_with(owners: &[(&str, u32)]) -> TerritoryMap {
        let layout: Vec<_> = owners
            .iter()
            .enumerate()
            .map(|(i, (owner, troops))| Territory::new(format!("T{}", i + 1), *owner, *troops))
            .collect();
        TerritoryMap::from_territories(&layout).unwrap()
    }

    #[test]
    fn test_own_count_threshold() {
        let three = map_with(&[("Blue", 1), ("Blue", 1), ("Blue", 1), ("Red", 1)]);
        let two = map_with(&[("Blue", 1), ("Red", 1), ("Blue", 1), ("Red", 1)]);

        assert!(evaluate_phrase("Possuir 3 territorios", &three, "Blue"));
        assert!(!evaluate_phrase("Possuir 3 territorios", &two, "Blue"));
    }

    #[test]
    fn test_own_count_more_than_needed() {
        let map = map_with(&[("Red", 1), ("Red", 1), ("Red", 1), ("Red", 1)]);
        assert!(evaluate_phrase("Possuir 3 territorios", &map, "Red"));
    }

    #[test]
    fn test_conquer_counts_total_ownership() {
        let map = map_with(&[("Blue", 3), ("Blue", 2), ("Red", 4)]);

        assert!(evaluate_phrase("Conquistar 2 territorios seguidos", &map, "Blue"));
        assert!(!evaluate_phrase("Conquistar 2 territorios seguidos", &map, "Red"));
    }

    #[test]
    fn test_eliminate_color() {
        let wiped = map_with(&[("Blue", 3), ("Red", 0), ("Red", 0)]);
        let alive = map_with(&[("Blue", 3), ("Red", 0), ("Red", 1)]);

        let phrase = "Eliminar todas as tropas da cor Red";
        assert!(evaluate_phrase(phrase, &wiped, "Blue"));
        assert!(!evaluate_phrase(phrase, &alive, "Blue"));
    }

    #[test]
    fn test_eliminate_absent_color_is_satisfied() {
        let map = map_with(&[("Blue", 3), ("Blue", 2)]);
        assert!(evaluate_phrase("Eliminar todas as tropas da cor Red.", &map, "Blue"));
    }

    #[test]
    fn test_unrecognized_never_satisfied() {
        let map = map_with(&[("Blue", 3)]);

        assert!(!evaluate_phrase("", &map, "Blue"));
        assert!(!evaluate_phrase("Possuir territorios", &map, "Blue"));
        assert!(!evaluate_phrase("Vencer", &map, "Blue"));
    }

    #[test]
    fn test_evaluation_is_pure() {
        let map = map_with(&[("Blue", 3), ("Red", 2), ("Blue", 1)]);
        let before = map.clone();
        let mission = Mission::new("Possuir 2 territorios");

        let first = evaluate(&mission, &map, "Blue");
        for _ in 0..5 {
            assert_eq!(evaluate(&mission, &map, "Blue"), first);
        }
        assert_eq!(map, before);
    }
}
