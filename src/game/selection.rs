//! Random attacker/defender selection.
//!
//! Both searches draw uniformly over the whole map and accept the first
//! eligible territory. They give up after a fixed number of draws even if an
//! eligible territory exists, so a turn can be skipped by bad luck.

use crate::board::{Territory, TerritoryId, TerritoryMap};
use crate::core::rng::RandomSource;

/// Draw up to `attempts` territories and return the first one matching
/// `eligible`.
pub fn search(
    map: &TerritoryMap,
    attempts: u32,
    rng: &mut impl RandomSource,
    eligible: impl Fn(&Territory) -> bool,
) -> Option<TerritoryId> {
    if map.is_empty() {
        return None;
    }

    for _ in 0..attempts {
        let id = TerritoryId::new(rng.pick_index(map.len()));
        if eligible(&map[id]) {
            return Some(id);
        }
    }
    None
}

/// A territory owned by `color` that can attack (more than one troop).
pub fn select_attacker(
    map: &TerritoryMap,
    color: &str,
    attempts: u32,
    rng: &mut impl RandomSource,
) -> Option<TerritoryId> {
    search(map, attempts, rng, |t| t.is_owned_by(color) && t.can_attack())
}

/// Any territory not owned by `color`.
pub fn select_defender(
    map: &TerritoryMap,
    color: &str,
    attempts: u32,
    rng: &mut impl RandomSource,
) -> Option<TerritoryId> {
    search(map, attempts, rng, |t| !t.is_owned_by(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    /// Returns scripted indices in order.
    struct Picks(Vec<usize>);

    impl RandomSource for Picks {
        fn roll_die(&mut self) -> u8 {
            panic!("selection never rolls dice")
        }

        fn pick_index(&mut self, len: usize) -> usize {
            let idx = self.0.remove(0);
            assert!(idx < len);
            idx
        }
    }

    fn map() -> TerritoryMap {
        TerritoryMap::from_territories(&[
            Territory::new("T1", "Blue", 1),
            Territory::new("T2", "Red", 4),
            Territory::new("T3", "Blue", 3),
            Territory::new("T4", "Red", 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_attacker_skips_ineligible_draws() {
        // T2 is Red, T1 has one troop, T3 qualifies.
        let mut picks = Picks(vec![1, 0, 2]);
        assert_eq!(select_attacker(&map(), "Blue", 20, &mut picks), Some(TerritoryId(2)));
        assert!(picks.0.is_empty());
    }

    #[test]
    fn test_defender_accepts_any_enemy_troops() {
        let mut picks = Picks(vec![2, 3]);
        assert_eq!(select_defender(&map(), "Blue", 20, &mut picks), Some(TerritoryId(3)));
    }

    #[test]
    fn test_gives_up_after_budget() {
        let mut picks = Picks(vec![0, 0, 0, 2]);
        assert_eq!(select_attacker(&map(), "Blue", 3, &mut picks), None);
        assert_eq!(picks.0, vec![2]);
    }

    #[test]
    fn test_no_eligible_territory() {
        let all_blue = TerritoryMap::from_territories(&[
            Territory::new("T1", "Blue", 5),
            Territory::new("T2", "Blue", 5),
        ])
        .unwrap();
        let mut rng = GameRng::new(3);

        assert_eq!(select_defender(&all_blue, "Blue", 20, &mut rng), None);
        assert_eq!(select_attacker(&all_blue, "Red", 20, &mut rng), None);
    }

    #[test]
    fn test_seeded_selection_is_valid() {
        let map = map();
        let mut rng = GameRng::new(17);

        for _ in 0..50 {
            if let Some(id) = select_attacker(&map, "Red", 20, &mut rng) {
                assert!(map[id].is_owned_by("Red") && map[id].can_attack());
            }
            if let Some(id) = select_defender(&map, "Red", 20, &mut rng) {
                assert!(!map[id].is_owned_by("Red"));
            }
        }
    }
}
