//! Ordered territory collection with ownership queries.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::territory::{Territory, TerritoryId};
use crate::core::error::{reserve_exact, Result};

/// The game map.
///
/// Length is fixed at construction. Only `owner` and `troops` of individual
/// territories change during play.
///
/// ```
/// use territory_missions::board::{Territory, TerritoryId, TerritoryMap};
///
/// let map = TerritoryMap::from_territories(&[
///     Territory::new("T1", "Blue", 3),
///     Territory::new("T2", "Red", 4),
/// ]).unwrap();
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.count_owned_by("Blue"), 1);
/// assert_eq!(map[TerritoryId::new(1)].troops, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryMap {
    territories: Vec<Territory>,
}

impl TerritoryMap {
    /// Build the map from its initial layout.
    ///
    /// The backing buffer is reserved up front; allocator failure is
    /// reported as `GameError::Allocation`.
    pub fn from_territories(layout: &[Territory]) -> Result<Self> {
        let mut territories = Vec::new();
        reserve_exact(&mut territories, layout.len(), "mapa")?;
        territories.extend_from_slice(layout);
        Ok(Self { territories })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index())
    }

    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id.index())
    }

    /// Iterate over (TerritoryId, &Territory) in map order.
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId(i), t))
    }

    /// Territories as a slice, in map order.
    #[must_use]
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Number of territories controlled by `color`.
    #[must_use]
    pub fn count_owned_by(&self, color: &str) -> usize {
        self.territories.iter().filter(|t| t.is_owned_by(color)).count()
    }

    /// Total troops stationed in territories controlled by `color`.
    #[must_use]
    pub fn troops_of(&self, color: &str) -> u64 {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(color))
            .map(|t| u64::from(t.troops))
            .sum()
    }

    /// Territory count per owner color.
    #[must_use]
    pub fn owner_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for t in &self.territories {
            *counts.entry(t.owner.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Borrow two distinct territories mutably at once.
    ///
    /// Returns `None` if the ids are equal or either is out of range.
    pub fn pair_mut(
        &mut self,
        first: TerritoryId,
        second: TerritoryId,
    ) -> Option<(&mut Territory, &mut Territory)> {
        let (a, b) = (first.index(), second.index());
        if a == b || a >= self.len() || b >= self.len() {
            return None;
        }

        if a < b {
            let (low, high) = self.territories.split_at_mut(b);
            Some((&mut low[a], &mut high[0]))
        } else {
            let (low, high) = self.territories.split_at_mut(a);
            Some((&mut high[0], &mut low[b]))
        }
    }
}

impl std::ops::Index<TerritoryId> for TerritoryMap {
    type Output = Territory;

    fn index(&self, id: TerritoryId) -> &Self::Output {
        &self.territories[id.index()]
    }
}

impl std::ops::IndexMut<TerritoryId> for TerritoryMap {
    fn index_mut(&mut self, id: TerritoryId) -> &mut Self::Output {
        &mut self.territories[id.index()]
    }
}
