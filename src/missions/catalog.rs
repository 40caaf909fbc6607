//! The mission catalog and per-player mission draws.

use serde::{Deserialize, Serialize};

use super::mission::Mission;
use crate::core::rng::RandomSource;

/// Standard mission phrases, in draw order.
pub const DEFAULT_MISSIONS: [&str; 5] = [
    "Possuir 3 territorios",
    "Possuir 4 territorios",
    "Conquistar 2 territorios seguidos",
    "Eliminar todas as tropas da cor Red",
    "Possuir 5 territorios",
];

/// Ordered list of mission phrases that players draw from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionCatalog {
    phrases: Vec<String>,
}

impl MissionCatalog {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Draw one phrase uniformly. `None` for an empty catalog.
    pub fn draw(&self, rng: &mut impl RandomSource) -> Option<&str> {
        if self.phrases.is_empty() {
            return None;
        }
        let idx = rng.pick_index(self.phrases.len());
        Some(&self.phrases[idx])
    }
}

impl Default for MissionCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_MISSIONS)
    }
}

/// Draw a mission from `catalog` and bind a copy of it to `destination`.
///
/// With an empty catalog nothing is drawn and `destination` is left exactly
/// as it was.
pub fn assign_mission(
    destination: &mut Option<Mission>,
    catalog: &MissionCatalog,
    rng: &mut impl RandomSource,
) {
    if let Some(phrase) = catalog.draw(rng) {
        *destination = Some(Mission::new(phrase));
    }
}
