//! Per-player missions: catalog, parsing and evaluation.
//!
//! A mission is drawn once per player from a fixed catalog of phrases. The
//! phrase is parsed into a `MissionKind` at assignment time and the
//! structured form is what gets evaluated after every attack.
//!
//! Recognized phrase shapes, checked in order:
//! 1. "Possuir N territorios" - own at least N territories
//! 2. "Conquistar N ..." - same total-count check as (1)
//! 3. "Eliminar todas as tropas da cor X" - color X has zero troops left
//!
//! Anything else is `MissionKind::Unrecognized` and is never satisfied.

pub mod mission;
pub mod catalog;
pub mod evaluator;

pub use mission::{Mission, MissionKind};
pub use catalog::{assign_mission, MissionCatalog};
pub use evaluator::{evaluate, evaluate_phrase};
