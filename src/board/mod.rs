//! The territory map.
//!
//! The map is a fixed-length, ordered list of territories. Territories are
//! never added or removed once a game starts; combat only rewrites their
//! `owner` and `troops` fields in place.
//!
//! ## Key Types
//!
//! - `Territory`: name, owning color, troop count
//! - `TerritoryId`: position of a territory on the map
//! - `TerritoryMap`: the ordered collection with ownership queries

pub mod territory;
pub mod map;

pub use territory::{Territory, TerritoryId};
pub use map::TerritoryMap;
