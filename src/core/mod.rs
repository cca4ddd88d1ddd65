//! Core types: factions, units, configuration, errors, RNG.
//!
//! These are the inputs a host supplies to create a match and the
//! error taxonomy every operation reports through.

pub mod config;
pub mod error;
pub mod faction;
pub mod rng;
pub mod unit;

pub use config::MatchConfig;
pub use error::{ConfigError, MatchError, Result};
pub use faction::{Corner, Faction, FactionId, Roster};
pub use rng::GameRng;
pub use unit::{UnitRecord, UnitRole};
