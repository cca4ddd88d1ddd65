//! # alliance-grid
//!
//! Engine for the alliance battle minigame: a fog-of-war territory capture
//! played on a square grid with a small move budget.
//!
//! ## Rules in brief
//!
//! - Each faction starts with a revealed 3x3 block near its corner.
//! - Setup scatters hidden territory across the board from a seeded RNG.
//! - Revealing a hidden cell costs a move. Empty land is claimed; enemy land
//!   is only scouted.
//! - Claiming the center cell wins. Spending the last move without holding
//!   the center loses.
//!
//! ## Modules
//!
//! - `core`: factions, units, configuration, errors, RNG
//! - `grid`: board state, setup, reveal/capture rules, display views
//! - `rules`: match lifecycle and per-move results
//!
//! ## Example
//!
//! ```
//! use alliance_grid::{Corner, Faction, FactionId, Match, MatchConfig, MatchStatus};
//!
//! let factions = vec![
//!     Faction::new(FactionId::new(1), "North", Corner::TopLeft).controlled(),
//!     Faction::new(FactionId::new(2), "Legion", Corner::BottomRight),
//! ];
//! let mut game = Match::with_seed(factions, MatchConfig::default(), 7).unwrap();
//!
//! let result = game.submit_move(25, 25).unwrap();
//! assert_eq!(result.status, MatchStatus::Won);
//! ```

pub mod core;
pub mod grid;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Corner, Faction, FactionId, GameRng, MatchConfig, MatchError,
    Roster, UnitRecord, UnitRole,
};

pub use crate::grid::{
    reveal_and_resolve, setup, Board, BoardView, Cell, CellChange, CellView, CellVisibility,
    Outcome, Resolution,
};

pub use crate::rules::{Cue, Match, MatchStatus, MoveRecord, MoveResult};
