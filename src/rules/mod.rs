//! Match lifecycle: the `playing -> won | lost` state machine wrapped
//! around the grid engine.
//!
//! The host only talks to [`Match`]; it never mutates the board directly.

pub mod session;
pub mod status;

pub use session::{Match, MoveRecord};
pub use status::{Cue, MatchStatus, MoveResult};
