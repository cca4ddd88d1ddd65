//! Grid engine: board state, setup, and the per-move reveal/capture rules.

pub mod board;
pub mod cell;
pub mod resolve;
pub mod setup;
pub mod view;

pub use board::Board;
pub use cell::Cell;
pub use resolve::{reveal_and_resolve, CellChange, Outcome, Resolution};
pub use setup::setup;
pub use view::{BoardView, CellView, CellVisibility};
