//! Reveal and capture rules for a single move.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::Board;
use crate::core::{FactionId, MatchError};

/// Whether a move ended the match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    #[default]
    None,
    /// The controlled faction now holds the center.
    CenterWon,
}

/// What happened to the targeted cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellChange {
    /// Free re-click on revealed land the controlled faction owns.
    Revisited,
    /// The cell was already revealed and is not ours. Nothing changed.
    Unchanged,
    /// Unowned land taken by the controlled faction.
    Claimed,
    /// Hidden land that already belonged to the controlled faction.
    Recovered,
    /// Hidden enemy land revealed; the owner keeps it.
    Exposed { owner: FactionId },
}

/// Result of applying one move to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// True when the move costs one unit of the move budget.
    pub consumed_move: bool,
    pub outcome: Outcome,
    pub change: CellChange,
}

/// Apply a move by `controlled` at `(x, y)`.
///
/// - A revealed cell the controlled faction owns is a free re-click.
/// - Revealing a hidden cell costs a move. Unowned land is claimed; land
///   owned by anyone else keeps its owner.
/// - If the target is the center and it is now unowned or held by the
///   controlled faction, the controlled faction takes it and the match is
///   won. An enemy-held center is neither taken nor won.
pub fn reveal_and_resolve(
    board: &mut Board,
    x: usize,
    y: usize,
    controlled: FactionId,
) -> Result<Resolution, MatchError> {
    let side = board.side();
    let cell = board.get_mut(x, y).ok_or_else(|| MatchError::OutOfBounds {
        x: i64::try_from(x).unwrap_or(i64::MAX),
        y: i64::try_from(y).unwrap_or(i64::MAX),
        side,
    })?;

    if cell.is_revealed() && cell.is_owned_by(controlled) {
        return Ok(Resolution {
            consumed_move: false,
            outcome: Outcome::None,
            change: CellChange::Revisited,
        });
    }

    let was_revealed = cell.is_revealed();
    cell.reveal();

    let change = if was_revealed {
        CellChange::Unchanged
    } else {
        match cell.owner() {
            None => {
                cell.set_owner(controlled);
                CellChange::Claimed
            }
            Some(owner) if owner == controlled => CellChange::Recovered,
            Some(owner) => CellChange::Exposed { owner },
        }
    };

    let mut outcome = Outcome::None;
    if cell.is_center() && cell.owner().map_or(true, |owner| owner == controlled) {
        cell.set_owner(controlled);
        outcome = Outcome::CenterWon;
    }

    let resolution = Resolution {
        consumed_move: !was_revealed,
        outcome,
        change,
    };
    debug!(x, y, ?resolution, "move resolved");

    Ok(resolution)
}
