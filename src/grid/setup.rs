//! Initial board construction.
//!
//! Two passes over a blank board:
//!
//! 1. **Starting blocks**: each faction gets the 3x3 block around its corner
//!    anchor, owned and revealed. Factions are painted in roster order, so if
//!    two blocks overlap the later faction keeps the shared cells. The center
//!    cell is never painted by this pass.
//! 2. **Scatter**: `scatter_attempts` uniform random picks. A pick that lands
//!    on an unowned, non-center cell gives it to a random faction without
//!    revealing it. Any other pick is skipped, not retried.
//!
//! All randomness comes from the supplied [`GameRng`], so a fixed seed
//! reproduces the same board. The config is validated first; an unplayable
//! config is reported, never turned into a panic.

use tracing::{debug, warn};

use super::board::Board;
use crate::core::{ConfigError, GameRng, MatchConfig, Roster};

/// Build the starting board for `roster`.
pub fn setup(
    roster: &Roster,
    config: &MatchConfig,
    rng: &mut GameRng,
) -> Result<Board, ConfigError> {
    config.validate()?;
    let mut board = Board::new(config.side);

    paint_starting_blocks(&mut board, roster, config.anchor_inset);
    let placed = scatter(&mut board, roster, config.scatter_attempts, rng);

    debug!(
        side = config.side,
        factions = roster.len(),
        placed,
        attempts = config.scatter_attempts,
        "board setup complete"
    );

    Ok(board)
}

fn paint_starting_blocks(board: &mut Board, roster: &Roster, inset: usize) {
    let side = board.side();

    for faction in roster.factions() {
        let (ax, ay) = faction.corner.anchor(side, inset);

        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let x = ax as i64 + dx;
                let y = ay as i64 + dy;
                let Ok((x, y)) = board.checked_coord(x, y) else {
                    continue;
                };
                let Some(cell) = board.get_mut(x, y) else {
                    continue;
                };
                if cell.is_center() {
                    continue;
                }

                if let Some(previous) = cell.owner().filter(|&p| p != faction.id) {
                    warn!(
                        x,
                        y,
                        %previous,
                        faction = %faction.id,
                        "starting blocks overlap; later faction keeps the cell"
                    );
                }
                cell.set_owner(faction.id);
                cell.reveal();
            }
        }
    }
}

/// Returns how many placements landed.
fn scatter(board: &mut Board, roster: &Roster, attempts: usize, rng: &mut GameRng) -> usize {
    let side = board.side();
    let mut placed = 0;

    for _ in 0..attempts {
        let x = rng.gen_range_usize(0..side);
        let y = rng.gen_range_usize(0..side);
        let Some(cell) = board.get_mut(x, y) else {
            continue;
        };
        if cell.owner().is_some() || cell.is_center() {
            continue;
        }
        if let Some(faction) = rng.choose(roster.factions()) {
            cell.set_owner(faction.id);
            placed += 1;
        }
    }

    placed
}
