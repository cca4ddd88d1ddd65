//! Read-only board snapshots for display layers.
//!
//! A view never exposes the owner of an unrevealed cell; the display only
//! learns that the cell is hidden. The center marker stays visible so the
//! objective can always be drawn.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::FactionId;

/// What the controlled faction knows about a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "owner", rename_all = "snake_case")]
pub enum CellVisibility {
    /// Fog of war.
    Hidden,
    Unowned,
    Owned(FactionId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub x: usize,
    pub y: usize,
    pub is_center: bool,
    pub visibility: CellVisibility,
}

impl CellView {
    pub(crate) fn from_cell(cell: &Cell) -> Self {
        let visibility = if !cell.is_revealed() {
            CellVisibility::Hidden
        } else {
            match cell.owner() {
                Some(owner) => CellVisibility::Owned(owner),
                None => CellVisibility::Unowned,
            }
        };

        Self {
            x: cell.x(),
            y: cell.y(),
            is_center: cell.is_center(),
            visibility,
        }
    }
}

/// Snapshot of the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    side: usize,
    cells: Vec<CellView>,
}

impl BoardView {
    pub(crate) fn new(side: usize, cells: Vec<CellView>) -> Self {
        Self { side, cells }
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&CellView> {
        if x < self.side && y < self.side {
            self.cells.get(y * self.side + x)
        } else {
            None
        }
    }

    /// Cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.cells.iter()
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.side)
    }

    /// Revealed cell count per owning faction, for the legend.
    #[must_use]
    pub fn visible_territory(&self) -> FxHashMap<FactionId, usize> {
        let mut counts = FxHashMap::default();
        for cell in &self.cells {
            if let CellVisibility::Owned(owner) = cell.visibility {
                *counts.entry(owner).or_insert(0) += 1;
            }
        }
        counts
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.visibility == CellVisibility::Hidden)
            .count()
    }
}
