//! The square board a match is played on.
//!
//! Cells are stored row-major in a single `Vec`, so `(x, y)` lives at
//! `y * side + x`.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::view::{BoardView, CellView};
use crate::core::{FactionId, MatchError};

/// N x N grid of cells with a single center cell at `(N/2, N/2)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of unowned, unrevealed cells.
    ///
    /// # Panics
    ///
    /// Panics if `side` is zero. [`MatchConfig::validate`](crate::core::MatchConfig::validate)
    /// rejects that before a match builds its board.
    #[must_use]
    pub fn new(side: usize) -> Self {
        assert!(side > 0, "Board side must be at least 1");

        let center = side / 2;
        let mut cells = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                cells.push(Cell::new(x, y, x == center && y == center));
            }
        }

        Self { side, cells }
    }

    /// Side length N.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Coordinates of the objective cell.
    #[must_use]
    pub fn center(&self) -> (usize, usize) {
        (self.side / 2, self.side / 2)
    }

    #[must_use]
    pub fn center_cell(&self) -> &Cell {
        let (x, y) = self.center();
        &self.cells[self.index(x, y)]
    }

    /// Check signed host coordinates and convert them to board indices.
    pub fn checked_coord(&self, x: i64, y: i64) -> Result<(usize, usize), MatchError> {
        let side = self.side;
        let convert = |v: i64| usize::try_from(v).ok().filter(|&v| v < side);
        match (convert(x), convert(y)) {
            (Some(cx), Some(cy)) => Ok((cx, cy)),
            _ => Err(MatchError::OutOfBounds { x, y, side }),
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let i = self.index(x, y);
            Some(&mut self.cells[i])
        } else {
            None
        }
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells owned by `faction`, revealed or not.
    #[must_use]
    pub fn territory(&self, faction: FactionId) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(faction)).count()
    }

    /// Snapshot safe to hand to a display layer.
    ///
    /// Unrevealed cells carry no ownership information.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::new(self.side, self.cells.iter().map(CellView::from_cell).collect())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.side + x
    }
}
