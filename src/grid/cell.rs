use serde::{Deserialize, Serialize};

use crate::core::FactionId;

/// One grid unit.
///
/// Coordinates and the center flag are fixed at construction; owner and
/// revealed state change only through setup and move resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    x: usize,
    y: usize,
    owner: Option<FactionId>,
    revealed: bool,
    is_center: bool,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize, is_center: bool) -> Self {
        Self {
            x,
            y,
            owner: None,
            revealed: false,
            is_center,
        }
    }

    #[must_use]
    pub fn x(&self) -> usize {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> usize {
        self.y
    }

    /// True owner, including fog-of-war territory.
    #[must_use]
    pub fn owner(&self) -> Option<FactionId> {
        self.owner
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_center(&self) -> bool {
        self.is_center
    }

    #[must_use]
    pub fn is_owned_by(&self, faction: FactionId) -> bool {
        self.owner == Some(faction)
    }

    pub(crate) fn set_owner(&mut self, owner: FactionId) {
        self.owner = Some(owner);
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }
}
