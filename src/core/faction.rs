//! Factions (alliances) and the roster a match is created from.
//!
//! ## FactionId
//!
//! Opaque identifier chosen by the host. The engine only compares ids.
//!
//! ## Roster
//!
//! Validated list of factions with exactly one controlled faction.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Faction identifier, assigned by the host application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FactionId(pub u32);

impl FactionId {
    /// Create a new faction ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Faction({})", self.0)
    }
}

/// Board corner a faction starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All four corners, in roster display order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Center of the 3x3 starting block for a board of `side` cells.
    ///
    /// `inset` is the distance from each edge; `x` grows rightwards and `y`
    /// grows downwards.
    #[must_use]
    pub fn anchor(self, side: usize, inset: usize) -> (usize, usize) {
        let far = side.saturating_sub(inset + 1);
        match self {
            Corner::TopLeft => (inset, inset),
            Corner::TopRight => (far, inset),
            Corner::BottomLeft => (inset, far),
            Corner::BottomRight => (far, far),
        }
    }
}

/// A competing alliance.
///
/// Display fields (`color`, `total_power`) are carried for the host and are
/// never read by the rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    pub id: FactionId,
    pub name: String,
    pub corner: Corner,
    /// True for the faction the local player commands.
    #[serde(default)]
    pub controlled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub total_power: u64,
}

impl Faction {
    /// Create an uncontrolled faction.
    pub fn new(id: FactionId, name: impl Into<String>, corner: Corner) -> Self {
        Self {
            id,
            name: name.into(),
            corner,
            controlled: false,
            color: None,
            total_power: 0,
        }
    }

    /// Mark as the controlled faction.
    #[must_use]
    pub fn controlled(mut self) -> Self {
        self.controlled = true;
        self
    }

    /// Attach a display color tag.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attach the alliance's total power for display.
    #[must_use]
    pub fn with_total_power(mut self, power: u64) -> Self {
        self.total_power = power;
        self
    }
}

/// Validated faction list.
///
/// Order is preserved: it is the order starting blocks are painted in.
#[derive(Clone, Debug)]
pub struct Roster {
    factions: Vec<Faction>,
    index: FxHashMap<FactionId, usize>,
    controlled: FactionId,
}

impl Roster {
    /// Validate `factions`.
    ///
    /// Fails if the list is empty, has duplicate ids, or does not have
    /// exactly one controlled faction.
    pub fn new(factions: Vec<Faction>) -> Result<Self, ConfigError> {
        if factions.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }

        let mut index = FxHashMap::default();
        for (i, faction) in factions.iter().enumerate() {
            if index.insert(faction.id, i).is_some() {
                return Err(ConfigError::DuplicateFaction(faction.id));
            }
        }

        let mut controlled = factions.iter().filter(|f| f.controlled).map(|f| f.id);
        let first = controlled.next().ok_or(ConfigError::NoControlledFaction)?;
        if let Some(second) = controlled.next() {
            return Err(ConfigError::MultipleControlledFactions(first, second));
        }

        Ok(Self {
            factions,
            index,
            controlled: first,
        })
    }

    /// The faction the player commands.
    #[must_use]
    pub fn controlled(&self) -> FactionId {
        self.controlled
    }

    /// Look up a faction by id.
    #[must_use]
    pub fn get(&self, id: FactionId) -> Option<&Faction> {
        self.index.get(&id).map(|&i| &self.factions[i])
    }

    /// Factions in roster order.
    #[must_use]
    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    /// Faction ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = FactionId> + '_ {
        self.factions.iter().map(|f| f.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factions.len()
    }

    /// Always false for a validated roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }
}
