//! Friendly unit records supplied by the host.
//!
//! Units are shown next to the board but have no effect on the rules.

use serde::{Deserialize, Serialize};

/// Battlefield role of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitRole {
    Tank,
    Dps,
    Support,
    Leader,
}

/// Display record for one friendly unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub id: u32,
    pub name: String,
    pub power: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UnitRole>,
}

impl UnitRecord {
    pub fn new(id: u32, name: impl Into<String>, power: u32) -> Self {
        Self {
            id,
            name: name.into(),
            power,
            level: 0,
            role: None,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: UnitRole) -> Self {
        self.role = Some(role);
        self
    }
}
