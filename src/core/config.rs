//! Match configuration.
//!
//! Hosts either take the reference defaults (50x50 board, 5 moves,
//! 200 scatter attempts, anchors 2 cells in from each edge) or adjust them
//! with the builder methods. A config can also be read from TOML:
//!
//! ```
//! use alliance_grid::core::MatchConfig;
//!
//! let config = MatchConfig::from_toml_str("side = 20\nmove_budget = 8").unwrap();
//! assert_eq!(config.side, 20);
//! assert_eq!(config.move_budget, 8);
//! assert_eq!(config.scatter_attempts, 200);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Reference board side length.
pub const DEFAULT_SIDE: usize = 50;
/// Reference move budget.
pub const DEFAULT_MOVE_BUDGET: u32 = 5;
/// Reference number of random territory placements.
pub const DEFAULT_SCATTER_ATTEMPTS: usize = 200;
/// Reference distance of a starting anchor from each edge.
pub const DEFAULT_ANCHOR_INSET: usize = 2;

/// Board and turn parameters for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Board side length N.
    pub side: usize,

    /// Moves the controlled faction may spend.
    pub move_budget: u32,

    /// Random placement attempts during setup. Collisions are skipped,
    /// so the placed count is at most this.
    pub scatter_attempts: usize,

    /// Distance of each starting anchor from the board edges.
    pub anchor_inset: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            move_budget: DEFAULT_MOVE_BUDGET,
            scatter_attempts: DEFAULT_SCATTER_ATTEMPTS,
            anchor_inset: DEFAULT_ANCHOR_INSET,
        }
    }
}

impl MatchConfig {
    /// Reference configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub fn with_move_budget(mut self, budget: u32) -> Self {
        self.move_budget = budget;
        self
    }

    #[must_use]
    pub fn with_scatter_attempts(mut self, attempts: usize) -> Self {
        self.scatter_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_anchor_inset(mut self, inset: usize) -> Self {
        self.anchor_inset = inset;
        self
    }

    /// Parse from TOML. Missing keys take reference defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parameters describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side == 0 {
            return Err(ConfigError::InvalidSide(self.side));
        }
        if self.move_budget == 0 {
            return Err(ConfigError::ZeroMoveBudget);
        }
        if self.anchor_inset >= self.side {
            return Err(ConfigError::InvalidInset {
                inset: self.anchor_inset,
                side: self.side,
            });
        }
        Ok(())
    }
}
