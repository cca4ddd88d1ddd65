use thiserror::Error;

use super::faction::FactionId;

/// Invalid setup input. Fatal to match creation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("faction roster is empty")]
    EmptyRoster,

    #[error("no faction is marked as controlled")]
    NoControlledFaction,

    #[error("more than one controlled faction: {0} and {1}")]
    MultipleControlledFactions(FactionId, FactionId),

    #[error("duplicate faction id: {0}")]
    DuplicateFaction(FactionId),

    #[error("board side must be at least 1, got {0}")]
    InvalidSide(usize),

    #[error("move budget must be at least 1")]
    ZeroMoveBudget,

    #[error("anchor inset {inset} does not fit a board of side {side}")]
    InvalidInset { inset: usize, side: usize },

    #[error("could not parse match config: {0}")]
    Parse(String),
}

/// Errors surfaced by match operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cell ({x}, {y}) is outside a {side}x{side} board")]
    OutOfBounds { x: i64, y: i64, side: usize },
}

pub type Result<T> = std::result::Result<T, MatchError>;
