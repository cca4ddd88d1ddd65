//! Match lifecycle status and per-move results.

use serde::{Deserialize, Serialize};

use crate::grid::{CellChange, Outcome};

/// Lifecycle of a match. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl MatchStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::Playing)
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchStatus::Playing => "playing",
            MatchStatus::Won => "won",
            MatchStatus::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Abstract feedback cue. The host decides what each one sounds like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Click,
    Success,
    Error,
}

/// Structured result of `Match::submit_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub consumed_move: bool,
    pub outcome: Outcome,
    /// Status after the move.
    pub status: MatchStatus,
    pub remaining_moves: u32,
    pub change: CellChange,
    /// The match was over or out of moves and ignored the request.
    pub rejected: bool,
}

impl MoveResult {
    pub(crate) fn rejected(status: MatchStatus, remaining_moves: u32) -> Self {
        Self {
            consumed_move: false,
            outcome: Outcome::None,
            status,
            remaining_moves,
            change: CellChange::Unchanged,
            rejected: true,
        }
    }

    /// Feedback cue a host can play for this move.
    ///
    /// A center win or a claim gives `Success`; exposing enemy land or
    /// running out of moves gives `Error`; a free re-click on friendly land
    /// gives `Click`. Everything else, including rejected requests, is silent.
    #[must_use]
    pub fn cue(&self) -> Option<Cue> {
        if self.rejected {
            return None;
        }
        if self.outcome == Outcome::CenterWon {
            return Some(Cue::Success);
        }
        if self.status == MatchStatus::Lost {
            return Some(Cue::Error);
        }
        match self.change {
            CellChange::Revisited => Some(Cue::Click),
            CellChange::Claimed => Some(Cue::Success),
            CellChange::Exposed { .. } => Some(Cue::Error),
            CellChange::Recovered | CellChange::Unchanged => None,
        }
    }
}
