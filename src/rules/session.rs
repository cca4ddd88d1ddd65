//! The match state machine.
//!
//! A `Match` owns its board exclusively and processes one move at a time:
//!
//! ```text
//! playing --move--------------------------------> playing
//! playing --move captures center----------------> won
//! playing --last move spent, center not ours----> lost
//! ```
//!
//! The win check runs before the loss check, so spending the last move on
//! the center still wins. Requests made after the match is over, or with no
//! moves left, are silently ignored.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::status::{MatchStatus, MoveResult};
use crate::core::{Faction, FactionId, GameRng, MatchConfig, Result, Roster, UnitRecord};
use crate::grid::{self, Board, BoardView, CellChange, Outcome};

/// One accepted move, as kept in the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub x: usize,
    pub y: usize,
    pub change: CellChange,
    pub outcome: Outcome,
    pub consumed_move: bool,
    /// Moves left after this one.
    pub remaining_moves: u32,
    pub status: MatchStatus,
}

/// A single game session.
#[derive(Clone, Debug)]
pub struct Match {
    board: Board,
    roster: Roster,
    units: Vec<UnitRecord>,
    config: MatchConfig,
    remaining_moves: u32,
    status: MatchStatus,
    history: Vector<MoveRecord>,
}

impl Match {
    /// Create a match on the reference board with an entropy-seeded setup.
    ///
    /// Fails if the roster is invalid. A `move_budget` of zero is rejected
    /// with [`ConfigError::ZeroMoveBudget`](crate::core::ConfigError) rather
    /// than producing a match that is lost before the first move.
    pub fn create(factions: Vec<Faction>, move_budget: u32) -> Result<Self> {
        let config = MatchConfig::default().with_move_budget(move_budget);
        Self::with_config(factions, config, &mut GameRng::from_entropy())
    }

    /// Create a match whose setup is reproducible from `seed`.
    pub fn with_seed(factions: Vec<Faction>, config: MatchConfig, seed: u64) -> Result<Self> {
        Self::with_config(factions, config, &mut GameRng::new(seed))
    }

    /// Create a match with explicit configuration and random source.
    pub fn with_config(
        factions: Vec<Faction>,
        config: MatchConfig,
        rng: &mut GameRng,
    ) -> Result<Self> {
        config.validate()?;
        let roster = Roster::new(factions)?;
        let board = grid::setup(&roster, &config, rng)?;

        info!(
            seed = rng.seed(),
            side = config.side,
            move_budget = config.move_budget,
            controlled = %roster.controlled(),
            "match created"
        );

        Ok(Self {
            board,
            roster,
            units: Vec::new(),
            remaining_moves: config.move_budget,
            config,
            status: MatchStatus::Playing,
            history: Vector::new(),
        })
    }

    /// Attach the host's friendly unit roster. Display only.
    #[must_use]
    pub fn with_units(mut self, units: Vec<UnitRecord>) -> Self {
        self.units = units;
        self
    }

    /// Apply a move at `(x, y)` for the controlled faction.
    ///
    /// Coordinates outside the board are an error and leave the match
    /// untouched. A match that is over or out of moves returns a result
    /// with `rejected` set.
    pub fn submit_move(&mut self, x: i32, y: i32) -> Result<MoveResult> {
        let (x, y) = self.board.checked_coord(i64::from(x), i64::from(y))?;

        if self.status.is_terminal() || self.remaining_moves == 0 {
            debug!(x, y, status = %self.status, remaining = self.remaining_moves, "move ignored");
            return Ok(MoveResult::rejected(self.status, self.remaining_moves));
        }

        let controlled = self.roster.controlled();
        let resolution = grid::reveal_and_resolve(&mut self.board, x, y, controlled)?;

        if resolution.consumed_move {
            self.remaining_moves -= 1;
        }

        if resolution.outcome == Outcome::CenterWon {
            self.finish(MatchStatus::Won);
        } else if resolution.consumed_move
            && self.remaining_moves == 0
            && !self.board.center_cell().is_owned_by(controlled)
        {
            self.finish(MatchStatus::Lost);
        }

        self.history.push_back(MoveRecord {
            x,
            y,
            change: resolution.change,
            outcome: resolution.outcome,
            consumed_move: resolution.consumed_move,
            remaining_moves: self.remaining_moves,
            status: self.status,
        });

        Ok(MoveResult {
            consumed_move: resolution.consumed_move,
            outcome: resolution.outcome,
            status: self.status,
            remaining_moves: self.remaining_moves,
            change: resolution.change,
            rejected: false,
        })
    }

    fn finish(&mut self, status: MatchStatus) {
        info!(
            %status,
            moves_used = self.config.move_budget - self.remaining_moves,
            territory = self.board.territory(self.roster.controlled()),
            "match finished"
        );
        self.status = status;
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    #[must_use]
    pub fn remaining_moves(&self) -> u32 {
        self.remaining_moves
    }

    #[must_use]
    pub fn move_budget(&self) -> u32 {
        self.config.move_budget
    }

    /// Display snapshot. Unrevealed cells show only as hidden.
    #[must_use]
    pub fn board_view(&self) -> BoardView {
        self.board.view()
    }

    #[must_use]
    pub fn controlled_faction(&self) -> FactionId {
        self.roster.controlled()
    }

    #[must_use]
    pub fn factions(&self) -> &[Faction] {
        self.roster.factions()
    }

    #[must_use]
    pub fn units(&self) -> &[UnitRecord] {
        &self.units
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Accepted moves, oldest first. Rejected requests are not recorded.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }
}
