//! End-to-end match tests on the reference 50x50 board.
//!
//! Setup is deterministic, so tests replay it with the same seed to learn
//! the true (hidden) ownership and pick target cells.

use alliance_grid::core::{GameRng, Roster};
use alliance_grid::grid::{setup, Board};
use alliance_grid::{
    CellChange, CellVisibility, ConfigError, Corner, Cue, Faction, FactionId, Match, MatchConfig,
    MatchError, MatchStatus, Outcome, UnitRecord, UnitRole,
};

const ME: FactionId = FactionId(1);

fn factions() -> Vec<Faction> {
    vec![
        Faction::new(FactionId(1), "Northern Dragons", Corner::TopLeft)
            .controlled()
            .with_color("blue"),
        Faction::new(FactionId(2), "Fire Legion", Corner::TopRight).with_color("red"),
        Faction::new(FactionId(3), "Shadow Hunters", Corner::BottomLeft).with_color("purple"),
        Faction::new(FactionId(4), "Golden Guild", Corner::BottomRight).with_color("yellow"),
    ]
}

fn replay(config: &MatchConfig, seed: u64) -> Board {
    let roster = Roster::new(factions()).unwrap();
    setup(&roster, config, &mut GameRng::new(seed)).unwrap()
}

/// First seed whose board leaves every listed cell unowned.
fn seed_with_unowned(config: &MatchConfig, cells: &[(usize, usize)]) -> u64 {
    (0..1000)
        .find(|&seed| {
            let board = replay(config, seed);
            cells
                .iter()
                .all(|&(x, y)| board.get(x, y).unwrap().owner().is_none())
        })
        .expect("some seed leaves the cells unowned")
}

// =============================================================================
// Reference Scenario
// =============================================================================

const FILLER: [(usize, usize); 4] = [(0, 0), (10, 20), (30, 5), (40, 40)];

#[test]
fn test_budget_exhausted_without_center_is_lost() {
    let config = MatchConfig::default();
    let mut targets = FILLER.to_vec();
    targets.push((45, 10));
    let seed = seed_with_unowned(&config, &targets);
    let mut game = Match::with_seed(factions(), config, seed).unwrap();

    let first = game.submit_move(0, 0).unwrap();
    assert!(first.consumed_move);
    assert_eq!(first.remaining_moves, 4);
    assert_eq!(first.status, MatchStatus::Playing);
    assert_eq!(first.change, CellChange::Claimed);

    for &(x, y) in &FILLER[1..] {
        let res = game.submit_move(x as i32, y as i32).unwrap();
        assert!(res.consumed_move);
        assert_eq!(res.status, MatchStatus::Playing);
    }

    let last = game.submit_move(45, 10).unwrap();
    assert_eq!(last.remaining_moves, 0);
    assert_eq!(last.status, MatchStatus::Lost);
    assert_eq!(last.cue(), Some(Cue::Error));
    assert_eq!(game.status(), MatchStatus::Lost);
}

#[test]
fn test_center_on_last_move_wins() {
    let config = MatchConfig::default();
    let seed = seed_with_unowned(&config, &FILLER);
    let mut game = Match::with_seed(factions(), config, seed).unwrap();

    for &(x, y) in &FILLER {
        game.submit_move(x as i32, y as i32).unwrap();
    }
    assert_eq!(game.remaining_moves(), 1);

    let res = game.submit_move(25, 25).unwrap();
    assert_eq!(res.outcome, Outcome::CenterWon);
    assert_eq!(res.status, MatchStatus::Won);
    assert_eq!(res.remaining_moves, 0);
    assert_eq!(res.cue(), Some(Cue::Success));
}

#[test]
fn test_out_of_bounds_moves() {
    let mut game = Match::with_seed(factions(), MatchConfig::default(), 3).unwrap();
    let before = game.board_view();

    assert_eq!(
        game.submit_move(50, 0),
        Err(MatchError::OutOfBounds { x: 50, y: 0, side: 50 })
    );
    assert_eq!(
        game.submit_move(0, -1),
        Err(MatchError::OutOfBounds { x: 0, y: -1, side: 50 })
    );

    assert_eq!(game.board_view(), before);
    assert_eq!(game.remaining_moves(), 5);
    assert_eq!(game.status(), MatchStatus::Playing);
}

// =============================================================================
// Move Rules
// =============================================================================

#[test]
fn test_starting_block_reclick_is_free() {
    let mut game = Match::with_seed(factions(), MatchConfig::default(), 11).unwrap();

    for _ in 0..10 {
        let res = game.submit_move(2, 2).unwrap();
        assert!(!res.consumed_move);
        assert_eq!(res.change, CellChange::Revisited);
        assert_eq!(res.cue(), Some(Cue::Click));
    }
    assert_eq!(game.remaining_moves(), 5);
}

#[test]
fn test_known_enemy_block_is_free() {
    let mut game = Match::with_seed(factions(), MatchConfig::default(), 11).unwrap();

    let res = game.submit_move(47, 47).unwrap();
    assert!(!res.consumed_move);
    assert_eq!(res.change, CellChange::Unchanged);
    assert_eq!(res.cue(), None);
    assert_eq!(game.remaining_moves(), 5);
}

#[test]
fn test_hidden_enemy_cell_is_scouted() {
    let config = MatchConfig::default();
    let seed = 5;
    let board = replay(&config, seed);
    let target = board
        .cells()
        .find(|c| !c.is_revealed() && c.owner().is_some_and(|o| o != ME))
        .expect("scatter places enemy territory");
    let enemy = target.owner().unwrap();

    let mut game = Match::with_seed(factions(), config, seed).unwrap();
    let (x, y) = (target.x(), target.y());
    assert_eq!(
        game.board_view().get(x, y).unwrap().visibility,
        CellVisibility::Hidden
    );

    let res = game.submit_move(x as i32, y as i32).unwrap();
    assert!(res.consumed_move);
    assert_eq!(res.change, CellChange::Exposed { owner: enemy });
    assert_eq!(res.cue(), Some(Cue::Error));
    assert_eq!(
        game.board_view().get(x, y).unwrap().visibility,
        CellVisibility::Owned(enemy)
    );
}

#[test]
fn test_view_never_leaks_hidden_owner() {
    let config = MatchConfig::default();
    let board = replay(&config, 21);
    let game = Match::with_seed(factions(), config, 21).unwrap();
    let view = game.board_view();

    for cell in board.cells() {
        let shown = view.get(cell.x(), cell.y()).unwrap();
        if cell.is_revealed() {
            assert_ne!(shown.visibility, CellVisibility::Hidden);
        } else {
            assert_eq!(shown.visibility, CellVisibility::Hidden);
        }
    }

    let legend = view.visible_territory();
    for id in 1..=4 {
        assert_eq!(legend[&FactionId(id)], 9);
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_terminal_match_ignores_moves() {
    let mut game = Match::with_seed(factions(), MatchConfig::default(), 1).unwrap();
    game.submit_move(25, 25).unwrap();
    assert_eq!(game.status(), MatchStatus::Won);

    let view = game.board_view();
    let history = game.history().len();
    for (x, y) in [(0, 0), (49, 49), (25, 25)] {
        let res = game.submit_move(x, y).unwrap();
        assert!(res.rejected);
        assert_eq!(res.status, MatchStatus::Won);
    }
    assert_eq!(game.board_view(), view);
    assert_eq!(game.history().len(), history);
}

#[test]
fn test_history_records_accepted_moves() {
    let config = MatchConfig::default().with_scatter_attempts(0);
    let mut game = Match::with_seed(factions(), config, 0).unwrap();

    game.submit_move(0, 0).unwrap();
    game.submit_move(2, 2).unwrap();
    game.submit_move(25, 25).unwrap();

    let history: Vec<_> = game.history().iter().copied().collect();
    assert_eq!(history.len(), 3);
    assert_eq!((history[0].x, history[0].y), (0, 0));
    assert_eq!(history[0].remaining_moves, 4);
    assert!(!history[1].consumed_move);
    assert_eq!(history[2].outcome, Outcome::CenterWon);
    assert_eq!(history[2].status, MatchStatus::Won);
}

// =============================================================================
// Creation
// =============================================================================

#[test]
fn test_create_with_entropy() {
    let game = Match::create(factions(), 5).unwrap();
    assert_eq!(game.status(), MatchStatus::Playing);
    assert_eq!(game.board_view().side(), 50);
    assert_eq!(game.factions().len(), 4);
}

#[test]
fn test_create_requires_one_controlled_faction() {
    let mut none = factions();
    none[0].controlled = false;
    assert_eq!(
        Match::create(none, 5).unwrap_err(),
        MatchError::Config(ConfigError::NoControlledFaction)
    );

    let mut two = factions();
    two[1].controlled = true;
    assert!(matches!(
        Match::create(two, 5),
        Err(MatchError::Config(ConfigError::MultipleControlledFactions(..)))
    ));
}

#[test]
fn test_units_are_display_only() {
    let units = vec![
        UnitRecord::new(1, "Dragon Warrior", 1500).with_level(25).with_role(UnitRole::Tank),
        UnitRecord::new(2, "Ice Mage", 1200).with_level(22).with_role(UnitRole::Dps),
    ];
    let config = MatchConfig::default();
    let mut with_units = Match::with_seed(factions(), config.clone(), 8)
        .unwrap()
        .with_units(units);
    let mut without = Match::with_seed(factions(), config, 8).unwrap();

    assert_eq!(with_units.units().len(), 2);
    assert_eq!(
        with_units.submit_move(25, 25).unwrap(),
        without.submit_move(25, 25).unwrap()
    );
}

#[test]
fn test_small_board_from_toml() {
    let config = MatchConfig::from_toml_str("side = 11\nmove_budget = 2\nscatter_attempts = 0")
        .unwrap();
    let mut game = Match::with_seed(factions(), config, 0).unwrap();

    assert_eq!(game.board_view().side(), 11);
    // Anchors sit at 2 and 8; the center is (5, 5).
    game.submit_move(0, 5).unwrap();
    let res = game.submit_move(5, 5).unwrap();
    assert_eq!(res.status, MatchStatus::Won);
}
