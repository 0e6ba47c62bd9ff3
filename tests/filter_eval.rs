// tests/filter_eval.rs
//
// Filter Evaluator properties: identity, inclusive bounds, narrowing,
// idempotence, and the concrete scenarios from the design notes.
//
use league_bubbles::filter::{BoundPair, FilterState, SeasonPick, TeamPick, parse_bound};
use league_bubbles::records::{Record, RecordStore};

fn rec(team: &str, gf: u32, ga: u32, points: u32, position: u32, season: u16) -> Record {
    Record { team: team.into(), gf, ga, points, position, season }
}

fn sample_store() -> RecordStore {
    RecordStore::new(vec![
        rec("A", 80, 20, 90, 1, 2020),
        rec("B", 40, 60, 30, 19, 2020),
        rec("C", 65, 35, 70, 4, 2021),
        rec("D", 52, 48, 52, 10, 2021),
        rec("E", 95, 30, 95, 1, 2021),
    ])
    .unwrap()
}

#[test]
fn default_filter_is_identity() {
    let store = sample_store();
    let visible = FilterState::default().apply(&store);
    assert_eq!(visible, (0..store.len()).collect::<Vec<_>>());
}

#[test]
fn season_and_goals_scenario() {
    // Season 2020, goalsMin 50 -> only A survives (B fails goalsMin).
    let store = sample_store();
    let filter = FilterState {
        season: SeasonPick::Year(2020),
        goals: BoundPair { min: Some(50), max: None },
        ..FilterState::default()
    };
    let visible = filter.apply(&store);
    assert_eq!(visible.len(), 1);
    assert_eq!(store.records()[visible[0]].team, "A");
}

#[test]
fn unset_max_defaults_to_dataset_max_inclusive() {
    // Dataset max points = 95; E has exactly 95 and must be included.
    let store = sample_store();
    assert_eq!(store.max_points(), 95);

    let filter = FilterState {
        points: BoundPair { min: Some(40), max: None },
        ..FilterState::default()
    };
    let visible = filter.apply(&store);
    assert!(visible.iter().any(|&i| store.records()[i].team == "E"));
}

#[test]
fn team_filter_exact_match() {
    let store = sample_store();
    let filter = FilterState {
        team: TeamPick::Name("C".into()),
        ..FilterState::default()
    };
    let visible = filter.apply(&store);
    assert_eq!(visible.len(), 1);
    assert_eq!(store.records()[visible[0]].team, "C");
}

#[test]
fn empty_result_is_valid() {
    let store = sample_store();
    let filter = FilterState {
        season: SeasonPick::Year(2019),
        ..FilterState::default()
    };
    assert!(filter.apply(&store).is_empty());
}

#[test]
fn narrowing_yields_subset() {
    let store = sample_store();
    let wide = FilterState {
        goals: BoundPair { min: Some(30), max: None },
        ..FilterState::default()
    };
    // Strictly narrower on two predicates.
    let narrow = FilterState {
        goals: BoundPair { min: Some(50), max: None },
        points: BoundPair { min: Some(60), max: None },
        ..FilterState::default()
    };

    let wide_ix = wide.apply(&store);
    let narrow_ix = narrow.apply(&store);
    assert!(narrow_ix.iter().all(|i| wide_ix.contains(i)));
}

#[test]
fn apply_is_idempotent() {
    let store = sample_store();
    let filter = FilterState {
        season: SeasonPick::Year(2021),
        position: BoundPair { min: Some(1), max: Some(5) },
        ..FilterState::default()
    };
    let a = filter.apply(&store);
    let b = filter.apply(&store);
    assert_eq!(a, b);
}

#[test]
fn position_bounds_are_inclusive() {
    let store = sample_store();
    let filter = FilterState {
        position: BoundPair { min: Some(19), max: Some(19) },
        ..FilterState::default()
    };
    let visible = filter.apply(&store);
    assert_eq!(visible.len(), 1);
    assert_eq!(store.records()[visible[0]].team, "B");
}

#[test]
fn malformed_bound_text_is_unset() {
    assert_eq!(parse_bound(""), None);
    assert_eq!(parse_bound("  "), None);
    assert_eq!(parse_bound("abc"), None);
    assert_eq!(parse_bound("-5"), None); // not a u32
    assert_eq!(parse_bound(" 42 "), Some(42));
}
