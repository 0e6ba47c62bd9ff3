// tests/scales.rs
//
// Geometry mapping: fit-once semantics and the "masking not rescaling"
// invariant — a record's geometry never depends on the current filter.
//
use league_bubbles::config::consts::*;
use league_bubbles::filter::{BoundPair, FilterState, SeasonPick};
use league_bubbles::records::{Record, RecordStore};
use league_bubbles::scales::{Rgb, Scales, magma};

fn rec(team: &str, gf: u32, ga: u32, points: u32, position: u32, season: u16) -> Record {
    Record { team: team.into(), gf, ga, points, position, season }
}

fn sample_store() -> RecordStore {
    RecordStore::new(vec![
        rec("A", 80, 20, 90, 1, 2020),
        rec("B", 40, 60, 30, 19, 2020),
        rec("C", 100, 35, 70, 4, 2021),
    ])
    .unwrap()
}

#[test]
fn x_scale_spans_plot_area() {
    let store = sample_store();
    let scales = Scales::fit(&store);

    // gf 0 -> left margin, observed max gf -> right edge of the plot.
    assert_eq!(scales.x.map(0.0), MARGIN_LEFT);
    assert_eq!(scales.x.map(store.max_gf() as f32), CHART_W - MARGIN_RIGHT);
}

#[test]
fn y_scale_is_inverted() {
    let store = sample_store();
    let scales = Scales::fit(&store);

    // ga 0 anchors at the baseline; max ga at the top margin.
    assert_eq!(scales.y.map(0.0), CHART_H - MARGIN_BOTTOM);
    assert_eq!(scales.y.map(store.max_ga() as f32), MARGIN_TOP);
}

#[test]
fn radius_is_area_proportional() {
    let store = sample_store();
    let scales = Scales::fit(&store);
    let max = store.max_points() as f32;

    assert_eq!(scales.size.map(0.0), RADIUS_MIN);
    assert_eq!(scales.size.map(max), RADIUS_MAX);
    // Square-root encoding: a quarter of the domain lands at the midpoint
    // of the radius range, not a quarter of it.
    let mid = scales.size.map(max / 4.0);
    assert!((mid - (RADIUS_MIN + RADIUS_MAX) / 2.0).abs() < 1e-3);
}

#[test]
fn color_covers_position_domain() {
    let store = sample_store();
    let scales = Scales::fit(&store);

    assert_eq!(scales.color.map(1), magma(0.0));
    assert_eq!(scales.color.map(20), magma(1.0));
    assert_eq!(magma(0.0), Rgb { r: 0x00, g: 0x00, b: 0x04 });
    assert_eq!(magma(1.0), Rgb { r: 0xfc, g: 0xfd, b: 0xbf });
}

#[test]
fn geometry_is_invariant_across_filters() {
    // Scales are fit once from the full store; applying filters only
    // changes which records are visible, never where they sit.
    let store = sample_store();
    let scales = Scales::fit(&store);

    let all = FilterState::default();
    let narrow = FilterState {
        season: SeasonPick::Year(2020),
        goals: BoundPair { min: Some(50), max: None },
        ..FilterState::default()
    };

    let geometry = |visible: &[usize]| -> Vec<(String, u16, f32, f32, f32, Rgb)> {
        visible
            .iter()
            .map(|&i| {
                let r = &store.records()[i];
                (r.team.clone(), r.season, scales.cx(r), scales.cy(r), scales.radius(r), scales.fill(r))
            })
            .collect()
    };

    let wide_geom = geometry(&all.apply(&store));
    let narrow_geom = geometry(&narrow.apply(&store));

    // Every record visible under the narrow filter has the exact same
    // geometry it had under the identity filter.
    for g in &narrow_geom {
        assert!(wide_geom.contains(g));
    }
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let store = RecordStore::new(vec![rec("A", 0, 0, 0, 1, 2020)]).unwrap();
    let scales = Scales::fit(&store);
    assert_eq!(scales.x.map(0.0), MARGIN_LEFT);
    assert_eq!(scales.size.map(0.0), RADIUS_MIN);
}
