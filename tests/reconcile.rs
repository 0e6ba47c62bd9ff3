// tests/reconcile.rs
//
// Keyed reconciler behavior: enter/update/exit classification, settling,
// and the no-duplicate/no-orphan guarantee. Tests drive tick() with fixed
// steps; only the settled state matters.
//
use league_bubbles::reconcile::{BubbleTarget, Reconciler};
use league_bubbles::records::RecordKey;
use league_bubbles::scales::Rgb;

fn key(team: &str, season: u16) -> RecordKey {
    RecordKey { team: team.into(), season }
}

fn target(team: &str, season: u16, cx: f32, cy: f32, r: f32) -> BubbleTarget {
    BubbleTarget {
        key: key(team, season),
        cx,
        cy,
        r,
        fill: Rgb { r: 10, g: 20, b: 30 },
    }
}

/// Run transitions to completion. Generous cap; every duration is < 1 s.
fn settle(rec: &mut Reconciler) {
    for _ in 0..200 {
        if !rec.tick(0.016) && rec.settled() {
            return;
        }
    }
    panic!("reconciler did not settle");
}

#[test]
fn entering_starts_at_zero_radius_and_reaches_target() {
    let mut rec = Reconciler::new();
    rec.apply(&[target("A", 2020, 100.0, 200.0, 25.0)]);

    let b = rec.get(&key("A", 2020)).expect("bubble created on apply");
    assert_eq!(b.r, 0.0);
    assert_eq!((b.cx, b.cy), (100.0, 200.0));

    settle(&mut rec);
    let b = rec.get(&key("A", 2020)).unwrap();
    assert!((b.r - 25.0).abs() < 1e-4);
}

#[test]
fn exit_shrinks_and_removes() {
    let mut rec = Reconciler::new();
    rec.apply(&[target("A", 2020, 100.0, 200.0, 25.0), target("B", 2020, 300.0, 100.0, 10.0)]);
    settle(&mut rec);
    assert_eq!(rec.len(), 2);

    // Empty subset: everything exits, nothing remains.
    rec.apply(&[]);
    assert_eq!(rec.len(), 2); // still rendered while animating out
    settle(&mut rec);
    assert!(rec.is_empty());
}

#[test]
fn update_retargets_in_place() {
    let mut rec = Reconciler::new();
    rec.apply(&[target("A", 2020, 100.0, 200.0, 25.0)]);
    settle(&mut rec);

    rec.apply(&[target("A", 2020, 150.0, 180.0, 30.0)]);
    assert_eq!(rec.len(), 1);
    settle(&mut rec);

    let b = rec.get(&key("A", 2020)).unwrap();
    assert!((b.cx - 150.0).abs() < 1e-4);
    assert!((b.cy - 180.0).abs() < 1e-4);
    assert!((b.r - 30.0).abs() < 1e-4);
}

#[test]
fn repeated_apply_never_duplicates() {
    let mut rec = Reconciler::new();
    let t = [target("A", 2020, 100.0, 200.0, 25.0)];
    rec.apply(&t);
    rec.apply(&t);
    settle(&mut rec);
    rec.apply(&t);
    settle(&mut rec);
    assert_eq!(rec.len(), 1);
}

#[test]
fn settled_keys_equal_latest_target_set() {
    let mut rec = Reconciler::new();
    rec.apply(&[target("A", 2020, 100.0, 200.0, 25.0), target("B", 2020, 300.0, 100.0, 10.0)]);
    settle(&mut rec);

    rec.apply(&[target("B", 2020, 300.0, 100.0, 10.0), target("C", 2021, 50.0, 50.0, 8.0)]);
    settle(&mut rec);

    assert_eq!(rec.len(), 2);
    assert!(!rec.contains(&key("A", 2020)));
    assert!(rec.contains(&key("B", 2020)));
    assert!(rec.contains(&key("C", 2021)));
}

#[test]
fn mid_flight_apply_wins_over_stale_targets() {
    let mut rec = Reconciler::new();
    rec.apply(&[target("A", 2020, 100.0, 200.0, 25.0)]);

    // Part-way through the enter animation, remove it...
    rec.tick(0.1);
    rec.apply(&[]);
    rec.tick(0.1);

    // ...then bring it back before the exit completes. The key must be
    // rescued in place, not removed or duplicated.
    rec.apply(&[target("A", 2020, 120.0, 210.0, 25.0)]);
    settle(&mut rec);

    assert_eq!(rec.len(), 1);
    let b = rec.get(&key("A", 2020)).unwrap();
    assert!((b.cx - 120.0).abs() < 1e-4);
    assert!((b.r - 25.0).abs() < 1e-4);
}

#[test]
fn exiting_bubble_keeps_position_while_shrinking() {
    let mut rec = Reconciler::new();
    rec.apply(&[target("A", 2020, 100.0, 200.0, 25.0)]);
    settle(&mut rec);

    rec.apply(&[]);
    rec.tick(0.1);
    let b = rec.get(&key("A", 2020)).expect("still animating out");
    assert!(b.is_exiting());
    assert_eq!((b.cx, b.cy), (100.0, 200.0));
    assert!(b.r < 25.0);
}
