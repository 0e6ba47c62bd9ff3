// src/reconcile.rs
//
// Keyed render reconciler.
//
// Maintains the one-to-one correspondence between the visible subset and
// the rendered bubbles, keyed by (team, season). Each `apply` is a plain
// associative diff: keys only in the old set exit (radius to 0, then
// removed), keys only in the new set enter (radius 0 to target), keys in
// both retarget in place. Transitions are advanced by `tick(dt)`; a new
// `apply` mid-flight retargets from the current interpolated values, so
// the last write always wins and no stale target survives.

use std::collections::HashMap;

use crate::config::consts::{DUR_ENTER_UPDATE, DUR_EXIT};
use crate::records::RecordKey;
use crate::scales::Rgb;

/// Where one bubble should end up. Produced from the visible subset plus
/// the session scales.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleTarget {
    pub key: RecordKey,
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub fill: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Updating,
    Exiting,
}

#[derive(Clone, Debug)]
struct Transition {
    from: [f32; 3], // cx, cy, r
    to: [f32; 3],
    elapsed: f32,
    duration: f32,
}

/// One rendered element. Owned entirely by the reconciler.
#[derive(Clone, Debug)]
pub struct Bubble {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    pub fill: Rgb,
    phase: Phase,
    anim: Option<Transition>,
}

impl Bubble {
    pub fn phase(&self) -> Phase { self.phase }
    pub fn is_exiting(&self) -> bool { self.phase == Phase::Exiting }
}

// Cosmetic easing; keeps motion from feeling linear.
fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

#[derive(Debug, Default)]
pub struct Reconciler {
    bubbles: HashMap<RecordKey, Bubble>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self { bubbles: HashMap::new() }
    }

    /// Diff the current element set against `targets` and start the
    /// appropriate transitions. Never blocks; animation happens in `tick`.
    pub fn apply(&mut self, targets: &[BubbleTarget]) {
        let target_keys: std::collections::HashSet<&RecordKey> =
            targets.iter().map(|t| &t.key).collect();

        // Exit pass: anything whose key is absent from the new subset.
        for (key, b) in self.bubbles.iter_mut() {
            if target_keys.contains(key) {
                continue;
            }
            if b.phase != Phase::Exiting {
                b.phase = Phase::Exiting;
                b.anim = Some(Transition {
                    from: [b.cx, b.cy, b.r],
                    to: [b.cx, b.cy, 0.0],
                    elapsed: 0.0,
                    duration: DUR_EXIT,
                });
            }
        }

        // Enter/update pass.
        for t in targets {
            match self.bubbles.get_mut(&t.key) {
                Some(b) => {
                    // Update (also rescues an in-flight exit whose key
                    // reappeared): retarget from current values.
                    b.phase = Phase::Updating;
                    b.fill = t.fill;
                    b.anim = Some(Transition {
                        from: [b.cx, b.cy, b.r],
                        to: [t.cx, t.cy, t.r],
                        elapsed: 0.0,
                        duration: DUR_ENTER_UPDATE,
                    });
                }
                None => {
                    // Enter at the target position with radius 0.
                    self.bubbles.insert(t.key.clone(), Bubble {
                        cx: t.cx,
                        cy: t.cy,
                        r: 0.0,
                        fill: t.fill,
                        phase: Phase::Entering,
                        anim: Some(Transition {
                            from: [t.cx, t.cy, 0.0],
                            to: [t.cx, t.cy, t.r],
                            elapsed: 0.0,
                            duration: DUR_ENTER_UPDATE,
                        }),
                    });
                }
            }
        }
    }

    /// Advance all transitions by `dt` seconds. Completed exits are
    /// removed. Returns true while anything is still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut animating = false;

        self.bubbles.retain(|_, b| {
            let Some(anim) = b.anim.as_mut() else { return true };

            anim.elapsed += dt;
            let done = anim.elapsed >= anim.duration;
            let t = if done { 1.0 } else { ease_cubic_in_out(anim.elapsed / anim.duration) };

            b.cx = anim.from[0] + (anim.to[0] - anim.from[0]) * t;
            b.cy = anim.from[1] + (anim.to[1] - anim.from[1]) * t;
            b.r = anim.from[2] + (anim.to[2] - anim.from[2]) * t;

            if done {
                b.anim = None;
                if b.phase == Phase::Exiting {
                    return false;
                }
            } else {
                animating = true;
            }
            true
        });

        animating
    }

    /// True once every transition has run to completion.
    pub fn settled(&self) -> bool {
        self.bubbles.values().all(|b| b.anim.is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RecordKey, &Bubble)> {
        self.bubbles.iter()
    }

    pub fn len(&self) -> usize { self.bubbles.len() }
    pub fn is_empty(&self) -> bool { self.bubbles.is_empty() }

    pub fn contains(&self, key: &RecordKey) -> bool {
        self.bubbles.contains_key(key)
    }

    pub fn get(&self, key: &RecordKey) -> Option<&Bubble> {
        self.bubbles.get(key)
    }
}
