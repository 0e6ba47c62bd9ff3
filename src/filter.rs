// src/filter.rs
//
// Filter state and the pure evaluator that derives the visible subset.
//
// Unset bounds behave as "unbounded on that side": min falls back to the
// domain floor, max to the dataset's observed maximum. Malformed text from
// the range inputs parses to None and therefore to the same fallback; the
// evaluator itself has no error states. An empty result is a valid result.

use crate::records::RecordStore;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SeasonPick {
    #[default]
    All,
    Year(u16),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TeamPick {
    #[default]
    All,
    Name(String),
}

/// An optional inclusive [min, max] pair. None = unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BoundPair {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl BoundPair {
    /// Resolve against fallbacks for the unset sides.
    fn resolve(&self, floor: u32, ceil: u32) -> (u32, u32) {
        (self.min.unwrap_or(floor), self.max.unwrap_or(ceil))
    }
}

/// Current set of user-selected predicates. Session lifetime only.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterState {
    pub season: SeasonPick,
    pub team: TeamPick,
    pub goals: BoundPair,
    pub position: BoundPair,
    pub points: BoundPair,
}

impl FilterState {
    /// Ordered indices of records passing every predicate. Pure and
    /// deterministic; calling twice with the same inputs yields the same
    /// subset.
    pub fn apply(&self, store: &RecordStore) -> Vec<usize> {
        let (gf_min, gf_max) = self.goals.resolve(0, store.max_gf());
        let (pos_min, pos_max) = self.position.resolve(1, 20);
        let (pts_min, pts_max) = self.points.resolve(0, store.max_points());

        store
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                (match self.season {
                    SeasonPick::All => true,
                    SeasonPick::Year(y) => r.season == y,
                }) && (match &self.team {
                    TeamPick::All => true,
                    TeamPick::Name(t) => r.team == *t,
                }) && r.gf >= gf_min
                    && r.gf <= gf_max
                    && r.position >= pos_min
                    && r.position <= pos_max
                    && r.points >= pts_min
                    && r.points <= pts_max
            })
            .map(|(i, _)| i)
            .collect()
    }
}

/// Parse one range-input field. Empty or malformed text is "unset";
/// silent recovery, never an error (the inputs are routinely incomplete
/// while the user types).
pub fn parse_bound(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}
