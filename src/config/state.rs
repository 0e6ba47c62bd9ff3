// src/config/state.rs
use crate::filter::{BoundPair, FilterState, SeasonPick, TeamPick, parse_bound};
use crate::records::RecordKey;

/// GUI-side state: the raw widget values the filter panel edits.
/// Translated into a FilterState on every change; the text fields keep
/// whatever the user typed, valid or not.
#[derive(Clone, Debug)]
pub struct GuiState {
    /// None = "All Seasons"
    pub season: Option<u16>,
    /// None = "All"
    pub team: Option<String>,

    pub min_goals: String,
    pub max_goals: String,
    pub min_position: String,
    pub max_position: String,
    pub min_points: String,
    pub max_points: String,

    /// Last bubble the pointer was over; hover is logged once per change.
    pub hovered: Option<RecordKey>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            season: None,
            team: None,
            min_goals: s!(),
            max_goals: s!(),
            min_position: s!(),
            max_position: s!(),
            min_points: s!(),
            max_points: s!(),
            hovered: None,
        }
    }
}

impl GuiState {
    /// Translate widget values into predicates. Malformed text is unset.
    pub fn to_filter(&self) -> FilterState {
        FilterState {
            season: match self.season {
                None => SeasonPick::All,
                Some(y) => SeasonPick::Year(y),
            },
            team: match &self.team {
                None => TeamPick::All,
                Some(t) => TeamPick::Name(t.clone()),
            },
            goals: BoundPair {
                min: parse_bound(&self.min_goals),
                max: parse_bound(&self.max_goals),
            },
            position: BoundPair {
                min: parse_bound(&self.min_position),
                max: parse_bound(&self.max_position),
            },
            points: BoundPair {
                min: parse_bound(&self.min_points),
                max: parse_bound(&self.max_points),
            },
        }
    }

    pub fn reset_filters(&mut self) {
        let hovered = self.hovered.take();
        *self = Self::default();
        self.hovered = hovered;
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub gui: GuiState,
}
