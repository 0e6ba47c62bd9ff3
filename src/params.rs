// src/params.rs
use std::path::PathBuf;

use crate::csv::Delim;
use crate::filter::{BoundPair, FilterState, SeasonPick, TeamPick};

#[derive(Clone, Debug)]
pub struct Params {
    pub data: Option<PathBuf>,      // dataset override (default: bundled CSV)
    pub season: Option<u16>,        // filter to one season
    pub team: Option<String>,       // filter to one team
    pub goals: BoundPair,           // gf bounds
    pub position: BoundPair,        // finishing position bounds
    pub points: BoundPair,          // points bounds
    pub out: Option<PathBuf>,       // write here instead of stdout
    pub format: Delim,
    pub include_headers: bool,
    pub list_seasons: bool,         // list seasons then exit
    pub list_teams: bool,           // list teams then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            data: None,
            season: None,
            team: None,
            goals: BoundPair::default(),
            position: BoundPair::default(),
            points: BoundPair::default(),
            out: None,
            format: Delim::Csv,
            include_headers: false,
            list_seasons: false,
            list_teams: false,
        }
    }

    /// The same predicates the GUI builds from its widgets.
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
            goals: self.goals,
            position: self.position,
            points: self.points,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
