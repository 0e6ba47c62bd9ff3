// src/records.rs
//
// Canonical season-team records.
//
// - Record: one team's finishing line for one season. Immutable once loaded.
// - RecordStore: the full dataset plus observed maxima. Only STORE builds it
//   (from the CSV file); the rest of the app reads it.
//
// Render identity is (team, season). The store rejects duplicates of that
// key at construction.

use std::collections::HashSet;

/// One season-team line of the league table.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub team: String,
    /// Goals for
    pub gf: u32,
    /// Goals against
    pub ga: u32,
    pub points: u32,
    /// Finishing position, 1..=20
    pub position: u32,
    /// Season-end year
    pub season: u16,
}

impl Record {
    pub fn key(&self) -> RecordKey {
        RecordKey { team: self.team.clone(), season: self.season }
    }
}

/// Stable identity of a record for rendering and diffing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub team: String,
    pub season: u16,
}

/// Authoritative, fully-loaded dataset.
#[derive(Clone, Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    max_gf: u32,
    max_ga: u32,
    max_points: u32,
}

impl RecordStore {
    /// Build from loaded records. Fails on a duplicate (team, season) key.
    pub fn new(records: Vec<Record>) -> Result<Self, String> {
        let mut seen: HashSet<(&str, u16)> = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert((r.team.as_str(), r.season)) {
                return Err(format!("Duplicate record key: {} / {}", r.team, r.season));
            }
        }

        let max_gf = records.iter().map(|r| r.gf).max().unwrap_or(0);
        let max_ga = records.iter().map(|r| r.ga).max().unwrap_or(0);
        let max_points = records.iter().map(|r| r.points).max().unwrap_or(0);

        Ok(Self { records, max_gf, max_ga, max_points })
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Observed maxima, used for scale domains and unset filter bounds.
    pub fn max_gf(&self) -> u32 { self.max_gf }
    pub fn max_ga(&self) -> u32 { self.max_ga }
    pub fn max_points(&self) -> u32 { self.max_points }

    /// Distinct seasons, ascending. For the season dropdown.
    pub fn seasons(&self) -> Vec<u16> {
        let mut v: Vec<u16> = self.records.iter().map(|r| r.season).collect();
        v.sort_unstable();
        v.dedup();
        v
    }

    /// Distinct team names, alphabetical. For the team dropdown.
    pub fn teams(&self) -> Vec<String> {
        let mut v: Vec<String> = self.records.iter().map(|r| r.team.clone()).collect();
        v.sort();
        v.dedup();
        v
    }
}
