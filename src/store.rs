// src/store.rs
//
// Loads the season-tables CSV into a RecordStore. This is the one code path
// with a reported failure: missing file, missing column, malformed numeric
// cell, or duplicate (team, season) key all abort the load. The GUI leaves
// the chart unrendered in that case; it never draws a partial dataset.

use std::{error::Error, fs, path::Path};

use crate::csv::{self, Delim};
use crate::records::{Record, RecordStore};

/// Column names expected in the CSV header row, in any order.
const COL_TEAM: &str = "team";
const COL_GF: &str = "gf";
const COL_GA: &str = "ga";
const COL_POINTS: &str = "points";
const COL_POSITION: &str = "position";
const COL_SEASON: &str = "season_end_year";

pub fn load_records(path: &Path) -> Result<RecordStore, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Read {}: {}", path.display(), e))?;
    let store = records_from_csv(&text)?;
    logf!("Store: Loaded {} (records={})", path.display(), store.len());
    Ok(store)
}

/// Parse CSV text (header row required) into a validated RecordStore.
pub fn records_from_csv(text: &str) -> Result<RecordStore, Box<dyn Error>> {
    let mut rows = csv::parse_rows(text, Delim::Csv);
    if rows.is_empty() {
        return Err("Empty dataset".into());
    }
    let header = rows.remove(0);

    let col = |name: &str| -> Result<usize, Box<dyn Error>> {
        header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("Missing column: {}", name).into())
    };

    let c_team = col(COL_TEAM)?;
    let c_gf = col(COL_GF)?;
    let c_ga = col(COL_GA)?;
    let c_points = col(COL_POINTS)?;
    let c_position = col(COL_POSITION)?;
    let c_season = col(COL_SEASON)?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        // Header row is line 1
        let line = i + 2;
        let cell = |ix: usize| -> Result<&str, Box<dyn Error>> {
            row.get(ix)
                .map(|s| s.trim())
                .ok_or_else(|| format!("Line {}: too few fields", line).into())
        };
        let num = |ix: usize, name: &str| -> Result<u32, Box<dyn Error>> {
            let raw = cell(ix)?;
            raw.parse()
                .map_err(|_| format!("Line {}: bad {}: {:?}", line, name, raw).into())
        };

        let team = cell(c_team)?.to_string();
        if team.is_empty() {
            return Err(format!("Line {}: empty team name", line).into());
        }

        records.push(Record {
            team,
            gf: num(c_gf, COL_GF)?,
            ga: num(c_ga, COL_GA)?,
            points: num(c_points, COL_POINTS)?,
            position: num(c_position, COL_POSITION)?,
            season: cell(c_season)?
                .parse()
                .map_err(|_| format!("Line {}: bad {}", line, COL_SEASON))?,
        });
    }

    Ok(RecordStore::new(records)?)
}
