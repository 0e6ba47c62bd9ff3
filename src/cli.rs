// src/cli.rs
//
// Headless filter + export: the GUI's filter-and-subset pipeline applied
// once, with the visible records printed or written as CSV/TSV.

use std::{env, error::Error, path::PathBuf};

use crate::config::consts::DATA_FILE;
use crate::csv::{self, Delim};
use crate::params::Params;
use crate::records::RecordStore;
use crate::{file, store};

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let path = params.data.clone().unwrap_or_else(|| PathBuf::from(DATA_FILE));
    let store = store::load_records(&path)?;

    if params.list_seasons {
        for y in store.seasons() {
            println!("{}", y);
        }
        return Ok(());
    }
    if params.list_teams {
        for t in store.teams() {
            println!("{}", t);
        }
        return Ok(());
    }

    let visible = params.to_filter().apply(&store);
    let text = export_string(&store, &visible, params.format, params.include_headers);

    match &params.out {
        Some(out) => {
            let written = file::write_export(out, &text)?;
            logf!("CLI: Wrote {} rows to {}", visible.len(), written.display());
            eprintln!("Wrote {} rows to {}", visible.len(), written.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

/// Stringify a visible subset in column order matching the input file.
pub fn export_string(
    store: &RecordStore,
    visible: &[usize],
    format: Delim,
    include_headers: bool,
) -> String {
    let headers = include_headers.then(|| {
        ["team", "gf", "ga", "points", "position", "season_end_year"]
            .iter()
            .map(|h| s!(*h))
            .collect()
    });

    let rows: Vec<Vec<String>> = visible
        .iter()
        .map(|&i| {
            let r = &store.records()[i];
            vec![
                r.team.clone(),
                r.gf.to_string(),
                r.ga.to_string(),
                r.points.to_string(),
                r.position.to_string(),
                r.season.to_string(),
            ]
        })
        .collect();

    csv::rows_to_string(&rows, &headers, format)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--data" => params.data = Some(PathBuf::from(args.next().ok_or("Missing value for --data")?)),
            "-s" | "--season" => {
                let v = args.next().ok_or("Missing value for --season")?;
                params.season = Some(v.parse().map_err(|_| format!("Bad season: {}", v))?);
            }
            "-t" | "--team" => params.team = Some(args.next().ok_or("Missing value for --team")?),
            "--min-goals" => params.goals.min = Some(parse_num(&a, args.next())?),
            "--max-goals" => params.goals.max = Some(parse_num(&a, args.next())?),
            "--min-position" => params.position.min = Some(parse_num(&a, args.next())?),
            "--max-position" => params.position.max = Some(parse_num(&a, args.next())?),
            "--min-points" => params.points.min = Some(parse_num(&a, args.next())?),
            "--max-points" => params.points.max = Some(parse_num(&a, args.next())?),
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "--list-seasons" => params.list_seasons = true,
            "--list-teams" => params.list_teams = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_num(flag: &str, v: Option<String>) -> Result<u32, Box<dyn Error>> {
    let v = v.ok_or_else(|| format!("Missing value for {}", flag))?;
    v.parse().map_err(|_| format!("Bad value for {}: {}", flag, v).into())
}
