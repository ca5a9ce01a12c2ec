use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::info;

use crate::model::entity::Price;
use crate::model::preference::Preferences;
use crate::report::COVER_HEADER;
use crate::search::find_all_covers;

#[derive(Debug, Parser)]
#[command(name = "rent-cover")]
#[command(about = "Enumerate housemate and room assignments whose prices cover the rent")]
pub struct Args {
    /// Total rent the chosen housemates must pay together.
    #[arg(long)]
    pub rent: Price,

    /// Preferences JSON file; read from stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Stop after this many covers.
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, default_value = "warn")]
    pub log: String,
}

impl Args {
    pub fn read_input(&self) -> Result<String> {
        let mut text = String::new();
        match &self.input {
            Some(path) => {
                text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read preferences from {}", path.display()))?;
            }
            None => {
                io::stdin().lock()
                    .read_to_string(&mut text)
                    .context("failed to read preferences from stdin")?;
            }
        }
        Ok(text)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig { rent: self.rent, limit: self.limit }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub rent: Price,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub num_people: usize,
    pub num_rooms: usize,
    pub covers: usize,
    pub evaluated: u128,
}

/// Validates `input` and writes every cover found to `out`.
///
/// Nothing about covers is written unless the whole input validates.
pub fn run(config: &SearchConfig, input: &str, mut out: impl Write) -> Result<RunSummary> {
    ensure!(config.rent.is_finite(), "rent must be a finite number, got {}", config.rent);

    let preferences = Preferences::from_json(input).context("failed to decode preferences")?;
    let num_rooms = preferences.validate().context("invalid preferences")?;
    let num_people = preferences.num_people();
    writeln!(out, "preferences are valid: {num_people} people, {num_rooms} rooms")?;

    let mut search = find_all_covers(config.rent, &preferences, num_rooms);
    let mut covers = 0;
    while config.limit.map_or(true, |limit| covers < limit) {
        let Some(cover) = search.next() else { break };
        covers += 1;
        writeln!(out, "{COVER_HEADER}")?;
        writeln!(out, "{cover}")?;
    }
    writeln!(out, "{covers} cover(s) found")?;
    out.flush()?;

    let summary = RunSummary { num_people, num_rooms, covers, evaluated: search.evaluated() };
    info!(covers, evaluated = %summary.evaluated, rent = config.rent, "search finished");
    Ok(summary)
}
