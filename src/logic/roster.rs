//! Team roster import from CSV (`team,player_1,player_2` with a header row).

use crate::models::{Tournament, TournamentError};
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RosterRow {
    team: String,
    player_1: String,
    player_2: String,
}

/// Outcome of a roster import.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RosterImport {
    /// Teams registered by this import.
    pub added: usize,
    /// Rows not registered, with the reason.
    pub skipped: Vec<String>,
}

/// Register every team listed in `reader`.
///
/// The whole file is parsed before anything is registered, so a malformed file adds nothing.
/// Rows rejected by `Tournament::add_team` (duplicate or empty names) are skipped and reported.
pub fn import_teams_csv<R: Read>(
    tournament: &mut Tournament,
    reader: R,
) -> Result<RosterImport, TournamentError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let rows = csv_reader
        .deserialize::<RosterRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TournamentError::InvalidRoster(e.to_string()))?;

    let mut report = RosterImport::default();
    for row in rows {
        match tournament.add_team(&row.team, &row.player_1, &row.player_2) {
            Ok(()) => report.added += 1,
            Err(e) => report.skipped.push(format!("{}: {}", row.team, e)),
        }
    }
    log::info!(
        "Roster import: {} team(s) added, {} skipped",
        report.added,
        report.skipped.len()
    );
    Ok(report)
}
