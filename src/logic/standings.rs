//! Standings: teams ranked by accumulated score.

use crate::models::Tournament;
use serde::Serialize;

/// One row of the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position in the table.
    pub rank: usize,
    pub team_name: String,
    pub score: u32,
    /// Finalized games this team played.
    pub games_played: u32,
}

/// Rank teams by score, highest first. Ties keep registration order.
pub fn standings(tournament: &Tournament) -> Vec<Standing> {
    let mut teams: Vec<_> = tournament.teams().iter().collect();
    // sort_by is stable
    teams.sort_by(|a, b| b.score().cmp(&a.score()));

    teams
        .into_iter()
        .enumerate()
        .map(|(i, team)| Standing {
            rank: i + 1,
            team_name: team.name.clone(),
            score: team.score(),
            games_played: tournament
                .games()
                .iter()
                .filter(|g| g.finalized && g.involves(team.id))
                .count() as u32,
        })
        .collect()
}
