//! Score entry: record, reopen and bulk-finalize games.

use crate::models::{GameId, Team, TeamId, Tournament, TournamentError, MAX_GAME_SCORE};
use chrono::Utc;

/// Record the final scores of a game and credit them to both teams.
///
/// Recording a game that is already finalized replaces its previous scores: the old
/// contribution is taken off the team totals before the new one is added.
/// Each score must be at most `MAX_GAME_SCORE`.
pub fn record_score(
    tournament: &mut Tournament,
    game_id: GameId,
    score_1: u32,
    score_2: u32,
) -> Result<(), TournamentError> {
    let idx = game_index(tournament, game_id)?;
    if let Some(&too_high) = [score_1, score_2].iter().find(|&&s| s > MAX_GAME_SCORE) {
        return Err(TournamentError::InvalidScore(too_high));
    }
    let (team_1, team_2, previous) = {
        let g = &tournament.games[idx];
        (g.team_1, g.team_2, g.finalized.then_some((g.score_1, g.score_2)))
    };
    ensure_registered(tournament, &[team_1, team_2])?;

    if let Some((old_1, old_2)) = previous {
        credit(tournament, team_1, team_2, |t, points| t.remove_score(points), old_1, old_2);
    }
    credit(tournament, team_1, team_2, |t, points| t.add_score(points), score_1, score_2);

    let g = &mut tournament.games[idx];
    g.score_1 = score_1;
    g.score_2 = score_2;
    g.finalized = true;
    g.recorded_at = Some(Utc::now());
    log::debug!("Game {}: {} - {}", game_id, score_1, score_2);
    Ok(())
}

/// Take a finalized game back to pending: its scores stop counting but are kept as entered.
/// A game that is already pending is left as is.
pub fn reopen_game(tournament: &mut Tournament, game_id: GameId) -> Result<(), TournamentError> {
    let idx = game_index(tournament, game_id)?;
    let g = &tournament.games[idx];
    if !g.finalized {
        return Ok(());
    }
    let (team_1, team_2, score_1, score_2) = (g.team_1, g.team_2, g.score_1, g.score_2);
    ensure_registered(tournament, &[team_1, team_2])?;

    credit(tournament, team_1, team_2, |t, points| t.remove_score(points), score_1, score_2);
    let g = &mut tournament.games[idx];
    g.finalized = false;
    g.recorded_at = None;
    log::debug!("Game {} reopened", game_id);
    Ok(())
}

/// Finalize every pending game with the scores it currently holds. Returns how many were finalized.
pub fn finalize_all_pending(tournament: &mut Tournament) -> Result<usize, TournamentError> {
    let pending: Vec<(GameId, u32, u32)> = tournament
        .games
        .iter()
        .filter(|g| !g.finalized)
        .map(|g| (g.id, g.score_1, g.score_2))
        .collect();
    let teams: Vec<TeamId> = tournament
        .games
        .iter()
        .filter(|g| !g.finalized)
        .flat_map(|g| [g.team_1, g.team_2])
        .collect();
    ensure_registered(tournament, &teams)?;
    for &(id, score_1, score_2) in &pending {
        record_score(tournament, id, score_1, score_2)?;
    }
    if !pending.is_empty() {
        log::info!("Finalized {} pending game(s)", pending.len());
    }
    Ok(pending.len())
}

fn game_index(tournament: &Tournament, game_id: GameId) -> Result<usize, TournamentError> {
    tournament
        .games
        .iter()
        .position(|g| g.id == game_id)
        .ok_or(TournamentError::UnknownGame(game_id))
}

/// Fail before any mutation if a game's team was removed after scheduling.
fn ensure_registered(
    tournament: &Tournament,
    team_ids: &[TeamId],
) -> Result<(), TournamentError> {
    for &id in team_ids {
        if tournament.team(id).is_none() {
            return Err(TournamentError::TeamNotFound(id));
        }
    }
    Ok(())
}

/// Apply `op` with each team's points. Callers check both teams exist first.
fn credit(
    tournament: &mut Tournament,
    team_1: TeamId,
    team_2: TeamId,
    op: impl Fn(&mut Team, u32),
    points_1: u32,
    points_2: u32,
) {
    if let Some(t) = tournament.team_mut(team_1) {
        op(t, points_1);
    }
    if let Some(t) = tournament.team_mut(team_2) {
        op(t, points_2);
    }
}
