//! Round-robin scheduling (circle method).

use crate::models::{Game, TeamId, Tournament, TournamentError, MAX_PERIOD_COUNT};

/// Pair `teams` for `period_count` periods using the circle method.
///
/// `teams[0]` stays fixed; the rest rotate one step per period. In each period the
/// fixed team meets the last rotating entry and the remaining entries are paired
/// from both ends inward. Over the first `n - 1` periods every pair meets exactly
/// once; past that the rotation wraps and pairings repeat.
///
/// Fails with `InvalidTeamCount` if `teams.len()` is odd or below 2, and with
/// `InvalidPeriodCount` above `MAX_PERIOD_COUNT`.
pub fn round_robin<T: Copy>(
    teams: &[T],
    period_count: u32,
) -> Result<Vec<Vec<(T, T)>>, TournamentError> {
    let n = teams.len();
    if n < 2 || n % 2 != 0 {
        return Err(TournamentError::InvalidTeamCount(n));
    }
    if period_count > MAX_PERIOD_COUNT {
        return Err(TournamentError::InvalidPeriodCount(period_count));
    }

    let anchor = teams[0];
    let mut rotating: Vec<T> = teams[1..].to_vec();
    let len = rotating.len();

    let mut periods = Vec::with_capacity(period_count as usize);
    for _ in 0..period_count {
        let mut pairs = Vec::with_capacity(n / 2);
        pairs.push((anchor, rotating[len - 1]));
        for i in 0..len / 2 {
            pairs.push((rotating[i], rotating[len - 2 - i]));
        }
        periods.push(pairs);
        rotating.rotate_right(1);
    }
    Ok(periods)
}

/// Generate `period_count` periods of games for the registered teams, in registration order.
///
/// New games are appended to the tournament (earlier games are kept; call `reset` first
/// to start over) and also returned grouped by period. On error nothing is added.
///
/// At most `MAX_PERIOD_COUNT` periods can be scheduled in total between resets.
pub fn schedule(
    tournament: &mut Tournament,
    period_count: u32,
) -> Result<Vec<Vec<Game>>, TournamentError> {
    let team_ids: Vec<TeamId> = tournament.teams.iter().map(|t| t.id).collect();
    let total = tournament
        .periods_scheduled
        .checked_add(period_count)
        .filter(|&total| total <= MAX_PERIOD_COUNT)
        .ok_or(TournamentError::InvalidPeriodCount(period_count))?;
    let pairings = round_robin(&team_ids, period_count)?;

    let max_distinct = team_ids.len() as u32 - 1;
    if period_count > max_distinct {
        log::warn!(
            "{} periods requested for {} teams: pairings repeat after period {}",
            period_count,
            team_ids.len(),
            max_distinct
        );
    }

    let first_period = tournament.periods_scheduled + 1;
    let mut periods = Vec::with_capacity(pairings.len());
    for (offset, pairs) in pairings.into_iter().enumerate() {
        let period = first_period + offset as u32;
        let mut games = Vec::with_capacity(pairs.len());
        for (table, (team_1, team_2)) in pairs.into_iter().enumerate() {
            let id = tournament.next_game_id();
            let game = Game::new(id, period, table as u32 + 1, team_1, team_2);
            tournament.games.push(game.clone());
            games.push(game);
        }
        periods.push(games);
    }
    tournament.periods_scheduled = total;

    log::info!(
        "Scheduled {} period(s) for {} teams ({} games)",
        period_count,
        team_ids.len(),
        periods.iter().map(Vec::len).sum::<usize>()
    );
    Ok(periods)
}

/// Schedule the configured number of periods (`Tournament::period_count`).
pub fn start_tournament(tournament: &mut Tournament) -> Result<Vec<Vec<Game>>, TournamentError> {
    let period_count = tournament.period_count;
    schedule(tournament, period_count)
}
