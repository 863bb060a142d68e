//! Tournament aggregate and TournamentError.

use crate::models::game::{Game, GameId};
use crate::models::player::{Player, Team, TeamId};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Periods played when nothing else is configured.
pub const DEFAULT_PERIOD_COUNT: u32 = 4;

/// Most periods a tournament can schedule between resets.
pub const MAX_PERIOD_COUNT: u32 = 100;

/// Highest score a single game can record.
pub const MAX_GAME_SCORE: u32 = 999;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A team with this name already exists (exact, case-sensitive match).
    DuplicateTeamName(String),
    /// No team with this name is registered.
    UnknownTeam(String),
    /// Team or player name is empty after trimming.
    EmptyName,
    /// Round-robin needs an even number of teams, at least 2.
    InvalidTeamCount(usize),
    /// Period count would exceed `MAX_PERIOD_COUNT`.
    InvalidPeriodCount(u32),
    /// Game score above `MAX_GAME_SCORE`.
    InvalidScore(u32),
    /// No game with this id in the tournament.
    UnknownGame(GameId),
    /// A game references a team that has since been removed.
    TeamNotFound(TeamId),
    /// Roster input could not be parsed.
    InvalidRoster(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::DuplicateTeamName(name) => {
                write!(f, "A team named '{}' already exists", name)
            }
            TournamentError::UnknownTeam(name) => write!(f, "No team named '{}'", name),
            TournamentError::EmptyName => write!(f, "Team and player names must not be empty"),
            TournamentError::InvalidTeamCount(n) => {
                write!(f, "Need an even number of teams (at least 2) to schedule, have {}", n)
            }
            TournamentError::InvalidPeriodCount(n) => {
                write!(
                    f,
                    "At most {} periods can be scheduled between resets, asked for {}",
                    MAX_PERIOD_COUNT, n
                )
            }
            TournamentError::InvalidScore(score) => {
                write!(f, "Scores range from 0 to {}, got {}", MAX_GAME_SCORE, score)
            }
            TournamentError::UnknownGame(id) => write!(f, "Game {} not found", id),
            TournamentError::TeamNotFound(id) => {
                write!(f, "Team {} is no longer registered", id)
            }
            TournamentError::InvalidRoster(msg) => write!(f, "Invalid roster: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Full tournament state: registered teams, generated games and scheduling config.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    /// Registered teams, in registration order (the rotation depends on it).
    pub(crate) teams: Vec<Team>,
    /// Every game generated so far, in generation order.
    pub(crate) games: Vec<Game>,
    /// Periods generated by `start_tournament`.
    pub(crate) period_count: u32,
    /// Periods already scheduled; new runs number their periods after these.
    pub(crate) periods_scheduled: u32,
    next_team_id: TeamId,
    next_game_id: GameId,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD_COUNT)
    }
}

impl Tournament {
    /// Create an empty tournament that plays `period_count` periods.
    pub fn new(period_count: u32) -> Self {
        Self {
            teams: Vec::new(),
            games: Vec::new(),
            period_count,
            periods_scheduled: 0,
            next_team_id: 1,
            next_game_id: 1,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn period_count(&self) -> u32 {
        self.period_count
    }

    pub fn periods_scheduled(&self) -> u32 {
        self.periods_scheduled
    }

    pub fn set_period_count(&mut self, period_count: u32) -> Result<(), TournamentError> {
        if period_count > MAX_PERIOD_COUNT {
            return Err(TournamentError::InvalidPeriodCount(period_count));
        }
        self.period_count = period_count;
        Ok(())
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub(crate) fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Games of one (1-based) period, ordered by table.
    pub fn games_in_period(&self, period: u32) -> Vec<&Game> {
        self.games.iter().filter(|g| g.period == period).collect()
    }

    /// Register a team of two players. Team names are unique (exact, case-sensitive match)
    /// and stored as given; trimming user input is up to the caller.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        player_1: impl Into<String>,
        player_2: impl Into<String>,
    ) -> Result<(), TournamentError> {
        let (name, player_1, player_2) = (name.into(), player_1.into(), player_2.into());
        if [&name, &player_1, &player_2].iter().any(|s| s.trim().is_empty()) {
            return Err(TournamentError::EmptyName);
        }
        if self.teams.iter().any(|t| t.name == name) {
            return Err(TournamentError::DuplicateTeamName(name));
        }
        let id = self.next_team_id;
        self.next_team_id += 1;
        log::debug!("Registered team '{}' ({} / {})", name, player_1, player_2);
        self.teams
            .push(Team::new(id, name, Player::new(player_1), Player::new(player_2)));
        Ok(())
    }

    /// Remove a team by name. Games already scheduled for it are kept.
    pub fn remove_team(&mut self, name: &str) -> Result<(), TournamentError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| TournamentError::UnknownTeam(name.to_string()))?;
        let team = self.teams.remove(idx);
        if self.games.iter().any(|g| g.involves(team.id)) {
            log::warn!("Removed team '{}' still has scheduled games", team.name);
        } else {
            log::debug!("Removed team '{}'", team.name);
        }
        Ok(())
    }

    /// Remove every team. Games are left alone; use `reset` to clear both.
    pub fn clear_teams(&mut self) {
        self.teams.clear();
    }

    /// Back to an empty tournament: no teams, no games. Id counters keep running.
    pub fn reset(&mut self) {
        self.teams.clear();
        self.games.clear();
        self.periods_scheduled = 0;
        log::info!("Tournament reset");
    }

    /// Randomize the registration order once, before scheduling.
    pub fn shuffle_teams(&mut self) {
        self.teams.shuffle(&mut rand::thread_rng());
    }

    pub(crate) fn next_game_id(&mut self) -> GameId {
        let id = self.next_game_id;
        self.next_game_id += 1;
        id
    }
}
