//! Game (fixture) between two teams.

use crate::models::player::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a game, unique within one tournament.
pub type GameId = u32;

/// A scheduled fixture. Scores stay at zero until recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    /// 1-based period this game belongs to.
    pub period: u32,
    /// 1-based table number within the period.
    pub table: u32,
    pub team_1: TeamId,
    pub team_2: TeamId,
    pub score_1: u32,
    pub score_2: u32,
    /// Whether the scores currently count toward the team totals.
    pub finalized: bool,
    /// When the scores were last recorded. None while pending.
    pub recorded_at: Option<DateTime<Utc>>,
}

impl Game {
    pub(crate) fn new(id: GameId, period: u32, table: u32, team_1: TeamId, team_2: TeamId) -> Self {
        debug_assert_ne!(team_1, team_2, "a team cannot play itself");
        Self {
            id,
            period,
            table,
            team_1,
            team_2,
            score_1: 0,
            score_2: 0,
            finalized: false,
            recorded_at: None,
        }
    }

    /// Whether `team` plays in this game.
    pub fn involves(&self, team: TeamId) -> bool {
        self.team_1 == team || self.team_2 == team
    }

    /// The two teams as an unordered key (lower id first).
    pub fn pairing(&self) -> (TeamId, TeamId) {
        if self.team_1 <= self.team_2 {
            (self.team_1, self.team_2)
        } else {
            (self.team_2, self.team_1)
        }
    }
}
