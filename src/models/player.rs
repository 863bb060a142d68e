//! Player and Team data structures.

use serde::{Deserialize, Serialize};

/// Identifier for a team, unique within one tournament.
pub type TeamId = u32;

/// A player. Immutable once created; owned by its team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A two-player team registered in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub player_1: Player,
    pub player_2: Player,
    /// Sum of the scores of every finalized game this team played.
    score: u32,
}

impl Team {
    pub(crate) fn new(
        id: TeamId,
        name: impl Into<String>,
        player_1: Player,
        player_2: Player,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            player_1,
            player_2,
            score: 0,
        }
    }

    /// Accumulated score across finalized games.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Game scores are capped at `MAX_GAME_SCORE` and a team plays at most
    /// `MAX_PERIOD_COUNT` games per schedule, so the total cannot overflow.
    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Take back points previously added with `add_score`.
    pub(crate) fn remove_score(&mut self, points: u32) {
        self.score -= points;
    }
}
