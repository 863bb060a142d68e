//! Data structures for the tournament: players, teams, games, tournament state, cards.

mod card;
mod game;
mod player;
mod tournament;

pub use card::{Card, Deck, Rank, Suit};
pub use game::{Game, GameId};
pub use player::{Player, Team, TeamId};
pub use tournament::{
    Tournament, TournamentError, DEFAULT_PERIOD_COUNT, MAX_GAME_SCORE, MAX_PERIOD_COUNT,
};
