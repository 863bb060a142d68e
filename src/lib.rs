//! Belote team tournament: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    finalize_all_pending, import_teams_csv, record_score, reopen_game, round_robin, schedule,
    standings, start_tournament, RosterImport, Standing,
};
pub use models::{
    Card, Deck, Game, GameId, Player, Rank, Suit, Team, TeamId, Tournament, TournamentError,
    DEFAULT_PERIOD_COUNT, MAX_GAME_SCORE, MAX_PERIOD_COUNT,
};
