//! Tournament business logic: scheduling, score entry, standings, roster import.

mod roster;
mod scheduler;
mod scoring;
mod standings;

pub use roster::{import_teams_csv, RosterImport};
pub use scheduler::{round_robin, schedule, start_tournament};
pub use scoring::{finalize_all_pending, record_score, reopen_game};
pub use standings::{standings, Standing};
