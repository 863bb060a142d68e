//! Single binary web server: JSON API over one in-memory tournament.
//! Run with: cargo run --bin web
//! Listens on 127.0.0.1:8080 by default.
//! Override with env: HOST, PORT, PERIODS (periods scheduled by "start").

use actix_web::{
    delete, get, post, put,
    web::{Bytes, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use belote_tournament::{
    finalize_all_pending, import_teams_csv, record_score, reopen_game, schedule, standings,
    start_tournament, GameId, Tournament, TournamentError, DEFAULT_PERIOD_COUNT, MAX_PERIOD_COUNT,
};
use serde::Deserialize;
use std::sync::RwLock;

/// The one tournament of this session. Every mutation holds the write lock for its whole duration.
type AppState = Data<RwLock<Tournament>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
    player_1: String,
    player_2: String,
}

#[derive(Deserialize)]
struct PeriodCountBody {
    period_count: u32,
}

#[derive(Deserialize)]
struct ScheduleBody {
    period_count: Option<u32>,
}

#[derive(Deserialize)]
struct ScoreBody {
    score_1: u32,
    score_2: u32,
}

/// Path segment: team name (e.g. /api/teams/{name})
#[derive(Deserialize)]
struct TeamPath {
    name: String,
}

/// Path segment: game id (e.g. /api/games/{id}/score)
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::UnknownGame(_)
        | TournamentError::UnknownTeam(_)
        | TournamentError::TeamNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Run `op` under the write lock and answer with the updated tournament.
fn mutate<F>(state: &AppState, op: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match op(&mut *t) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "belote-tournament",
    })
}

#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(t) => HttpResponse::Ok().json(&*t),
        Err(_) => HttpResponse::InternalServerError().body("lock error"),
    }
}

#[post("/api/teams")]
async fn api_add_team(state: AppState, body: Json<AddTeamBody>) -> HttpResponse {
    let body = body.into_inner();
    mutate(&state, |t| {
        t.add_team(body.name.trim(), body.player_1.trim(), body.player_2.trim())
    })
}

#[delete("/api/teams/{name}")]
async fn api_remove_team(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    mutate(&state, |t| t.remove_team(path.name.trim()))
}

#[delete("/api/teams")]
async fn api_clear_teams(state: AppState) -> HttpResponse {
    mutate(&state, |t| {
        t.clear_teams();
        Ok(())
    })
}

/// Import teams from a CSV body (`team,player_1,player_2` header).
#[post("/api/teams/import")]
async fn api_import_teams(state: AppState, body: Bytes) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match import_teams_csv(&mut *t, body.as_ref()) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(e),
    }
}

#[post("/api/teams/shuffle")]
async fn api_shuffle_teams(state: AppState) -> HttpResponse {
    mutate(&state, |t| {
        t.shuffle_teams();
        Ok(())
    })
}

#[put("/api/period-count")]
async fn api_set_period_count(state: AppState, body: Json<PeriodCountBody>) -> HttpResponse {
    mutate(&state, |t| t.set_period_count(body.period_count))
}

/// Generate the schedule; returns the new games grouped by period.
#[post("/api/schedule")]
async fn api_schedule(state: AppState, body: Option<Json<ScheduleBody>>) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = match body.and_then(|b| b.period_count) {
        Some(period_count) => schedule(&mut *t, period_count),
        None => start_tournament(&mut *t),
    };
    match result {
        Ok(periods) => HttpResponse::Ok().json(periods),
        Err(e) => error_response(e),
    }
}

#[put("/api/games/{id}/score")]
async fn api_record_score(
    state: AppState,
    path: Path<GamePath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    mutate(&state, |t| record_score(t, path.id, body.score_1, body.score_2))
}

#[post("/api/games/{id}/reopen")]
async fn api_reopen_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    mutate(&state, |t| reopen_game(t, path.id))
}

/// Finalize every pending game with its current scores.
#[post("/api/games/finalize")]
async fn api_finalize_all(state: AppState) -> HttpResponse {
    mutate(&state, |t| finalize_all_pending(t).map(|_| ()))
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(t) => HttpResponse::Ok().json(standings(&t)),
        Err(_) => HttpResponse::InternalServerError().body("lock error"),
    }
}

/// Clear teams and games.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    mutate(&state, |t| {
        t.reset();
        Ok(())
    })
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let periods: u32 = std::env::var("PERIODS")
        .ok()
        .and_then(|p| p.parse().ok())
        .filter(|&p| p <= MAX_PERIOD_COUNT)
        .unwrap_or(DEFAULT_PERIOD_COUNT);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{} ({} periods)", bind.0, bind.1, periods);

    let state = Data::new(RwLock::new(Tournament::new(periods)));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_get_tournament)
            .service(api_import_teams)
            .service(api_shuffle_teams)
            .service(api_add_team)
            .service(api_clear_teams)
            .service(api_remove_team)
            .service(api_set_period_count)
            .service(api_schedule)
            .service(api_finalize_all)
            .service(api_record_score)
            .service(api_reopen_game)
            .service(api_standings)
            .service(api_reset)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn missing_game_or_team_maps_to_not_found() {
        for e in [
            TournamentError::UnknownGame(7),
            TournamentError::UnknownTeam("Alpha".to_string()),
            TournamentError::TeamNotFound(3),
        ] {
            assert_eq!(error_response(e).status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        for e in [
            TournamentError::EmptyName,
            TournamentError::InvalidTeamCount(5),
            TournamentError::InvalidPeriodCount(u32::MAX),
            TournamentError::InvalidScore(1000),
        ] {
            assert_eq!(error_response(e).status(), StatusCode::BAD_REQUEST);
        }
    }
}
