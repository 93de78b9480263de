//! REST API over the tournament store. Mounted by the `web` binary via [`configure`].

use crate::config::ServerConfig;
use crate::logic::{
    calculate_standings, cancel_team_match, generate_tournament_matches, import_team_roster, player_records,
    record_tournament_result, start_tournament_match, tournament_team_match_result,
};
use crate::models::{
    Division, Gender, MatchId, Player, PlayerId, RecordPolicy, Side, Team, TeamId, TeamLevel,
    TeamMatchId, Tournament, TournamentConfig, TournamentError, TournamentId,
    DEFAULT_POSITIONS_PER_DIVISION,
};
use crate::store::TournamentStore;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Shared server state: the store plus the settings it was built from.
pub struct AppContext {
    pub store: RwLock<TournamentStore>,
    pub config: ServerConfig,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: RwLock::new(TournamentStore::new(config.tournament_ttl)),
            config,
        }
    }
}

pub type AppState = Data<AppContext>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

fn default_tournament_name() -> String {
    "Tournament".to_string()
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateTournamentBody {
    #[serde(default = "default_tournament_name")]
    name: String,
    #[serde(default)]
    divisions: Option<Vec<Division>>,
    #[serde(default)]
    positions_per_division: Option<u32>,
    #[serde(default)]
    policy: Option<RecordPolicy>,
}

impl Default for CreateTournamentBody {
    fn default() -> Self {
        Self {
            name: default_tournament_name(),
            divisions: None,
            positions_per_division: None,
            policy: None,
        }
    }
}

#[derive(Deserialize)]
struct AddTeamBody {
    school_name: String,
    #[serde(default)]
    level: TeamLevel,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    grade: Option<u8>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    division_preference: Option<Division>,
    #[serde(default)]
    level: Option<TeamLevel>,
}

#[derive(Deserialize)]
struct SetRatingBody {
    rating: Option<f64>,
}

#[derive(Deserialize)]
struct RecordResultBody {
    winner: Side,
    score: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct TeamPath {
    id: TournamentId,
    team_id: TeamId,
}

#[derive(Deserialize)]
struct PlayerPath {
    id: TournamentId,
    team_id: TeamId,
    player_id: PlayerId,
}

#[derive(Deserialize)]
struct MatchPath {
    id: TournamentId,
    match_id: MatchId,
}

#[derive(Deserialize)]
struct TeamMatchPath {
    id: TournamentId,
    team_match_id: TeamMatchId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `f` against a stored tournament under the write lock and serialize what it returns.
fn with_tournament<T, F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    T: Serialize,
    F: FnOnce(&mut Tournament) -> Result<T, TournamentError>,
{
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let Some(t) = g.get_mut(&id) else {
        return not_found();
    };
    match f(t) {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => bad_request(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tennis-team-web",
    })
}

/// Create a tournament (returns it with id; client keeps the id for later requests).
/// An empty body takes every default; a body that is present must be valid.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: web::Bytes) -> HttpResponse {
    let body: CreateTournamentBody = if body.iter().all(u8::is_ascii_whitespace) {
        CreateTournamentBody::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(body) => body,
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": format!("invalid tournament body: {e}") }))
            }
        }
    };
    let config = TournamentConfig {
        divisions: body.divisions.unwrap_or_else(|| TournamentConfig::default().divisions),
        positions_per_division: body
            .positions_per_division
            .unwrap_or(DEFAULT_POSITIONS_PER_DIVISION),
        policy: body.policy.unwrap_or(state.config.default_policy),
    };
    if let Err(e) = config.validate() {
        return bad_request(e);
    }
    let tournament = Tournament::new(body.name, config);
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {}", tournament.id);
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(tournament);
    response
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| Ok(t.clone()))
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.invalidate(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => not_found(),
    }
}

#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<TournamentPath>, body: Json<AddTeamBody>) -> HttpResponse {
    let body = body.into_inner();
    with_tournament(&state, path.id, move |t| {
        t.add_team(Team::new(body.school_name.trim(), body.level))?;
        Ok(t.clone())
    })
}

#[post("/api/tournaments/{id}/teams/{team_id}/players")]
async fn api_add_player(state: AppState, path: Path<TeamPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    let body = body.into_inner();
    let mut player = Player::new(body.name.trim());
    player.gender = body.gender;
    player.grade = body.grade;
    player.rating = body.rating;
    player.division_preference = body.division_preference;
    player.level = body.level;
    with_tournament(&state, path.id, |t| {
        t.add_player(path.team_id, player)?;
        Ok(t.clone())
    })
}

/// Import a CSV roster (request body) into one team.
#[post("/api/tournaments/{id}/teams/{team_id}/roster")]
async fn api_import_roster(state: AppState, path: Path<TeamPath>, body: String) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let added = import_team_roster(t, path.team_id, &body)?;
        Ok(serde_json::json!({ "added": added, "tournament": t }))
    })
}

#[put("/api/tournaments/{id}/teams/{team_id}/players/{player_id}/rating")]
async fn api_set_rating(state: AppState, path: Path<PlayerPath>, body: Json<SetRatingBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.set_player_rating(path.team_id, path.player_id, body.rating)?;
        Ok(t.clone())
    })
}

/// Generate and staff all matches (discards previous results).
#[post("/api/tournaments/{id}/matches/generate")]
async fn api_generate_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        generate_tournament_matches(t)?;
        Ok(t.clone())
    })
}

#[post("/api/tournaments/{id}/matches/{match_id}/start")]
async fn api_start_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        start_tournament_match(t, path.match_id)?;
        Ok(t.clone())
    })
}

#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_record_result(state: AppState, path: Path<MatchPath>, body: Json<RecordResultBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let outcome = record_tournament_result(t, path.match_id, body.winner, &body.score)?;
        Ok(serde_json::json!({ "outcome": outcome, "tournament": t }))
    })
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| Ok(calculate_standings(&t.matches, &t.teams)))
}

#[get("/api/tournaments/{id}/players/records")]
async fn api_player_records(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| Ok(player_records(&t.matches, &t.teams)))
}

/// Head-to-head summary. `final_winner` stays null until every position is completed.
#[get("/api/tournaments/{id}/team-matches/{team_match_id}")]
async fn api_team_match(state: AppState, path: Path<TeamMatchPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let result = tournament_team_match_result(t, path.team_match_id)?;
        Ok(serde_json::json!({
            "team_match": t.team_match(path.team_match_id),
            "result": result,
            "provisional_leader": result.provisional_leader(),
            "final_winner": result.final_winner().ok(),
        }))
    })
}

#[post("/api/tournaments/{id}/team-matches/{team_match_id}/cancel")]
async fn api_cancel_team_match(state: AppState, path: Path<TeamMatchPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        cancel_team_match(t, path.team_match_id)?;
        Ok(t.clone())
    })
}

/// Register every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_delete_tournament)
        .service(api_add_team)
        .service(api_add_player)
        .service(api_import_roster)
        .service(api_set_rating)
        .service(api_generate_matches)
        .service(api_start_match)
        .service(api_record_result)
        .service(api_standings)
        .service(api_player_records)
        .service(api_team_match)
        .service(api_cancel_team_match);
}
