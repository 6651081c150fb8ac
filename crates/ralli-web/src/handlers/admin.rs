//! JSON handlers behind the admin console page

use super::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use ralli_admin::{ListQuery, Listing, NewLine, NewPlayer, NewStatType, Outcome, SportSummary};
use ralli_core::{Error, Game, GameAction, Line, LineOutcome, Player, SPORTS, Sport, StatType};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

/// Line resolution request body
#[derive(Debug, Deserialize)]
pub struct ResolveLineRequest {
    /// `over`, `under` or `cancel`
    pub outcome: String,
}

/// Game resolution request body
#[derive(Debug, Deserialize)]
pub struct ResolveGameRequest {
    /// `end` or `cancel`
    pub action: String,
}

fn store_failure(e: Error) -> ApiError {
    error!("Failed to read admin records: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(e.into()))
}

fn respond<T>(outcome: Outcome<T>) -> (StatusCode, Json<Outcome<T>>) {
    let status = if outcome.is_applied() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(outcome))
}

/// Sport catalog
pub async fn list_sports() -> Json<Vec<Sport>> {
    Json(SPORTS.to_vec())
}

/// Stat type count per sport
pub async fn sport_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SportSummary>>, ApiError> {
    state
        .console
        .sport_summaries()
        .map(Json)
        .map_err(store_failure)
}

/// Filtered stat types
///
/// ```text
/// GET /api/admin/stat-types?search=points&sport=NBA
/// ```
pub async fn list_stat_types(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Listing<StatType>>, ApiError> {
    state
        .console
        .list_stat_types(&query)
        .map(Json)
        .map_err(store_failure)
}

/// Create a stat type
pub async fn create_stat_type(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewStatType>,
) -> (StatusCode, Json<Outcome<StatType>>) {
    respond(state.console.create_stat_type(form))
}

/// Every player
pub async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Listing<Player>>, ApiError> {
    state.console.list_players().map(Json).map_err(store_failure)
}

/// Add a player
pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewPlayer>,
) -> (StatusCode, Json<Outcome<Player>>) {
    respond(state.console.create_player(form))
}

/// Stat types offered in the line form once a player is selected
pub async fn player_stat_types(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<StatType>>, ApiError> {
    state
        .console
        .stat_types_for_player(Some(&player_id))
        .map(Json)
        .map_err(store_failure)
}

/// Filtered lines
pub async fn list_lines(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Listing<Line>>, ApiError> {
    state
        .console
        .list_lines(&query)
        .map(Json)
        .map_err(store_failure)
}

/// Create a line
pub async fn create_line(
    State(state): State<Arc<AppState>>,
    Json(form): Json<NewLine>,
) -> (StatusCode, Json<Outcome<Line>>) {
    respond(state.console.create_line(form))
}

/// Settle a line
pub async fn resolve_line(
    State(state): State<Arc<AppState>>,
    Path(line_id): Path<String>,
    Json(request): Json<ResolveLineRequest>,
) -> (StatusCode, Json<Outcome<Line>>) {
    match request.outcome.parse::<LineOutcome>() {
        Ok(outcome) => respond(state.console.resolve_line(&line_id, outcome)),
        Err(e) => respond(Outcome::rejected(&e)),
    }
}

/// Filtered games
pub async fn list_games(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Listing<Game>>, ApiError> {
    state
        .console
        .list_games(&query)
        .map(Json)
        .map_err(store_failure)
}

/// End or cancel a game
pub async fn resolve_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
    Json(request): Json<ResolveGameRequest>,
) -> (StatusCode, Json<Outcome<Game>>) {
    match request.action.parse::<GameAction>() {
        Ok(action) => respond(state.console.resolve_game(&game_id, action)),
        Err(e) => respond(Outcome::rejected(&e)),
    }
}

