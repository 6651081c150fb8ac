//! Route definitions for the web interface

use crate::{
    handlers::{admin, health, pages},
    state::AppState,
};
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

/// Page routes, each serving a static template
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin", get(pages::admin_page))
        .route("/compynew", get(pages::compynew_page))
        .route("/join-game-demo", get(pages::join_game_demo_page))
}

/// JSON endpoints driven by the admin page
pub fn admin_api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/sports", get(admin::list_sports))
        .route("/api/admin/summary", get(admin::sport_summary))
        .route(
            "/api/admin/stat-types",
            get(admin::list_stat_types).post(admin::create_stat_type),
        )
        .route(
            "/api/admin/players",
            get(admin::list_players).post(admin::create_player),
        )
        .route(
            "/api/admin/players/:id/stat-types",
            get(admin::player_stat_types),
        )
        .route(
            "/api/admin/lines",
            get(admin::list_lines).post(admin::create_line),
        )
        .route("/api/admin/lines/:id/resolve", post(admin::resolve_line))
        .route("/api/admin/games", get(admin::list_games))
        .route("/api/admin/games/:id/resolve", post(admin::resolve_game))
}

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(page_routes())
        .merge(admin_api_routes())
        .route("/health", get(health::health_check))
        // Fallback handler for unknown routes
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested page does not exist"
        })),
    )
}
