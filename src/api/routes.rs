use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health::health_check;
use super::stats::{stats_routes, tool_routes};
use crate::services::DashboardService;

pub fn create_routes(dashboard: DashboardService) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/athletes/:athlete_id", stats_routes(dashboard))
        .nest("/api/tools", tool_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
