/*
 * Responsibility
 * - v1 URL structure
 * - /health, /apps
 * - which routes need session auth is decided in the handlers, not here
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{apps::list_apps, health::health};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/apps", get(list_apps))
}
