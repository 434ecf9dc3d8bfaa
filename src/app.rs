/*
 * Responsibility
 * - Config load → dependency construction → Router assembly
 * - Middleware application (request-id/trace/CORS/session)
 * - axum::serve() startup
 */
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use crate::{
    api,
    config::Config,
    middleware::{cors, http, session},
    repos::gist_repo::PgGistRepo,
    services::session::ValkeySessionStore,
    state::AppState,
};

pub async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    let sessions = ValkeySessionStore::new(&config.redis_url).await?;

    let state = AppState {
        gists: Arc::new(PgGistRepo::new(db)),
        sessions: Arc::new(sessions),
    };

    let app = build_router(state);
    let app = cors::apply(app, &config);
    let app = http::apply(app);

    tracing::info!(addr = %config.addr, "listening");

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// Session resolution is scoped to /api/v1; transport middleware (trace,
// request-id, CORS) is applied on top by run().
pub(crate) fn build_router(state: AppState) -> Router {
    let v1 = session::apply(api::v1::routes(), state.clone());

    Router::new().nest("/api/v1", v1).with_state(state)
}
