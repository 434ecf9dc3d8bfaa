/*
 * Responsibility
 * - GET /apps: list the session user's gists
 * - The auth gate lives here (no user → 401), not in middleware
 * - The lister's page is the response body, unchanged
 */
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    api::v1::{
        dto::apps::{GistListPage, ListParams, ListQuery},
        extractors::MaybeUser,
    },
    error::AppError,
    state::AppState,
};

pub async fn list_apps(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(params): Query<ListParams>,
) -> Result<Json<GistListPage>, AppError> {
    let Some(user) = user else {
        return Err(AppError::Unauthorized);
    };

    let query = ListQuery::try_from(params)?;

    // Single await; repo errors surface unchanged through AppError.
    let page = state.gists.list(&user, &query).await?;

    Ok(Json(page))
}
