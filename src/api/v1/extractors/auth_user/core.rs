use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::state::AppState;

use super::AuthUser;

/// Surfaces the session user without rejecting.
///
/// The session middleware inserts AuthUser into request.extensions() when the
/// `sid` cookie resolves. Handlers that require auth match on the Option and
/// answer 401 themselves, so the auth gate stays visible in the handler.
pub struct MaybeUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeUser
where
    AppState: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<AuthUser>().cloned()))
    }
}
