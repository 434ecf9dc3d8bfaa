//! Session resolution: `sid` cookie → SessionStore → AuthUser in extensions.
//!
//! This middleware never rejects. Handlers look at the resolved
//! `Option<AuthUser>` (via the MaybeUser extractor) and decide what a missing
//! user means; for `/apps` that is a 401.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "sid";

/// Apply session resolution to the given Router.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8: from_fn cannot take a State extractor, so pass state explicitly
    router.layer(middleware::from_fn_with_state(state, session_middleware))
}

async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(sid) = cookie_value(req.headers(), SESSION_COOKIE) {
        match state.sessions.user_for_session(&sid).await {
            Ok(Some(user)) => {
                // middleware → extractor hand-off
                req.extensions_mut().insert(user);
            }
            Ok(None) => {}
            Err(err) => {
                // Unreachable/garbled store reads as "no user"; the handler's
                // 401 gate takes it from there.
                tracing::warn!(
                    backend = state.sessions.backend_name(),
                    error = ?err,
                    "session lookup failed"
                );
            }
        }
    }

    next.run(req).await
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then(|| v.to_string())
    })
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        h
    }

    #[test]
    fn finds_session_cookie_among_others() {
        let h = headers("theme=dark; sid=abc123; lang=en");
        assert_eq!(cookie_value(&h, SESSION_COOKIE).as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_cookie_header_is_none() {
        assert_eq!(cookie_value(&HeaderMap::new(), SESSION_COOKIE), None);
    }

    #[test]
    fn other_cookies_do_not_match() {
        let h = headers("sidecar=1");
        assert_eq!(cookie_value(&h, SESSION_COOKIE), None);
    }

    #[test]
    fn empty_value_is_preserved() {
        let h = headers("sid=");
        assert_eq!(cookie_value(&h, SESSION_COOKIE).as_deref(), Some(""));
    }
}
