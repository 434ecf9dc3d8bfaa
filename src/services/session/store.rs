//! Session store interface used by the session middleware.
use async_trait::async_trait;
use thiserror::Error;

use crate::api::v1::extractors::AuthUser;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-layer errors (transport/command/decoding).
///
/// Kept independent from `AppError`: the session middleware fails soft on
/// these, other callers may not.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session backend connection error: {0}")]
    BackendConnection(String),
    #[error("session backend command error: {0}")]
    BackendCommand(String),
    #[error("session record invalid: {0}")]
    InvalidRecord(String),
}

/// Read side of session handling.
///
/// Session establishment (login) belongs to a separate service; this one
/// only resolves an existing session id to its user.
#[async_trait]
pub trait SessionStore: Send + Sync {
    // Backend name for logging.
    fn backend_name(&self) -> &'static str;

    // Resolve a session id to its user. Ok(None) for unknown/expired ids.
    async fn user_for_session(&self, sid: &str) -> SessionResult<Option<AuthUser>>;
}
