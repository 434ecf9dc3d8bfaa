use async_trait::async_trait;

use crate::api::v1::extractors::AuthUser;
use crate::services::session::store::{SessionError, SessionResult, SessionStore};

/// Valkey/Redis-backed session store.
///
/// The login service writes `session:{sid}` → JSON user record with a TTL;
/// this side only reads, so expiry is entirely the backend's business.
#[derive(Clone, Debug)]
pub struct ValkeySessionStore {
    manager: redis::aio::ConnectionManager,
}

impl ValkeySessionStore {
    // Create a store from a URL like `redis://localhost:6379`
    pub async fn new(url: &str) -> Result<Self, SessionError> {
        let client =
            redis::Client::open(url).map_err(|e| SessionError::BackendConnection(e.to_string()))?;

        let manager = client
            .get_connection_manager()
            .await
            .map_err(|e| SessionError::BackendConnection(e.to_string()))?;

        Ok(Self { manager })
    }
}

fn session_key(sid: &str) -> String {
    format!("session:{sid}")
}

fn decode_record(json: &str) -> SessionResult<AuthUser> {
    serde_json::from_str(json).map_err(|e| SessionError::InvalidRecord(e.to_string()))
}

#[async_trait]
impl SessionStore for ValkeySessionStore {
    fn backend_name(&self) -> &'static str {
        "valkey"
    }

    async fn user_for_session(&self, sid: &str) -> SessionResult<Option<AuthUser>> {
        // Use a clone of the connection manager
        let mut conn = self.manager.clone();

        let raw: Option<String> = redis::cmd("GET")
            .arg(session_key(sid))
            .query_async(&mut conn)
            .await
            .map_err(|e| SessionError::BackendCommand(e.to_string()))?;

        match raw {
            None => Ok(None),
            Some(json) => Ok(Some(decode_record(&json)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn session_key_is_namespaced() {
        assert_eq!(session_key("abc123"), "session:abc123");
    }

    #[test]
    fn decodes_a_session_record() {
        let user = decode_record(
            r#"{"id":"00000000-0000-0000-0000-000000000001","username":"rich"}"#,
        )
        .unwrap();

        assert_eq!(user.id, Uuid::from_u128(1));
        assert_eq!(user.username, "rich");
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn garbled_record_is_invalid_not_a_panic() {
        let err = decode_record("not json").unwrap_err();
        assert!(matches!(err, SessionError::InvalidRecord(_)));
    }
}
