/*
 * Responsibility
 * - The "authenticated user" type handlers see
 * - The session middleware resolves it and stores it in request extensions;
 *   handlers only ever receive this type
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User attached to a session-authenticated request.
///
/// Deserialized verbatim from the session record. Beyond `id` (used to scope
/// gist queries) the fields are passed through, not interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}
