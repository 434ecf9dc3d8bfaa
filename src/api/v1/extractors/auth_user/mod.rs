/*!
 * Session-user extractor
 *
 * Responsibility:
 * - Provide the session-resolved user (AuthUser) to handlers
 * - HTTP / axum wiring lives in core, the type itself in types
 *
 * Public API:
 * - AuthUser
 * - MaybeUser
 */

mod core;
mod types;

pub use core::MaybeUser;
pub use types::AuthUser;
