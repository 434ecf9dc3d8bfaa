pub mod store;
pub mod valkey;

pub use store::{SessionError, SessionResult, SessionStore};
pub use valkey::ValkeySessionStore;
