/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Collaborators live behind trait objects so tests can inject mocks
 * - Clone is cheap (Arc inside)
 */
use std::sync::Arc;

use crate::repos::gist_repo::GistLister;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub gists: Arc<dyn GistLister>,
    pub sessions: Arc<dyn SessionStore>,
}
