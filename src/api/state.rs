//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::user::UserService;

/// Application state passed to every handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}
