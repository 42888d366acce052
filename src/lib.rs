//! Usuários API
//!
//! A minimal HTTP API exposing CRUD-style operations over a single
//! in-memory collection of user records. The store keeps the credential
//! only in hashed form; every response goes through sanitization.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::user::User;
use infrastructure::user::{BcryptHasher, InMemoryUserStore, PasswordHasher, UserService};

/// Build the application state with the in-memory store and bcrypt hasher.
///
/// The store is seeded with the development user so fresh instances match
/// the pre-rewrite API's initial state.
pub fn build_app_state() -> anyhow::Result<AppState> {
    let hasher = BcryptHasher::new();

    let seed_hash = hasher.hash("123456")?;
    let store = InMemoryUserStore::with_users(vec![User::new(
        1,
        "William",
        "william@email.com",
        seed_hash,
    )]);

    let user_service = UserService::new(Arc::new(store), Arc::new(hasher));

    Ok(AppState::new(Arc::new(user_service)))
}
