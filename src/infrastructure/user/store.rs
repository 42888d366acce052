//! In-memory user store implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserStore};
use crate::domain::DomainError;

#[derive(Debug)]
struct StoreInner {
    /// Insertion-ordered collection; deletes never reorder it
    users: Vec<User>,
    /// Monotonic counter; ids are never reissued, even after deletes
    next_id: u64,
}

/// In-memory implementation of [`UserStore`].
///
/// A single `RwLock` serializes all access, so store invariants hold under
/// axum's concurrent request dispatch. Callers must not hold the lock
/// across hashing work; only `append` itself takes the write lock.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryUserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store seeded with initial users.
    ///
    /// The id counter starts past the highest seeded id.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(User::id).max().unwrap_or(0) + 1;

        Self {
            inner: Arc::new(RwLock::new(StoreInner { users, next_id })),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn append(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;

        let user = User::from_new(inner.next_id, new_user);
        inner.next_id += 1;
        inner.users.push(user.clone());

        Ok(user)
    }

    async fn remove_by_id(&self, id: u64) -> Result<bool, DomainError> {
        let mut inner = self.inner.write().await;

        match inner.users.iter().position(|u| u.id() == id) {
            Some(index) => {
                inner.users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
