//! User store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User};
use crate::domain::DomainError;

/// Storage interface for the user collection.
///
/// Implementations must preserve insertion order across deletes and keep
/// ids unique. `append` owns id assignment: ids come from a monotonically
/// increasing counter, so an id is never reissued after a delete.
#[async_trait]
pub trait UserStore: Send + Sync + Debug {
    /// Snapshot of all users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;

    /// Assign the next id and push the user to the back of the collection
    async fn append(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Remove the user with the given id, reporting whether one existed
    async fn remove_by_id(&self, id: u64) -> Result<bool, DomainError>;
}
