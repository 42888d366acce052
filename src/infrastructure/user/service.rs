//! User service for registration and lookup

use std::sync::Arc;

use crate::domain::user::{NewUser, SanitizedUser, User, UserStore};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Required create fields, in the order they are reported when missing.
const REQUIRED_FIELDS: [&str; 3] = ["nome", "email", "senha"];

/// Request for creating a new user.
///
/// Fields are optional here so presence checking stays in one place; a
/// field is treated as missing when absent or empty.
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User service orchestrating the store and password hashing
#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Create a new user: validate presence, hash the password off the
    /// async runtime, then append to the store.
    ///
    /// The store lock is never held while hashing runs.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let missing = missing_fields(&request);

        if !missing.is_empty() {
            return Err(DomainError::validation(format!(
                "Parâmetros não informados: {}",
                missing.join(", ")
            )));
        }

        // Presence was just checked
        let name = request.name.unwrap_or_default();
        let email = request.email.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        let hasher = Arc::clone(&self.hasher);
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))??;

        self.store
            .append(NewUser {
                name,
                email,
                password_hash,
            })
            .await
    }

    /// List all users in insertion order, sanitized
    pub async fn list(&self) -> Result<Vec<SanitizedUser>, DomainError> {
        let users = self.store.list().await?;
        Ok(users.iter().map(User::sanitize).collect())
    }

    /// Get a user by id, sanitized
    pub async fn get(&self, id: u64) -> Result<Option<SanitizedUser>, DomainError> {
        let user = self.store.find_by_id(id).await?;
        Ok(user.as_ref().map(User::sanitize))
    }

    /// Delete a user by id, reporting whether one existed
    pub async fn delete(&self, id: u64) -> Result<bool, DomainError> {
        self.store.remove_by_id(id).await
    }
}

/// Collect the required fields that are absent or empty, in fixed order.
fn missing_fields(request: &CreateUserRequest) -> Vec<&'static str> {
    let values = [
        request.name.as_deref(),
        request.email.as_deref(),
        request.password.as_deref(),
    ];

    REQUIRED_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.is_none_or(str::is_empty))
        .map(|(field, _)| *field)
        .collect()
}
