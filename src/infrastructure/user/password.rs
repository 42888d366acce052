//! Password hashing utilities using bcrypt

use std::fmt::Debug;

use crate::domain::DomainError;

/// Fixed bcrypt work factor, matching the API's compatibility contract.
const BCRYPT_COST: u32 = 10;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password. The salt is regenerated per call, so hashing the
    /// same plaintext twice yields different outputs.
    fn hash(&self, password: &str) -> Result<String, DomainError>;
}

/// Bcrypt-based password hasher with a fixed cost of 10
#[derive(Debug, Clone, Default)]
pub struct BcryptHasher;

impl BcryptHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, BCRYPT_COST)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }
}
