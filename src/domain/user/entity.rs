//! User entity and related types

use serde::Serialize;

/// User entity held by the store.
///
/// The credential is kept only in hashed form from the moment of creation
/// and is never serialized; responses go through [`User::sanitize`].
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier, assigned by the store
    id: u64,
    /// Display name (wire field `nome`)
    name: String,
    /// Contact email, no uniqueness or format validation
    email: String,
    /// Bcrypt hash of the password, never plaintext
    password_hash: String,
}

/// Input for creating a user, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public-safe view of a [`User`] with the credential omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedUser {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn from_new(id: u64, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Project this user to its public view, dropping the credential.
    pub fn sanitize(&self) -> SanitizedUser {
        SanitizedUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
