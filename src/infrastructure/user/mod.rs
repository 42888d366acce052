//! User infrastructure: in-memory store, password hashing, and the
//! service tying them together.

mod password;
mod service;
mod store;

pub use password::{BcryptHasher, PasswordHasher};
pub use service::{CreateUserRequest, UserService};
pub use store::InMemoryUserStore;
