//! User domain
//!
//! Domain types for the user collection: the entity, its sanitized public
//! view, and the store trait the API is built against.

mod entity;
mod store;

pub use entity::{NewUser, SanitizedUser, User};
pub use store::UserStore;

#[cfg(test)]
pub use store::mock::MockUserStore;
