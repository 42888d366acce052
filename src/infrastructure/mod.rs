//! Infrastructure layer - Concrete service implementations

pub mod logging;
pub mod user;
