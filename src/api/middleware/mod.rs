//! HTTP middleware stages applied ahead of the router

mod logging;

pub use logging::logging_middleware;
