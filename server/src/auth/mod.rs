//! Bearer token authentication.

mod middleware;

pub use middleware::*;
