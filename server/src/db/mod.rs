//! Database module for PostgreSQL persistence.

mod pool;
mod tokens;
mod wishlist;

pub use pool::*;
pub use tokens::*;
pub use wishlist::*;
