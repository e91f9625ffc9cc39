//! Request handlers for wishlist operations.

mod wishlist;

pub use wishlist::*;
