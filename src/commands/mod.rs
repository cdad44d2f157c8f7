//! CLI command implementations.

pub mod wishlist;

pub use wishlist::WishListCommand;
