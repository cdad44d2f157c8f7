//! amz-wishlist - Stateless Amazon wish list extractor CLI
//!
//! Fetches a public wish list page with TLS fingerprint emulation and
//! extracts its owner and items.

pub mod commands;
pub mod config;
pub mod format;
pub mod wishlist;

pub use config::Config;
pub use wishlist::models::{Item, WishList};
pub use wishlist::regions::Region;
