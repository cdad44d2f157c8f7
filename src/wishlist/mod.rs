//! Wish list fetching, extraction, and data models.

pub mod assembler;
pub mod client;
pub mod document;
pub mod error;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod regions;
pub mod selectors;
pub mod urls;

pub use assembler::WishListBuilder;
pub use client::{WishListClient, WishListSource};
pub use error::ExtractError;
pub use models::{Item, WishList, PRICE_UNAVAILABLE};
pub use parser::Parser;
pub use regions::Region;
