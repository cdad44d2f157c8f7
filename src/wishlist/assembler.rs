//! Accumulates extraction results into a [`WishList`].

use crate::wishlist::models::{Item, WishList};
use tracing::debug;

/// Result-in-progress for a single extraction run.
///
/// Created by the caller, handed to the extractor by `&mut`, and consumed
/// by [`WishListBuilder::finish`]. Dropping it on error discards any items
/// gathered so far.
#[derive(Debug, Default)]
pub struct WishListBuilder {
    owner: Option<String>,
    items: Vec<Item>,
}

impl WishListBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the owner name. The most recent call wins.
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        let owner = owner.into();
        if let Some(previous) = &self.owner {
            debug!("Owner name replaced: {} -> {}", previous, owner);
        }
        self.owner = Some(owner);
    }

    /// Appends an item, keeping page order.
    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Number of items collected so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items were collected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merges owner and items into the final list.
    pub fn finish(self) -> WishList {
        WishList { owner: self.owner.unwrap_or_default(), items: self.items }
    }
}
