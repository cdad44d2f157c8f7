//! Data models for wish lists and their items.

use serde::{Deserialize, Serialize};

/// Placeholder for items Amazon shows without a price (out of stock,
/// discontinued, third-party only).
pub const PRICE_UNAVAILABLE: &str = "Price currently unavailable";

/// A wish list entry. Fields hold the display text as shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Amazon item id, never empty
    pub id: String,
    /// Product title
    pub title: String,
    /// Price text, or [`PRICE_UNAVAILABLE`]
    pub price: String,
    /// Absolute product URL
    pub url: String,
    /// Star rating text, may be empty
    pub rating: String,
    /// "Item added" text, may be empty
    pub date_added: String,
}

/// A wish list owner together with its items in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishList {
    /// Owner name, empty if the page did not show one
    pub owner: String,
    /// Items in page order
    pub items: Vec<Item>,
}

impl WishList {
    /// Returns number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items were found.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(price: &str) -> Item {
        Item {
            id: "I2ABCDEF".to_string(),
            title: "Test Product".to_string(),
            price: price.to_string(),
            url: "https://www.amazon.co.uk/dp/B08N5WRWNW".to_string(),
            rating: "4.5 out of 5 stars".to_string(),
            date_added: "Item added 3 March 2024".to_string(),
        }
    }

    #[test]
    fn test_wishlist_count() {
        let mut list = WishList::default();
        assert!(list.is_empty());
        assert_eq!(list.count(), 0);
        assert!(list.owner.is_empty());

        list.items.push(make_item("£1.00"));
        assert!(!list.is_empty());
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn test_wishlist_serde() {
        let list = WishList { owner: "Jane".to_string(), items: vec![make_item("£19.99")] };
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains("\"owner\":\"Jane\""));
        assert!(json.contains("\"date_added\""));

        let parsed: WishList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }
}
