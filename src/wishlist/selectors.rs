//! CSS selectors for Amazon wish list pages.
//!
//! This file contains every selector the extractor relies on. Update it
//! when Amazon changes the wish list markup.
//!
//! **Update process**: When extraction fails, capture an HTML sample,
//! update selectors, and add a test fixture.

use crate::wishlist::error::ExtractError;
use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for the wish list page itself.
pub mod page {
    use super::*;

    /// Item list container.
    pub static CONTAINER: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#g-items").unwrap());

    /// Hidden input carrying the expected item count, a direct child of the container.
    pub static ITEM_COUNT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#g-items > input[type='hidden']").unwrap());

    /// Attribute holding the item count.
    pub static ITEM_COUNT_ATTR: &str = "value";

    /// Wish list owner name.
    pub static OWNER_NAME: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#profile-list-name").unwrap());

    /// Item id attribute on each row.
    pub static ITEM_ID_ATTR: &str = "data-itemid";

    /// `nth-child` is 1-based and position 1 is the hidden count input, so
    /// item `i` lives at `i + ROW_OFFSET`.
    pub const ROW_OFFSET: usize = 2;

    /// Row selector for item index `i`.
    pub fn row(index: usize) -> String {
        format!("#g-items > li:nth-child({})", index + ROW_OFFSET)
    }
}

/// Selectors keyed off an item id. Amazon suffixes element ids with the
/// item id, so these are rebuilt for every lookup.
pub mod item {
    /// Image link carrying the title and href.
    pub fn anchor(id: &str) -> String {
        format!("#itemImage_{} > a", id)
    }

    /// Offscreen price text.
    pub fn price(id: &str) -> String {
        format!("#itemPrice_{} > span[class='a-offscreen']", id)
    }

    /// Star rating text.
    pub fn rating(id: &str) -> String {
        format!("#review_stars_{} > span", id)
    }

    /// "Item added" date text.
    pub fn date_added(id: &str) -> String {
        format!("#itemAddedDate_{}", id)
    }
}

/// Selectors for detecting error/captcha pages.
pub mod errors {
    use super::*;

    /// CAPTCHA form.
    pub static CAPTCHA: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form[action*='validateCaptcha'], \
             img[src*='captcha']",
        )
        .unwrap()
    });

    /// Dog page (Amazon's error page).
    pub static DOG_PAGE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "img[alt*='dog'], \
             .a-box-inner a[href='/ref=cs_503_link']",
        )
        .unwrap()
    });
}

/// Compiles a dynamically built selector.
pub fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
