//! Item extraction from the wish list container.
//!
//! Amazon keys every field of a wish list row off the row's item id
//! (`#itemPrice_<id>`, `#itemImage_<id>`, ...), so the id is read first and
//! the remaining selectors are derived from it.

use crate::wishlist::assembler::WishListBuilder;
use crate::wishlist::error::ExtractError;
use crate::wishlist::models::{Item, PRICE_UNAVAILABLE};
use crate::wishlist::selectors::{self, item, page};
use crate::wishlist::urls;
use scraper::{ElementRef, Selector};
use std::ops::Range;
use tracing::{debug, trace};

/// Extracts items from `#g-items` containers.
pub struct Extractor {
    site_url: String,
}

impl Extractor {
    /// Creates an extractor resolving item links against `site_url`.
    pub fn new(site_url: impl Into<String>) -> Self {
        Self { site_url: site_url.into() }
    }

    /// Extracts every row of a container into `list`.
    ///
    /// Any fatal error stops extraction immediately; the caller is expected
    /// to drop `list` in that case.
    pub fn extract_container(
        &self,
        container: ElementRef,
        list: &mut WishListBuilder,
    ) -> Result<(), ExtractError> {
        let count = self.item_count(container)?;

        // Positions past the last child element cannot match
        let children = container.children().filter(|c| c.value().is_element()).count();
        let indices =
            row_indices(count).take_while(|index| index + page::ROW_OFFSET <= children);
        debug!("Container reports {} items across {} children", count, children);

        for index in indices {
            let selector = selectors::compile(&page::row(index))?;

            for row in container.select(&selector) {
                let item = self.extract_row(row, index + page::ROW_OFFSET)?;
                trace!("Parsed item: {} - {}", item.id, item.title);
                list.push_item(item);
            }
        }

        Ok(())
    }

    /// Reads the expected item count from the container's hidden input.
    pub fn item_count(&self, container: ElementRef) -> Result<i64, ExtractError> {
        let value = container
            .select(&page::ITEM_COUNT)
            .next()
            .and_then(|e| e.value().attr(page::ITEM_COUNT_ATTR))
            .ok_or(ExtractError::MissingField { field: "item count" })?;

        value
            .parse()
            .map_err(|source| ExtractError::CountParse { value: value.to_string(), source })
    }

    /// Extracts a single row. `position` is the row's 1-based sibling index.
    pub fn extract_row(&self, row: ElementRef, position: usize) -> Result<Item, ExtractError> {
        // Without the id none of the other selectors can be built
        let id = match row.value().attr(page::ITEM_ID_ATTR) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(ExtractError::MissingIdentifier { position }),
        };

        let anchor = selectors::compile(&item::anchor(&id))?;
        let title = child_attr(row, &anchor, "title");
        let href = child_attr(row, &anchor, "href");

        // Empty when out of stock, discontinued etc.
        let mut price = child_text(row, &selectors::compile(&item::price(&id))?);
        if price.is_empty() {
            trace!("No price for {}, using placeholder", id);
            price = PRICE_UNAVAILABLE.to_string();
        }

        let rating = child_text(row, &selectors::compile(&item::rating(&id))?);
        let date_added = child_text(row, &selectors::compile(&item::date_added(&id))?);

        Ok(Item { url: urls::resolve(&self.site_url, &href), id, title, price, rating, date_added })
    }
}

/// Row indices visited for a reported item count.
///
/// This walks `count + 1` positions, one more than the page reports. The
/// extra position normally matches nothing; a stray trailing row there is
/// extracted like any other.
pub fn row_indices(count: i64) -> Range<usize> {
    if count < 0 {
        return 0..0;
    }
    let upper = usize::try_from(count).map_or(usize::MAX, |c| c.saturating_add(1));
    0..upper
}

/// Trimmed text of all elements matching `selector` under `element`.
fn child_text(element: ElementRef, selector: &Selector) -> String {
    element.select(selector).flat_map(|e| e.text()).collect::<String>().trim().to_string()
}

/// Trimmed attribute of the first element matching `selector` under `element`.
fn child_attr(element: ElementRef, selector: &Selector, attr: &str) -> String {
    element
        .select(selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}
