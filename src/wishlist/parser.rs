//! Turns a fetched wish list page into a [`WishList`].

use crate::wishlist::assembler::WishListBuilder;
use crate::wishlist::document::Page;
use crate::wishlist::error::ExtractError;
use crate::wishlist::extractor::Extractor;
use crate::wishlist::models::WishList;
use tracing::debug;

/// Parser for wish list pages of one site.
pub struct Parser {
    extractor: Extractor,
}

impl Parser {
    /// Creates a parser resolving item links against `site_url`.
    pub fn new(site_url: impl Into<String>) -> Self {
        Self { extractor: Extractor::new(site_url) }
    }

    /// Parses a wish list page.
    ///
    /// Either every item on the page is returned or an error is; a fatal
    /// condition in any row discards the rows already extracted.
    pub fn parse_wishlist(&self, html: &str) -> Result<WishList, ExtractError> {
        let page = Page::parse(html);
        page.check_for_errors()?;

        let mut list = WishListBuilder::new();

        for container in page.containers() {
            self.extractor.extract_container(container, &mut list)?;
        }

        if list.is_empty() {
            debug!("No items extracted");
        } else {
            debug!("Extracted {} items", list.len());
        }

        for owner in page.owner_names() {
            list.set_owner(owner);
        }

        Ok(list.finish())
    }
}
