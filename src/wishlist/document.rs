//! Parsed wish list page and the traversals the extractor consumes.

use crate::wishlist::error::ExtractError;
use crate::wishlist::selectors::{errors, page};
use scraper::{ElementRef, Html};

/// A parsed wish list page.
///
/// All matches come from a single parse, so every traversal over the same
/// page yields the same nodes in document order.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parses an HTML document.
    pub fn parse(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// Checks for CAPTCHA or error pages served instead of the list.
    ///
    /// Only pages without an item container are inspected; item images on a
    /// real list can match the interstitial selectors (a dog bed, say).
    pub fn check_for_errors(&self) -> Result<(), ExtractError> {
        if self.containers().next().is_some() {
            return Ok(());
        }

        if self.document.select(&errors::CAPTCHA).next().is_some() {
            return Err(ExtractError::Blocked(
                "CAPTCHA detected. Amazon is blocking requests. \
                Try using a proxy or waiting before retrying.",
            ));
        }

        if self.document.select(&errors::DOG_PAGE).next().is_some() {
            return Err(ExtractError::Blocked(
                "Amazon error page detected (503). \
                The service may be temporarily unavailable.",
            ));
        }

        Ok(())
    }

    /// Item list containers in document order.
    pub fn containers(&self) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        self.document.select(&page::CONTAINER)
    }

    /// Owner name texts in document order.
    pub fn owner_names(&self) -> impl Iterator<Item = String> + '_ {
        self.document
            .select(&page::OWNER_NAME)
            .map(|e| e.text().collect::<String>().trim().to_string())
    }
}
