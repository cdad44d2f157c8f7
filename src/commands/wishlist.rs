//! Wish list command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::wishlist::{urls, Parser, WishList, WishListClient, WishListSource};
use anyhow::{Context, Result};
use tracing::info;

/// Fetches and extracts a wish list.
pub struct WishListCommand {
    config: Config,
}

impl WishListCommand {
    /// Creates a new wish list command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the list and returns formatted output.
    pub async fn execute(&self, locale: &str, list_id: &str) -> Result<String> {
        let client = WishListClient::new(&self.config, locale)
            .await
            .context("Failed to create HTTP client")?
            .on_request(|url| eprintln!("Visiting {}", url));

        self.execute_with_client(&client, list_id).await
    }

    /// Fetches the list with a provided client and returns formatted output.
    pub async fn execute_with_client(
        &self,
        client: &impl WishListSource,
        list_id: &str,
    ) -> Result<String> {
        let list = self.fetch_with_client(client, list_id).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_wishlist(&list))
    }

    /// Fetches the list with a provided client.
    pub async fn fetch_with_client(
        &self,
        client: &impl WishListSource,
        list_id: &str,
    ) -> Result<WishList> {
        let site = client.site_url();
        let url = urls::page_url(&site, list_id);

        info!("Fetching wish list {}", list_id);

        let html = client.fetch(&url).await?;
        let list = Parser::new(site)
            .parse_wishlist(&html)
            .with_context(|| format!("Failed to extract wish list {}", list_id))?;

        info!("Found {} items", list.count());
        Ok(list)
    }
}
