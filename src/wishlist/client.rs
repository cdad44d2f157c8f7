//! HTTP client for wish list pages using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::wishlist::regions::Region;
use crate::wishlist::urls;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::RngExt;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Callback invoked with the URL before each request.
pub type RequestHook = Box<dyn Fn(&str) + Send + Sync>;

const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Trait for wish list page fetching - enables mocking for tests.
#[async_trait]
pub trait WishListSource: Send + Sync {
    /// Fetches a page and returns the HTML body.
    async fn fetch(&self, url: &str) -> Result<String>;

    /// Returns the site base URL pages are fetched from.
    fn site_url(&self) -> String;
}

/// Amazon HTTP client with browser impersonation.
pub struct WishListClient {
    client: Client,
    locale: String,
    region: Option<Region>,
    delay_ms: u64,
    delay_jitter_ms: u64,
    base_url: Option<String>,
    on_request: Option<RequestHook>,
}

impl WishListClient {
    /// Creates a new client for the given locale suffix (e.g. `.co.uk`).
    pub async fn new(config: &Config, locale: &str) -> Result<Self> {
        Self::with_base_url(config, locale, None).await
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub async fn with_base_url(
        config: &Config,
        locale: &str,
        base_url: Option<String>,
    ) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        let region = Region::from_locale(locale);
        if region.is_none() {
            debug!("Unknown locale '{}', using default headers", locale);
        }

        Ok(Self {
            client,
            locale: locale.to_string(),
            region,
            delay_ms: config.delay_ms,
            delay_jitter_ms: config.delay_jitter_ms,
            base_url,
            on_request: None,
        })
    }

    /// Installs a callback run with the URL before every request.
    pub fn on_request(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_request = Some(Box::new(hook));
        self
    }

    /// Performs a GET request with browser-like headers.
    async fn get(&self, url: &str) -> Result<String> {
        if let Some(hook) = &self.on_request {
            hook(url);
        }

        self.delay().await;

        debug!("GET {}", url);

        let accept_language =
            self.region.map(|r| r.accept_language()).unwrap_or(DEFAULT_ACCEPT_LANGUAGE);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", accept_language)
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .header("Sec-Ch-Ua", "\"Chromium\";v=\"131\", \"Not_A Brand\";v=\"24\"")
            .header("Sec-Ch-Ua-Mobile", "?0")
            .header("Sec-Ch-Ua-Platform", "\"macOS\"")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Sec-Fetch-Site", "none")
            .header("Sec-Fetch-User", "?1")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 503 {
            warn!("Rate limited (503). Consider using a proxy or increasing delay.");
            anyhow::bail!("Rate limited by Amazon. Try increasing --delay or using a proxy.");
        }

        if status == 404 {
            anyhow::bail!("Wish list not found (404). Check the list id and that the list is public.");
        }

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        // Check for redirect to different region
        if let (Some(region), None) = (self.region, &self.base_url) {
            let final_url = response.uri().to_string();
            if !final_url.contains(&region.domain()) {
                warn!(
                    "Redirected to different domain: {}. Your IP may be associated with a different region.",
                    final_url
                );
            }
        }

        response.text().await.context("Failed to read response body")
    }

    /// Adds a random delay to mimic human behavior.
    async fn delay(&self) {
        if self.delay_ms == 0 && self.delay_jitter_ms == 0 {
            return;
        }

        let jitter = if self.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.delay_jitter_ms)
        } else {
            0
        };

        let total_delay = self.delay_ms + jitter;
        debug!("Delaying {}ms", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }

}

#[async_trait]
impl WishListSource for WishListClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching wish list page: {}", url);
        self.get(url).await
    }

    fn site_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| urls::site_url(&self.locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_test_config() -> Config {
        Config {
            proxy: None,
            delay_ms: 0,        // No delay for tests
            delay_jitter_ms: 0, // No jitter for tests
            format: crate::config::OutputFormat::Table,
        }
    }

    async fn mock_client(server: &MockServer, locale: &str) -> WishListClient {
        WishListClient::with_base_url(&make_test_config(), locale, Some(server.uri()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;

        let html = r#"<html><body><span id="profile-list-name">Jane</span></body></html>"#;

        Mock::given(method("GET"))
            .and(path("/hz/wishlist/ls/2OABCDE0FGH42"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server, ".co.uk").await;
        let url = urls::page_url(&client.site_url(), "2OABCDE0FGH42");

        let body = client.fetch(&url).await.unwrap();
        assert!(body.contains("profile-list-name"));
    }

    #[tokio::test]
    async fn test_request_hook_sees_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let client = mock_client(&mock_server, ".com")
            .await
            .on_request(move |url| sink.lock().unwrap().push(url.to_string()));

        let url = format!("{}/hz/wishlist/ls/ABC", mock_server.uri());
        client.fetch(&url).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![url]);
    }

    #[tokio::test]
    async fn test_rate_limited_503() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server, ".com").await;
        let err = client.fetch(&mock_server.uri()).await.unwrap_err().to_string();
        assert!(err.contains("Rate limited"));
    }

    #[tokio::test]
    async fn test_not_found_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server, ".com").await;
        let err = client.fetch(&mock_server.uri()).await.unwrap_err().to_string();
        assert!(err.contains("404"));
    }

    #[tokio::test]
    async fn test_http_error_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server, ".com").await;
        let err = client.fetch(&mock_server.uri()).await.unwrap_err().to_string();
        assert!(err.contains("500"));
    }

    #[tokio::test]
    async fn test_empty_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server, ".com").await;
        assert!(client.fetch(&mock_server.uri()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let config = make_test_config();
        let client = WishListClient::new(&config, ".com").await.unwrap();

        let result = client.fetch("http://127.0.0.1:9/hz/wishlist/ls/X").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to fetch"));
    }

    #[tokio::test]
    async fn test_site_url_default() {
        let config = make_test_config();
        let client = WishListClient::new(&config, ".co.uk").await.unwrap();

        assert_eq!(client.site_url(), "https://www.amazon.co.uk");
        assert_eq!(client.region, Some(Region::Uk));
    }

    #[tokio::test]
    async fn test_site_url_unknown_locale() {
        let config = make_test_config();
        let client = WishListClient::new(&config, ".example").await.unwrap();

        assert_eq!(client.site_url(), "https://www.amazon.example");
        assert!(client.region.is_none());
    }

    #[tokio::test]
    async fn test_site_url_custom() {
        let config = make_test_config();
        let client =
            WishListClient::with_base_url(&config, ".com", Some("http://custom.url".to_string()))
                .await
                .unwrap();

        assert_eq!(client.site_url(), "http://custom.url");
    }
}
