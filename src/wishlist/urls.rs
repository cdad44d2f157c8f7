//! URL construction for wish list pages.
//!
//! Locale codes are domain suffixes such as `.co.uk` or `.de`. They are
//! interpolated as-is; a malformed locale only surfaces later as a failed
//! request.

/// Path template for a public wish list.
const WISHLIST_PATH: &str = "/hz/wishlist/ls/";

/// Returns the site base URL for a locale suffix (e.g. `.co.uk`).
pub fn site_url(locale: &str) -> String {
    format!("https://www.amazon{}", locale)
}

/// Returns the path of the wish list page for a list identifier.
pub fn wishlist_path(list_id: &str) -> String {
    format!("{}{}", WISHLIST_PATH, list_id)
}

/// Returns the full wish list page URL under the given site.
pub fn page_url(site: &str, list_id: &str) -> String {
    format!("{}{}", site, wishlist_path(list_id))
}

/// Resolves an item href against the site base URL.
pub fn resolve(site: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}{}", site, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_url() {
        assert_eq!(site_url(".co.uk"), "https://www.amazon.co.uk");
        assert_eq!(site_url(".de"), "https://www.amazon.de");
        assert_eq!(site_url(".com"), "https://www.amazon.com");
    }

    #[test]
    fn test_wishlist_path() {
        assert_eq!(wishlist_path("2OABCDE0FGH42"), "/hz/wishlist/ls/2OABCDE0FGH42");
    }

    #[test]
    fn test_page_url_composition() {
        let site = site_url(".co.uk");
        assert_eq!(site, "https://www.amazon.co.uk");
        assert_eq!(
            page_url(&site, "2OABCDE0FGH42"),
            "https://www.amazon.co.uk/hz/wishlist/ls/2OABCDE0FGH42"
        );
    }

    #[test]
    fn test_no_locale_validation() {
        // Garbage in, garbage out: the request is what fails, not the builder
        assert_eq!(site_url("not a locale"), "https://www.amazonnot a locale");
        assert_eq!(site_url(""), "https://www.amazon");
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve("https://www.amazon.de", "/dp/B08N5WRWNW/?coliid=I1"),
            "https://www.amazon.de/dp/B08N5WRWNW/?coliid=I1"
        );
        assert_eq!(resolve("https://www.amazon.de", ""), "https://www.amazon.de");
    }

    #[test]
    fn test_resolve_absolute_untouched() {
        assert_eq!(
            resolve("https://www.amazon.de", "https://smile.amazon.de/dp/B1"),
            "https://smile.amazon.de/dp/B1"
        );
        assert_eq!(resolve("https://www.amazon.de", "http://x.test/a"), "http://x.test/a");
    }

    #[test]
    fn test_resolve_http_prefixed_path() {
        assert_eq!(
            resolve("https://www.amazon.de", "httpfoo/bar"),
            "https://www.amazon.dehttpfoo/bar"
        );
    }
}
