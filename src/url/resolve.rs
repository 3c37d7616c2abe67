use url::Url;

/// Resolves an extracted href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - empty or fragment-only hrefs
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
pub fn resolve_href(base_url: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            // Only accept HTTP and HTTPS URLs
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://directory.example.com/industrial/page-1").unwrap()
    }

    #[test]
    fn test_resolve_absolute_href() {
        let resolved = resolve_href(&base_url(), "https://firm.example.com/about").unwrap();
        assert_eq!(resolved.as_str(), "https://firm.example.com/about");
    }

    #[test]
    fn test_resolve_relative_href() {
        let resolved = resolve_href(&base_url(), "/firm1").unwrap();
        assert_eq!(resolved.as_str(), "https://directory.example.com/firm1");
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let resolved = resolve_href(&base_url(), "  /firm1  ").unwrap();
        assert_eq!(resolved.as_str(), "https://directory.example.com/firm1");
    }

    #[test]
    fn test_skip_empty_href() {
        assert!(resolve_href(&base_url(), "").is_none());
        assert!(resolve_href(&base_url(), "   ").is_none());
    }

    #[test]
    fn test_skip_special_schemes() {
        assert!(resolve_href(&base_url(), "javascript:void(0)").is_none());
        assert!(resolve_href(&base_url(), "mailto:info@firm.example.com").is_none());
        assert!(resolve_href(&base_url(), "tel:+48123456789").is_none());
        assert!(resolve_href(&base_url(), "data:text/html,<h1>x</h1>").is_none());
    }

    #[test]
    fn test_skip_fragment_only() {
        assert!(resolve_href(&base_url(), "#section").is_none());
    }

    #[test]
    fn test_skip_non_http_result() {
        assert!(resolve_href(&base_url(), "ftp://firm.example.com/").is_none());
    }
}
