//! Listing link extraction
//!
//! The directory page marks each listing with a distinctive anchor button;
//! the selector identifying those anchors comes from the configuration.

use scraper::{Html, Selector};

/// Extracts the href values of all elements matching the listing selector
///
/// Hrefs are returned in document order; empty strings are excluded.
/// Malformed HTML is parsed permissively, so the worst case is an empty
/// result, never an error.
///
/// # Arguments
///
/// * `html` - The directory page HTML
/// * `selector` - The compiled anchor selector
pub fn extract_listing_links(html: &str, selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}
