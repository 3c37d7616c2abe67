/// Expands a listing URL into its {listing, contact page} pair
///
/// Strips exactly one trailing slash if present, then returns the listing
/// URL itself and the listing URL with the contact path appended. The
/// result is the same whether or not the input carried a trailing slash:
///
/// ```
/// use mailsift::url::expand_listing_url;
///
/// let with = expand_listing_url("http://x.com/", "/kontakt");
/// let without = expand_listing_url("http://x.com", "/kontakt");
/// assert_eq!(with, without);
/// assert_eq!(with, ["http://x.com".to_string(), "http://x.com/kontakt".to_string()]);
/// ```
pub fn expand_listing_url(url: &str, contact_path: &str) -> [String; 2] {
    let clean = url.strip_suffix('/').unwrap_or(url);
    [clean.to_string(), format!("{}{}", clean, contact_path)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_without_trailing_slash() {
        let pair = expand_listing_url("https://firm.example.com/widgets", "/kontakt");
        assert_eq!(
            pair,
            [
                "https://firm.example.com/widgets".to_string(),
                "https://firm.example.com/widgets/kontakt".to_string(),
            ]
        );
    }

    #[test]
    fn test_expand_strips_one_trailing_slash() {
        let pair = expand_listing_url("https://firm.example.com/widgets/", "/kontakt");
        assert_eq!(
            pair,
            [
                "https://firm.example.com/widgets".to_string(),
                "https://firm.example.com/widgets/kontakt".to_string(),
            ]
        );
    }

    #[test]
    fn test_expand_idempotent_on_trailing_slash() {
        assert_eq!(
            expand_listing_url("http://x.com/", "/kontakt"),
            expand_listing_url("http://x.com", "/kontakt")
        );
    }

    #[test]
    fn test_expand_strips_only_one_slash() {
        let pair = expand_listing_url("https://firm.example.com//", "/kontakt");
        assert_eq!(pair[0], "https://firm.example.com/");
        assert_eq!(pair[1], "https://firm.example.com//kontakt");
    }
}
