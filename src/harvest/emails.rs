//! Email address extraction and normalization
//!
//! Extraction is purely lexical: the pattern matches a local part of
//! letters, digits and `._%+-`, an `@`, a domain of letters, digits and
//! `.-`, and a TLD of at least two letters. Addresses embedded anywhere in
//! the page text match, including scripts and comments.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

/// Returns every non-overlapping email match in the text, in order
///
/// Zero matches yields an empty vector, never an error. No DNS or mailbox
/// validation is performed.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lowercases addresses and drops duplicates, preserving first-seen order
pub fn dedupe_addresses<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut addresses = Vec::new();

    for address in raw {
        let address = address.to_lowercase();
        if seen.insert(address.clone()) {
            addresses.push(address);
        }
    }

    addresses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_email() {
        let emails = extract_emails("Contact us at info@firm.example.com for details");
        assert_eq!(emails, vec!["info@firm.example.com".to_string()]);
    }

    #[test]
    fn test_extract_multiple_emails_in_order() {
        let text = "sales@firm.pl first, then biuro@other-firm.com.pl";
        let emails = extract_emails(text);
        assert_eq!(
            emails,
            vec![
                "sales@firm.pl".to_string(),
                "biuro@other-firm.com.pl".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_from_html_blob() {
        let html = r#"<html><body><script>var e = "hidden@firm.pl";</script>
            <p>Email: <a href="mailto:info@firm.pl">info@firm.pl</a></p></body></html>"#;
        let emails = extract_emails(html);
        // Lexical scan: the script constant and both mailto occurrences match
        assert_eq!(
            emails,
            vec![
                "hidden@firm.pl".to_string(),
                "info@firm.pl".to_string(),
                "info@firm.pl".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(extract_emails("no addresses here").is_empty());
        assert!(extract_emails("").is_empty());
    }

    #[test]
    fn test_rejects_short_tld() {
        assert!(extract_emails("broken@firm.x").is_empty());
    }

    #[test]
    fn test_local_part_special_characters() {
        let emails = extract_emails("jan.kowalski+biz_99%x@sub-domain.firm.pl");
        assert_eq!(
            emails,
            vec!["jan.kowalski+biz_99%x@sub-domain.firm.pl".to_string()]
        );
    }

    #[test]
    fn test_dedupe_lowercases_and_dedupes() {
        let raw = vec![
            "A@B.com".to_string(),
            "a@b.com".to_string(),
            "C@D.org".to_string(),
        ];
        assert_eq!(
            dedupe_addresses(raw),
            vec!["a@b.com".to_string(), "c@d.org".to_string()]
        );
    }

    #[test]
    fn test_dedupe_preserves_first_seen_order() {
        let raw = vec![
            "z@z.com".to_string(),
            "a@a.com".to_string(),
            "Z@Z.com".to_string(),
        ];
        assert_eq!(
            dedupe_addresses(raw),
            vec!["z@z.com".to_string(), "a@a.com".to_string()]
        );
    }

    #[test]
    fn test_dedupe_empty_input() {
        assert!(dedupe_addresses(Vec::new()).is_empty());
    }
}
