//! Page URL construction.
//!
//! Assembles the absolute URL of a CMS page within one store view from three
//! parts that each arrive in inconsistent shapes:
//!
//! - the store's base URL, which may or may not carry a trailing slash;
//! - the store code, present as a path segment only for stores configured to
//!   put their code in URLs;
//! - the page identifier, which editors sometimes save with a leading slash.
//!
//! The result joins the parts with exactly one slash each, regardless of how
//! the inputs were shaped:
//!
//! - `("https://example.com/", Some("fr"), "/about-us")` → `"https://example.com/fr/about-us"`
//! - `("https://example.com", None, "about-us")` → `"https://example.com/about-us"`

/// Build the absolute URL of a page in one store's scope.
///
/// `store_code` is `Some` only when the store includes its code in URLs.
pub fn page_url(base_url: &str, store_code: Option<&str>, identifier: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let page = identifier.trim_start_matches('/');

    match store_code {
        Some(code) => format!("{base}/{code}/{page}"),
        None => format!("{base}/{page}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_store_code() {
        assert_eq!(
            page_url("https://example.com", Some("fr"), "/about-us"),
            "https://example.com/fr/about-us"
        );
    }

    #[test]
    fn without_store_code() {
        assert_eq!(
            page_url("https://example.com", None, "/about-us"),
            "https://example.com/about-us"
        );
    }

    #[test]
    fn base_trailing_slash_is_trimmed() {
        assert_eq!(
            page_url("https://example.com/", None, "about-us"),
            "https://example.com/about-us"
        );
    }

    #[test]
    fn identifier_without_leading_slash() {
        assert_eq!(
            page_url("https://example.com", Some("en"), "about-us"),
            "https://example.com/en/about-us"
        );
    }

    #[test]
    fn both_sides_padded() {
        assert_eq!(
            page_url("https://shop.example.org/", Some("de"), "/impressum"),
            "https://shop.example.org/de/impressum"
        );
    }

    #[test]
    fn nested_identifier_keeps_inner_slashes() {
        assert_eq!(
            page_url("https://example.com", None, "help/shipping"),
            "https://example.com/help/shipping"
        );
    }
}
