use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Asin;

// Tried in order: the path-segment patterns first, the bare-token
// fallback last, so a /dp/ link never falls through to an unrelated
// 10-character token elsewhere in the URL.
static ASIN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"/dp/(\w{10})",
        r"/gp/product/(\w{10})",
        r"/ASIN/(\w{10})",
        r"amazon\.com.*?/(\w{10})(?:/|\?|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid ASIN regex"))
    .collect()
});

/// Extract the 10-character ASIN from an Amazon product URL.
pub fn extract_identifier(url: &str) -> Option<Asin> {
    for pattern in ASIN_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(url) {
            if let Some(token) = captures.get(1) {
                return Some(Asin(token.as_str().to_string()));
            }
        }
    }

    None
}
