use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_PRICE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+\.\d+)").expect("Invalid price regex")
});

/// Pull the first decimal price out of scraped price text.
///
/// Competitor markup is not guaranteed numeric ("$12.99", "Now $12.99 was
/// $19.99", "From 12.99"); the first `\d+.\d+` run wins. Returns `None`
/// when the text carries no decimal at all.
pub fn extract_decimal(price_text: &str) -> Option<f64> {
    DECIMAL_PRICE_REGEX
        .captures(price_text)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
