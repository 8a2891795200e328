pub mod identifier;
pub mod price;

pub use identifier::*;
pub use price::*;

use html_escape::decode_html_entities;

/// Clean and normalize text by removing extra whitespace and decoding HTML entities
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::clean_text;

    #[test]
    fn collapses_whitespace_and_decodes_entities() {
        assert_eq!(clean_text("  $12.99\n  &amp; up  "), "$12.99 & up");
    }
}
