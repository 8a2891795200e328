use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::parsers::clean_text;

// Walmart markup changes without notice; these are tried in order and
// the first non-empty match wins.
const PRICE_SELECTORS: [&str; 4] = [
    r#"span[data-automation-id="product-price"]"#,
    "span.price-characteristic",
    "span.price-group",
    "div.product-price-container span.price",
];

/// How many leading words of the product title go into the search query.
/// Full Amazon titles are too specific for Walmart's search.
const QUERY_WORD_LIMIT: usize = 6;

/// Best-effort Walmart price lookup. Every failure mode (transport,
/// timeout, non-200, no selector match) returns None; the caller shows a
/// "not found" notice and the rest of the flow continues.
pub struct WalmartClient {
    config: Arc<Config>,
}

impl WalmartClient {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub async fn search(&self, client: &Client, title: &str) -> Option<String> {
        let query = title
            .split_whitespace()
            .take(QUERY_WORD_LIMIT)
            .collect::<Vec<_>>()
            .join(" ");

        let mut url = match Url::parse(&self.config.walmart_base_url) {
            Ok(url) => url,
            Err(e) => {
                warn!("Invalid Walmart base URL: {}", e);
                return None;
            }
        };
        url.set_path("/search");
        url.query_pairs_mut().append_pair("q", &query);

        info!("Searching Walmart for \"{}\"", query);

        let response = match client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.5")
            .header("Referer", "https://www.walmart.com/")
            .header("DNT", "1")
            .header("Upgrade-Insecure-Requests", "1")
            .timeout(Duration::from_secs(self.config.competitor_timeout_secs))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Walmart request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Walmart returned HTTP {}", response.status());
            return None;
        }

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to read Walmart response body: {}", e);
                return None;
            }
        };

        extract_price_text(&html)
    }
}

fn extract_price_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for selector_str in PRICE_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(selector) => selector,
            Err(_) => continue,
        };

        if let Some(element) = document.select(&selector).next() {
            let text = clean_text(&element.text().collect::<String>());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    None
}
