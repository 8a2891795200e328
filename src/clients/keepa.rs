use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::LookupError;
use crate::models::{Asin, ProductHistory};

/// Index of the NEW price history inside Keepa's csv array.
const CSV_NEW_INDEX: usize = 1;

/// Client for the Keepa product endpoint. The API key is an opaque
/// credential passed through unchanged; every transport, decode, or
/// empty-response failure collapses into `LookupError::Upstream`.
pub struct KeepaClient {
    config: Arc<Config>,
}

#[derive(Debug, Deserialize)]
struct KeepaResponse {
    #[serde(default)]
    products: Vec<KeepaProduct>,
}

#[derive(Debug, Deserialize)]
struct KeepaProduct {
    title: Option<String>,
    csv: Option<Vec<Option<Vec<i64>>>>,
}

impl KeepaClient {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub async fn fetch(
        &self,
        client: &Client,
        api_key: &str,
        asin: &Asin,
    ) -> Result<ProductHistory, LookupError> {
        let url = format!(
            "{}/product?key={}&domain={}&asin={}",
            self.config.keepa_base_url, api_key, self.config.keepa_domain, asin
        );

        info!("Fetching Keepa price history for {}", asin);

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Upstream(format!(
                "Keepa returned HTTP {}",
                response.status()
            )));
        }

        let body: KeepaResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?;

        let product = body
            .products
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::Upstream("Keepa returned no products".to_string()))?;

        Ok(ProductHistory {
            asin: asin.clone(),
            title: product.title.unwrap_or_else(|| "Unknown Product".to_string()),
            raw_series: new_price_series(product.csv.as_deref().unwrap_or_default()),
        })
    }
}

/// Convert Keepa's interleaved [timestamp, price, timestamp, price, ...]
/// NEW series into the plain cents-or-null series the core consumes.
/// Keepa marks "no data" with -1; that becomes None here so the wire
/// convention never leaks past this boundary.
fn new_price_series(csv: &[Option<Vec<i64>>]) -> Vec<Option<i64>> {
    let series = match csv.get(CSV_NEW_INDEX) {
        Some(Some(series)) => series,
        _ => return Vec::new(),
    };

    series
        .chunks(2)
        .filter_map(|pair| pair.get(1))
        .map(|&price| if price < 0 { None } else { Some(price) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_series_drops_timestamps_and_maps_missing() {
        let csv = vec![
            Some(vec![100, 500]),                                // AMAZON, ignored
            Some(vec![100, 1050, 200, -1, 300, 990, 400, 1200]), // NEW
        ];
        assert_eq!(
            new_price_series(&csv),
            vec![Some(1050), None, Some(990), Some(1200)]
        );
    }

    #[test]
    fn missing_new_series_is_empty() {
        assert!(new_price_series(&[]).is_empty());
        assert!(new_price_series(&[Some(vec![1, 2]), None]).is_empty());
    }
}
