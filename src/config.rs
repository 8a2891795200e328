use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Opaque Keepa credential, passed through unchanged. None until the
    /// user exports KEEPA_API_KEY.
    pub keepa_api_key: Option<String>,
    pub keepa_base_url: String,
    /// Keepa marketplace domain id; 1 is amazon.com.
    pub keepa_domain: u8,
    pub walmart_base_url: String,
    pub user_agent: String,
    /// Upper bound on the competitor lookup so a slow search page cannot
    /// block the whole flow.
    pub competitor_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            keepa_api_key: env::var("KEEPA_API_KEY").ok().filter(|k| !k.is_empty()),
            keepa_base_url: "https://api.keepa.com".to_string(),
            keepa_domain: 1,
            walmart_base_url: "https://www.walmart.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            competitor_timeout_secs: 10,
        })
    }
}
