use anyhow::Result;
use chrono::Local;
use reqwest::Client;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{error, info};

use deal_math::clients::{KeepaClient, WalmartClient};
use deal_math::config::Config;
use deal_math::error::LookupError;
use deal_math::models::{HistoryEntry, SearchHistory};
use deal_math::parsers::extract_identifier;
use deal_math::pricing::{estimate_savings, normalize, pick_statement};
use deal_math::report;
use deal_math::utils;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("deal_math=info".parse()?),
        )
        .init();

    info!("Starting Deal Math");

    let config = Arc::new(Config::load()?);
    if config.keepa_api_key.is_none() {
        println!("Note: KEEPA_API_KEY is not set; lookups will fail until you export it.");
    }

    let client = utils::http::create_client(&config.user_agent)?;
    let keepa = KeepaClient::new(config.clone());
    let walmart = WalmartClient::new(config.clone());

    // Session-scoped search history, gone when the process exits.
    let mut history = SearchHistory::new();

    println!("Paste an Amazon product link (one per line, Ctrl-D to quit):");

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }

        info!(
            "--- Starting lookup at {} ---",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        if let Err(e) = run_lookup(url, &config, &client, &keepa, &walmart, &mut history).await {
            error!("Lookup failed: {}", e);
            println!("{}", e);
        }

        report::render_history(&history);
        println!();
        println!("Paste an Amazon product link (one per line, Ctrl-D to quit):");
    }

    Ok(())
}

/// One lookup, strictly sequential: extract the ASIN, fetch the price
/// history, derive the summary and savings, then try the competitor
/// lookup. Only the competitor step is allowed to come up empty without
/// aborting the flow.
async fn run_lookup(
    url: &str,
    config: &Config,
    client: &Client,
    keepa: &KeepaClient,
    walmart: &WalmartClient,
    history: &mut SearchHistory,
) -> Result<(), LookupError> {
    let asin = extract_identifier(url).ok_or(LookupError::InvalidUrl)?;
    info!("Extracted ASIN {} from {}", asin, url);

    let api_key = config
        .keepa_api_key
        .as_deref()
        .ok_or(LookupError::MissingCredential)?;

    let product = keepa.fetch(client, api_key, &asin).await?;
    let summary = normalize(&product.raw_series)?;
    let savings = estimate_savings(summary.current, summary.peak, summary.lowest);
    let statement = pick_statement(
        summary.current,
        summary.peak,
        summary.lowest,
        &mut rand::thread_rng(),
    );

    let competitor_price = walmart.search(client, &product.title).await;
    if competitor_price.is_none() {
        info!("No Walmart price found for \"{}\"", product.title);
    }

    report::render_lookup(
        &product,
        &summary,
        &savings,
        &statement,
        competitor_price.as_deref(),
    );

    history.append_if_absent(HistoryEntry {
        asin,
        title: product.title.clone(),
        current_price: summary.current,
        url: url.to_string(),
    });

    Ok(())
}
