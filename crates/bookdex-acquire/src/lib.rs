//! Acquisition stage: crawl the paginated catalog, collect product URLs in
//! first-seen order, scrape each product's raw fields, and persist them
//! untransformed as `;`-delimited lines.
//!
//! Values are captured exactly as the page shows them — the normalizer
//! owns every transformation.

use std::time::Duration;

use anyhow::{Context, Result};

pub mod catalog;
pub mod detail;
pub mod output;
pub mod scrape;

/// Polite delay between catalog page fetches.
pub(crate) const LIST_PAGE_DELAY: Duration = Duration::from_millis(800);
/// Polite delay between product page fetches.
pub(crate) const PRODUCT_PAGE_DELAY: Duration = Duration::from_millis(600);

const USER_AGENT: &str = "bookdex/0.1 (polite catalog scraper)";
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Build the shared HTTP client used across the crawl.
pub fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch a page's body, logging and returning `None` on any failure so
/// the caller can skip or stop without aborting the run.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Option<String> {
    match try_fetch(client, url).await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::error!(url = %url, error = %e, "Fetch failed");
            None
        }
    }
}

async fn try_fetch(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch page")?;

    let status = response.status();
    anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

    response.text().await.context("Failed to read response body")
}
