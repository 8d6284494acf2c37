use bookdex_model::RawRecord;

use crate::{detail, fetch, PRODUCT_PAGE_DELAY};

/// Visit each product URL and collect its raw record, in input order.
///
/// A fetch failure logs an error and skips that product; extraction
/// itself never fails (missing fields come back empty). A polite delay
/// separates page fetches.
pub async fn scrape_products(client: &reqwest::Client, urls: &[String]) -> Vec<RawRecord> {
    let mut records = Vec::new();

    for url in urls {
        tokio::time::sleep(PRODUCT_PAGE_DELAY).await;

        let Some(html) = fetch(client, url).await else {
            tracing::error!(url = %url, "Skipping product on fetch error");
            continue;
        };

        records.push(detail::parse_product_page(&html, url));
    }

    tracing::info!(scraped = records.len(), requested = urls.len(), "Scraped product pages");
    records
}
