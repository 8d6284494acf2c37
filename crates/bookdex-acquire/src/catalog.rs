use std::collections::HashSet;

use anyhow::{Context, Result};
use reqwest::Url;
use scraper::{Html, Selector};

use crate::{fetch, LIST_PAGE_DELAY};

/// First catalog page, relative to the base URL.
pub const START_PAGE: &str = "catalogue/page-1.html";

/// Walk the full catalog pagination and return product page URLs,
/// deduplicated while preserving first-seen order.
///
/// Follows the "next" link until absent. A catalog page that fails to
/// fetch stops the walk with an error log; URLs collected so far are
/// kept. A polite delay separates page fetches.
pub async fn collect_product_urls(client: &reqwest::Client, base_url: &str) -> Result<Vec<String>> {
    let base = Url::parse(base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;
    let mut current = Some(base.join(START_PAGE).context("Invalid start page path")?);

    let mut urls: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    while let Some(page_url) = current {
        tracing::info!(url = %page_url, "Catalog page");
        let Some(html) = fetch(client, page_url.as_str()).await else {
            tracing::error!(url = %page_url, "Stopping pagination walk on fetch error");
            break;
        };

        let links = product_links(&html, &page_url);
        tracing::info!(found = links.len(), "Found product links");
        for link in links {
            if seen.insert(link.clone()) {
                urls.push(link);
            }
        }

        tokio::time::sleep(LIST_PAGE_DELAY).await;
        current = next_page_url(&html, &page_url);
    }

    tracing::info!(total = urls.len(), "Collected unique product URLs");
    Ok(urls)
}

/// Extract absolute product URLs from one catalog page.
///
/// Relative hrefs are resolved against the page's own URL, since the
/// catalog links climb directories (`../../..`).
pub fn product_links(html: &str, page_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("article.product_pod h3 a").expect("valid selector");

    let mut links = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        match page_url.join(href) {
            Ok(url) => links.push(url.to_string()),
            Err(e) => {
                tracing::warn!(href = %href, error = %e, "Skipping unjoinable product link");
            }
        }
    }
    links
}

/// Resolve the "next page" link, if the page has one.
pub fn next_page_url(html: &str, page_url: &Url) -> Option<Url> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("li.next a").expect("valid selector");
    let href = document.select(&selector).next()?.value().attr("href")?;
    page_url.join(href).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_PAGE: &str = r#"
    <html><body>
    <section>
        <article class="product_pod">
            <h3><a href="../../a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light in ...</a></h3>
        </article>
        <article class="product_pod">
            <h3><a href="../../tipping-the-velvet_999/index.html" title="Tipping the Velvet">Tipping the Velvet</a></h3>
        </article>
    </section>
    <ul class="pager">
        <li class="next"><a href="page-2.html">next</a></li>
    </ul>
    </body></html>
    "#;

    fn page_url() -> Url {
        Url::parse("http://books.toscrape.com/catalogue/category/books_1/page-1.html").unwrap()
    }

    #[test]
    fn test_product_links_absolutized() {
        let links = product_links(LIST_PAGE, &page_url());
        assert_eq!(
            links,
            vec![
                "http://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html",
                "http://books.toscrape.com/catalogue/tipping-the-velvet_999/index.html",
            ]
        );
    }

    #[test]
    fn test_next_page_resolved() {
        let next = next_page_url(LIST_PAGE, &page_url()).unwrap();
        assert_eq!(
            next.as_str(),
            "http://books.toscrape.com/catalogue/category/books_1/page-2.html"
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let html = r#"<html><body><ul class="pager"></ul></body></html>"#;
        assert!(next_page_url(html, &page_url()).is_none());
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"
        <article class="product_pod"><h3><a>nameless</a></h3></article>
        "#;
        assert!(product_links(html, &page_url()).is_empty());
    }
}
