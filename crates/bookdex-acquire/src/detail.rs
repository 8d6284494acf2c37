use bookdex_model::RawRecord;
use scraper::{Html, Selector};

/// Extract the four raw fields from a product detail page.
///
/// Values are captured untransformed: the price keeps its currency glyph,
/// the rating stays a word (`One`..`Five`) read from the star element's
/// class list, and availability is the element's full text. A missing
/// field is logged and emitted as the empty string rather than failing
/// the product.
pub fn parse_product_page(html: &str, product_url: &str) -> RawRecord {
    let document = Html::parse_document(html);

    let title = select_text(&document, "div.product_main h1");
    let price = select_text(&document, "div.product_main p.price_color");
    let rating = rating_word(&document);
    let availability = select_text(&document, "div.product_main p.availability");

    if title.is_none() {
        tracing::warn!(url = %product_url, "Missing title");
    }
    if price.is_none() {
        tracing::warn!(url = %product_url, "Missing price");
    }
    if rating.is_none() {
        tracing::warn!(url = %product_url, "Missing rating");
    }
    if availability.is_none() {
        tracing::warn!(url = %product_url, "Missing availability");
    }

    RawRecord {
        title: title.unwrap_or_default(),
        price: price.unwrap_or_default(),
        rating: rating.unwrap_or_default(),
        availability: availability.unwrap_or_default(),
    }
}

/// Collapsed text of the first element matching `css`, or `None` if the
/// element is missing or has no text.
fn select_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).expect("valid selector");
    let element = document.select(&selector).next()?;
    let text = element.text().collect::<Vec<_>>().join(" ");
    let collapsed = collapse_whitespace(&text);
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// The star rating is encoded as a class: `<p class="star-rating Three">`.
fn rating_word(document: &Html) -> Option<String> {
    let selector = Selector::parse("p.star-rating").expect("valid selector");
    let element = document.select(&selector).next()?;
    element
        .value()
        .classes()
        .find(|c| *c != "star-rating")
        .map(str::to_string)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
