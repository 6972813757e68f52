use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static MEDIA_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("a.profile_media_item").unwrap());

/// Collects the detail-page URL of every screenshot on a rendered index
/// page, preserving document order. Anchors without an href are dropped.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&MEDIA_ITEM)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect()
}
