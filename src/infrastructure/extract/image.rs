use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ACTUAL_MEDIA: Lazy<Selector> = Lazy::new(|| Selector::parse("img#ActualMedia").unwrap());

/// Pulls the direct image URL out of a screenshot detail page. Detail pages
/// render server side, so the caller can fetch them without a browser.
pub fn extract_image_url(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&ACTUAL_MEDIA)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_of_the_media_element_is_returned() {
        let html = r#"<html><body>
            <img id="ActualMedia" src="https://images.steamusercontent.com/ugc/123/full.jpg">
            </body></html>"#;

        assert_eq!(
            extract_image_url(html).as_deref(),
            Some("https://images.steamusercontent.com/ugc/123/full.jpg")
        );
    }

    #[test]
    fn missing_media_element_is_none() {
        assert_eq!(extract_image_url("<html><body><img src=\"x.jpg\"></body></html>"), None);
    }

    #[test]
    fn media_element_without_src_is_none() {
        assert_eq!(
            extract_image_url("<html><body><img id=\"ActualMedia\"></body></html>"),
            None
        );
    }
}
