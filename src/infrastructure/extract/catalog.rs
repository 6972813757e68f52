use crate::domain::GameCatalog;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// The app filter embeds each game's appid in its inline click handler,
/// quoted after this marker.
const APPID_MARKER: &str = "'appid': '";

static FILTER_SECTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#sharedfiles_filterselect_app_filterable").unwrap());
static APP_OPTION: Lazy<Selector> = Lazy::new(|| Selector::parse("div.option.ellipsis").unwrap());

/// Builds the title -> appid catalog from a rendered screenshot-index page.
/// Returns an empty catalog when the filter container is missing (private
/// profile, or no screenshots at all).
pub fn extract_catalog(html: &str) -> GameCatalog {
    let document = Html::parse_document(html);
    let mut catalog = GameCatalog::new();

    let Some(section) = document.select(&FILTER_SECTION).next() else {
        return catalog;
    };

    for option in section.select(&APP_OPTION) {
        let Some(handler) = option.value().attr("onclick") else {
            continue;
        };
        let Some(appid) = appid_from_handler(handler) else {
            continue;
        };
        let title = option.text().collect::<String>().trim().to_string();
        catalog.insert(title, appid.to_string());
    }

    catalog
}

fn appid_from_handler(handler: &str) -> Option<&str> {
    let start = handler.find(APPID_MARKER)? + APPID_MARKER.len();
    let rest = &handler[start..];
    rest.find('\'').map(|end| &rest[..end])
}
