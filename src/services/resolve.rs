use crate::infrastructure::extract_image_url;
use reqwest::Client;
use tracing::warn;

/// Resolves a screenshot detail page to its direct image URL with a plain
/// HTTP GET. Detail pages render server side, so no browser round trip is
/// needed here.
pub struct ImageResolver {
    client: Client,
}

impl ImageResolver {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Soft-fails to `None` on any transport error, non-2xx status or missing
    /// image element. Unresolvable pages are dropped, never retried.
    pub async fn resolve_image(&self, page_url: &str) -> Option<String> {
        let response = match self.client.get(page_url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch {}: {}", page_url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Skipping {}: status {}", page_url, response.status());
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read {}: {}", page_url, e);
                return None;
            }
        };

        let image = extract_image_url(&body);
        if image.is_none() {
            warn!("No image element on {}", page_url);
        }
        image
    }
}
