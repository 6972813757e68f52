use crate::error::{GalleryError, Result};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tracing::{debug, info};

/// Renders pages in a headless browser, defeating infinite scroll by
/// scrolling to the bottom until the page stops growing. Steam's screenshot
/// index has no API, so exhaustive scrolling is the only way to materialize
/// the full DOM.
pub struct PageRenderer {
    scroll_pause: Duration,
}

impl PageRenderer {
    pub fn new(scroll_pause: Duration) -> Self {
        Self { scroll_pause }
    }

    /// Returns the fully materialized markup of `url`. Spawns a browser
    /// process per call and tears it down on every exit path.
    pub async fn render(&self, url: &str) -> Result<String> {
        let config = BrowserConfig::builder()
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .build()
            .map_err(GalleryError::Other)?;

        let (mut browser, mut handler) = Browser::launch(config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = self.render_page(&browser, url).await;

        // The browser process must not outlive this call, success or not.
        if let Err(e) = browser.close().await {
            debug!("Browser close failed: {}", e);
        }
        let _ = browser.wait().await;
        handler_task.abort();

        result
    }

    async fn render_page(&self, browser: &Browser, url: &str) -> Result<String> {
        info!("Rendering {}", url);
        let page = browser.new_page(url).await?;
        page.wait_for_navigation().await?;

        let mut last_height = self.page_height(&page).await?;
        loop {
            self.scroll_to_bottom(&page).await?;
            tokio::time::sleep(self.scroll_pause).await;

            let new_height = self.page_height(&page).await?;
            debug!("Scrolled: height {} -> {}", last_height, new_height);
            if new_height == last_height {
                break;
            }
            last_height = new_height;
        }

        let html = page.content().await?;
        let _ = page.close().await;
        Ok(html)
    }

    async fn page_height(&self, page: &Page) -> Result<u64> {
        let height = page
            .evaluate("document.body.scrollHeight")
            .await?
            .into_value::<u64>()?;
        Ok(height)
    }

    async fn scroll_to_bottom(&self, page: &Page) -> Result<()> {
        page.evaluate("window.scrollTo(0, document.body.scrollHeight)")
            .await?;
        Ok(())
    }
}
