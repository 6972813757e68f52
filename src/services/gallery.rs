use crate::domain::{DownloadOutcome, GameCatalog};
use crate::error::{GalleryError, Result};
use crate::infrastructure::{extract_catalog, extract_links, PageRenderer};
use crate::services::download::DownloadService;
use crate::services::progress::{Progress, ProgressTracker};
use crate::services::resolve::ImageResolver;
use reqwest::Client;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{info, warn};

const STEAM_BASE_URL: &str = "https://steamcommunity.com/id/";

/// Sequences the scrape pipeline: render -> extract -> resolve -> download.
/// One operation at a time; a second caller gets `GalleryError::Busy` instead
/// of a stampede on the browser or the output files.
pub struct GalleryService {
    renderer: PageRenderer,
    resolver: ImageResolver,
    downloads: DownloadService,
    progress: ProgressTracker,
    busy: AtomicBool,
}

impl GalleryService {
    pub fn new(http_client: Client, scroll_pause: Duration, progress: ProgressTracker) -> Self {
        Self {
            renderer: PageRenderer::new(scroll_pause),
            resolver: ImageResolver::new(http_client.clone()),
            downloads: DownloadService::new(http_client),
            progress,
            busy: AtomicBool::new(false),
        }
    }

    /// Renders the profile's screenshot index and extracts its game catalog.
    /// An empty catalog is not an error: the profile may be private or have
    /// no screenshots.
    pub async fn fetch_catalog(&self, steam_id: &str) -> Result<GameCatalog> {
        let steam_id = validated(steam_id, "steam id")?;
        let _guard = self.acquire()?;

        self.progress.update(Progress::Connecting);
        let url = screenshots_url(steam_id);
        self.progress.update(Progress::LoadingPage);
        let html = self.renderer.render(&url).await?;
        self.progress.update(Progress::PageLoaded);

        let catalog = extract_catalog(&html);
        if catalog.is_empty() {
            warn!("No games found for '{}'; the profile may be private", steam_id);
        } else {
            info!("Found {} games for '{}'", catalog.len(), steam_id);
        }
        Ok(catalog)
    }

    /// Renders the appid-filtered index, resolves every screenshot page to
    /// its image URL in page order, and downloads the resolved set.
    pub async fn download_game(
        &self,
        steam_id: &str,
        game_label: &str,
        app_id: &str,
        directory: &Path,
    ) -> Result<DownloadOutcome> {
        let steam_id = validated(steam_id, "steam id")?;
        let game_label = validated(game_label, "game")?;
        let app_id = validated(app_id, "app id")?;
        if directory.as_os_str().is_empty() {
            return Err(GalleryError::InvalidInput("missing save directory".to_string()));
        }
        let _guard = self.acquire()?;

        self.progress.update(Progress::Connecting);
        let url = filtered_screenshots_url(steam_id, app_id);
        self.progress.update(Progress::LoadingPage);
        let html = self.renderer.render(&url).await?;
        self.progress.update(Progress::PageLoaded);

        let links = extract_links(&html);
        if links.is_empty() {
            warn!("No screenshots found for appid {}", app_id);
            return Ok(DownloadOutcome::empty());
        }
        info!("Found {} screenshot pages", links.len());

        let mut image_urls = Vec::new();
        for (idx, link) in links.iter().enumerate() {
            self.progress.update(Progress::ResolvingImages {
                done: idx,
                total: links.len(),
            });
            if let Some(image_url) = self.resolver.resolve_image(link).await {
                image_urls.push(image_url);
            }
        }

        let written = self
            .downloads
            .download(&image_urls, directory, steam_id, game_label, &self.progress)
            .await?;

        self.progress.update(Progress::Finished {
            written,
            total: links.len(),
        });

        Ok(DownloadOutcome {
            pages: links.len(),
            resolved: image_urls.len(),
            written,
        })
    }

    fn acquire(&self) -> Result<BusyGuard<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(GalleryError::Busy);
        }
        Ok(BusyGuard(&self.busy))
    }
}

/// Clears the busy flag on drop so errors cannot leave the service wedged.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

fn validated<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GalleryError::InvalidInput(format!("missing {}", field)));
    }
    Ok(value)
}

fn screenshots_url(steam_id: &str) -> String {
    format!("{}{}/screenshots/", STEAM_BASE_URL, steam_id)
}

fn filtered_screenshots_url(steam_id: &str, app_id: &str) -> String {
    format!("{}?appid={}", screenshots_url(steam_id), app_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::progress::progress_channel;

    fn service() -> GalleryService {
        let (tracker, _rx) = progress_channel();
        GalleryService::new(Client::new(), Duration::from_secs(4), tracker)
    }

    #[test]
    fn urls_follow_the_community_layout() {
        assert_eq!(
            screenshots_url("gordon"),
            "https://steamcommunity.com/id/gordon/screenshots/"
        );
        assert_eq!(
            filtered_screenshots_url("gordon", "220"),
            "https://steamcommunity.com/id/gordon/screenshots/?appid=220"
        );
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(validated("  ", "steam id").is_err());
        assert_eq!(validated(" gordon ", "steam id").unwrap(), "gordon");
    }

    #[test]
    fn second_operation_is_rejected_while_the_first_runs() {
        let service = service();

        let guard = service.acquire().unwrap();
        assert!(matches!(service.acquire(), Err(GalleryError::Busy)));

        drop(guard);
        assert!(service.acquire().is_ok());
    }

    #[tokio::test]
    async fn validation_happens_before_any_network_activity() {
        let service = service();

        let err = service.fetch_catalog("").await.unwrap_err();
        assert!(matches!(err, GalleryError::InvalidInput(_)));

        let err = service
            .download_game("gordon", "", "220", Path::new("out"))
            .await
            .unwrap_err();
        assert!(matches!(err, GalleryError::InvalidInput(_)));
    }
}
