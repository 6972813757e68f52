use crate::domain::screenshot_file_name;
use crate::error::{GalleryError, Result};
use crate::services::progress::{Progress, ProgressTracker};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::warn;

pub struct DownloadService {
    client: Client,
}

impl DownloadService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Downloads every image into `directory`, creating it if absent, and
    /// returns how many files were written. A failed item is skipped with a
    /// warning; its index is simply missing from the output.
    pub async fn download(
        &self,
        image_urls: &[String],
        directory: &Path,
        steam_id: &str,
        game_label: &str,
        progress: &ProgressTracker,
    ) -> Result<usize> {
        tokio::fs::create_dir_all(directory).await?;

        let pb = ProgressBar::new(image_urls.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| GalleryError::Other(e.to_string()))?,
        );

        let mut written = 0;
        for (idx, url) in image_urls.iter().enumerate() {
            let file_name = screenshot_file_name(steam_id, game_label, idx + 1);
            pb.set_message(file_name.clone());

            match self.download_image(url, &directory.join(&file_name)).await {
                Ok(()) => written += 1,
                Err(e) => warn!("Failed to download {}: {}", url, e),
            }

            pb.inc(1);
            progress.update(Progress::Downloading {
                done: written,
                total: image_urls.len(),
            });
        }

        pb.finish_with_message(format!("{} of {} downloaded", written, image_urls.len()));
        Ok(written)
    }

    async fn download_image(&self, url: &str, path: &Path) -> Result<()> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GalleryError::Other(format!(
                "status {}",
                response.status()
            )));
        }

        let mut file = tokio::fs::File::create(path).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::progress::progress_channel;

    #[tokio::test]
    async fn empty_url_list_still_creates_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("shots");
        let (tracker, _rx) = progress_channel();

        let service = DownloadService::new(Client::new());
        let written = service
            .download(&[], &target, "gordon", "Portal 2", &tracker)
            .await
            .unwrap();

        assert_eq!(written, 0);
        assert!(target.is_dir());
    }
}
