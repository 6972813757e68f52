use crate::config::{Command, Config};
use crate::error::{GalleryError, Result};
use crate::services::{progress_channel, GalleryService};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let result = match Config::new() {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    // Every failure surfaces as a single human-readable message.
    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let (tracker, mut progress) = progress_channel();
    let service = Arc::new(GalleryService::new(
        config.http_client.clone(),
        config.scroll_pause(),
        tracker,
    ));

    // Operations run on a worker task; the foreground only prints the latest
    // checkpoint from the single-slot progress channel.
    let reporter = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let update = progress.borrow().clone();
            info!("{}", update);
        }
    });

    let outcome = match config.args.command {
        Command::Games { ref steam_id, json } => list_games(&service, steam_id, json).await,
        Command::Download {
            ref steam_id,
            ref game,
            ref appid,
            ref output,
        } => download(&service, steam_id, game, appid.as_deref(), output).await,
    };

    reporter.abort();
    outcome
}

async fn list_games(service: &Arc<GalleryService>, steam_id: &str, json: bool) -> Result<()> {
    let worker = {
        let service = service.clone();
        let steam_id = steam_id.to_string();
        tokio::spawn(async move { service.fetch_catalog(&steam_id).await })
    };
    let catalog = worker.await.map_err(|e| GalleryError::Other(e.to_string()))??;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        warn!("No games found or the profile is private");
        return Ok(());
    }

    for title in catalog.sorted_titles() {
        println!("{:>10}  {}", catalog.appid_for(title).unwrap_or(""), title);
    }
    Ok(())
}

async fn download(
    service: &Arc<GalleryService>,
    steam_id: &str,
    game: &str,
    appid: Option<&str>,
    output: &Path,
) -> Result<()> {
    let app_id = match appid {
        Some(id) => id.to_string(),
        None => {
            info!("Looking up '{}' in the profile's catalog", game);
            let catalog = {
                let service = service.clone();
                let steam_id = steam_id.to_string();
                tokio::spawn(async move { service.fetch_catalog(&steam_id).await })
                    .await
                    .map_err(|e| GalleryError::Other(e.to_string()))??
            };
            catalog
                .appid_for(game)
                .map(str::to_string)
                .ok_or_else(|| {
                    GalleryError::InvalidInput(format!(
                        "game '{}' not found in the profile's screenshot catalog",
                        game
                    ))
                })?
        }
    };

    let worker = {
        let service = service.clone();
        let (steam_id, game, output) =
            (steam_id.to_string(), game.to_string(), output.to_path_buf());
        tokio::spawn(async move { service.download_game(&steam_id, &game, &app_id, &output).await })
    };
    let outcome = worker.await.map_err(|e| GalleryError::Other(e.to_string()))??;

    if outcome.pages == 0 {
        warn!("No screenshots found");
    } else if outcome.resolved == 0 {
        warn!("No images found on the screenshot pages");
    } else if outcome.is_complete() {
        info!(
            "Downloaded {} images to {}",
            outcome.written,
            output.display()
        );
    } else {
        warn!(
            "Downloaded {} of {} screenshots to {}",
            outcome.written,
            outcome.pages,
            output.display()
        );
    }
    Ok(())
}
