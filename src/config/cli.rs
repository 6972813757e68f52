use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Seconds to wait after each scroll for lazy content to load
    #[arg(long, default_value_t = 4)]
    pub scroll_pause: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the games a profile has uploaded screenshots for
    Games {
        /// Profile id (the name in steamcommunity.com/id/<id>)
        steam_id: String,

        /// Print the catalog as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Download every screenshot a profile uploaded for one game
    Download {
        /// Profile id (the name in steamcommunity.com/id/<id>)
        steam_id: String,

        /// Game title as listed by the `games` command
        #[arg(long)]
        game: String,

        /// Numeric app id; skips rendering the index page to look the title up
        #[arg(long)]
        appid: Option<String>,

        /// Directory the images are written to
        #[arg(long, default_value = "screenshots")]
        output: PathBuf,
    },
}
