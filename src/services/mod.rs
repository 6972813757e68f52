mod download;
mod gallery;
mod progress;
mod resolve;

pub use gallery::GalleryService;
pub use progress::{progress_channel, Progress, ProgressTracker};
