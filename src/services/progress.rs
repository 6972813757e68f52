use std::fmt;
use tokio::sync::watch;

/// Coarse checkpoints of a running operation. Published through a single-slot
/// watch channel: readers only ever see the latest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Idle,
    Connecting,
    LoadingPage,
    PageLoaded,
    ResolvingImages { done: usize, total: usize },
    Downloading { done: usize, total: usize },
    Finished { written: usize, total: usize },
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Idle => write!(f, "Idle"),
            Progress::Connecting => write!(f, "Connecting..."),
            Progress::LoadingPage => write!(f, "Loading page..."),
            Progress::PageLoaded => write!(f, "Page loaded"),
            Progress::ResolvingImages { done, total } => {
                write!(f, "Resolving images: {}/{}", done, total)
            }
            Progress::Downloading { done, total } => {
                write!(f, "Downloaded {}/{}", done, total)
            }
            Progress::Finished { written, total } => {
                write!(f, "Finished: {} of {} screenshots", written, total)
            }
        }
    }
}

pub struct ProgressTracker {
    sender: watch::Sender<Progress>,
}

impl ProgressTracker {
    pub fn update(&self, progress: Progress) {
        // Nobody listening is fine; last value wins for whoever does.
        let _ = self.sender.send(progress);
    }
}

pub fn progress_channel() -> (ProgressTracker, watch::Receiver<Progress>) {
    let (sender, receiver) = watch::channel(Progress::Idle);
    (ProgressTracker { sender }, receiver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_checkpoint() {
        assert_eq!(Progress::Idle.to_string(), "Idle");
        assert_eq!(Progress::Connecting.to_string(), "Connecting...");
        assert_eq!(Progress::LoadingPage.to_string(), "Loading page...");
        assert_eq!(Progress::PageLoaded.to_string(), "Page loaded");
        assert_eq!(
            Progress::ResolvingImages { done: 1, total: 3 }.to_string(),
            "Resolving images: 1/3"
        );
        assert_eq!(
            Progress::Downloading { done: 2, total: 3 }.to_string(),
            "Downloaded 2/3"
        );
        assert_eq!(
            Progress::Finished {
                written: 2,
                total: 3
            }
            .to_string(),
            "Finished: 2 of 3 screenshots"
        );
    }

    #[test]
    fn receiver_sees_only_the_latest_value() {
        let (tracker, receiver) = progress_channel();
        tracker.update(Progress::Connecting);
        tracker.update(Progress::PageLoaded);

        assert_eq!(*receiver.borrow(), Progress::PageLoaded);
    }
}
