mod catalog;
mod filename;

pub use catalog::GameCatalog;
pub use filename::screenshot_file_name;

/// Counts from one download run. Resolution and network failures shrink the
/// later counts, so `written <= resolved <= pages` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// Screenshot detail pages found on the index page.
    pub pages: usize,
    /// Pages that yielded a direct image URL.
    pub resolved: usize,
    /// Files actually written to disk.
    pub written: usize,
}

impl DownloadOutcome {
    pub fn empty() -> Self {
        Self {
            pages: 0,
            resolved: 0,
            written: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.pages > 0 && self.written == self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcome_is_not_complete() {
        assert!(!DownloadOutcome::empty().is_complete());
    }

    #[test]
    fn complete_means_every_page_became_a_file() {
        let full = DownloadOutcome {
            pages: 3,
            resolved: 3,
            written: 3,
        };
        assert!(full.is_complete());

        let partial = DownloadOutcome {
            pages: 3,
            resolved: 2,
            written: 2,
        };
        assert!(!partial.is_complete());
    }
}
