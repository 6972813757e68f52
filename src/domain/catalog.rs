use serde::Serialize;
use std::collections::HashMap;

/// Mapping of game title to the numeric app id Steam uses in the
/// screenshot filter. Rebuilt fresh on every catalog fetch; duplicate
/// titles are last-write-wins.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GameCatalog(HashMap<String, String>);

impl GameCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, title: String, appid: String) {
        self.0.insert(title, appid);
    }

    pub fn appid_for(&self, title: &str) -> Option<&str> {
        self.0.get(title).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Titles in alphabetical order, for stable display.
    pub fn sorted_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.0.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_titles_keep_the_last_appid() {
        let mut catalog = GameCatalog::new();
        catalog.insert("Portal 2".to_string(), "620".to_string());
        catalog.insert("Portal 2".to_string(), "999".to_string());

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.appid_for("Portal 2"), Some("999"));
    }

    #[test]
    fn titles_come_back_sorted() {
        let mut catalog = GameCatalog::new();
        catalog.insert("Terraria".to_string(), "105600".to_string());
        catalog.insert("Factorio".to_string(), "427520".to_string());

        assert_eq!(catalog.sorted_titles(), vec!["Factorio", "Terraria"]);
    }
}
