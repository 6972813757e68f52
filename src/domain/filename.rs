/// Labels longer than this (after sanitization) collapse to their initials.
const MAX_LABEL_LEN: usize = 10;

/// File name for the `index`-th screenshot of a game. `index` is 1-based.
/// Derivation must stay stable across runs: re-downloading overwrites the
/// same paths instead of duplicating files.
pub fn screenshot_file_name(steam_id: &str, game_label: &str, index: usize) -> String {
    format!(
        "screenshot_{}_{}_{}.jpg",
        steam_id,
        short_label(game_label),
        index
    )
}

fn short_label(label: &str) -> String {
    let sanitized: String = label
        .chars()
        .map(|c| match c {
            ',' | ':' | '\'' | '"' | ' ' => '_',
            c => c,
        })
        .collect();

    if sanitized.chars().count() <= MAX_LABEL_LEN {
        return sanitized;
    }

    // Too long: initials of the original label, whitespace-separated words only.
    label
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_are_sanitized_verbatim() {
        assert_eq!(short_label("Portal 2"), "Portal_2");
        assert_eq!(short_label("Don't Nod"), "Don_t_Nod");
    }

    #[test]
    fn ten_characters_is_still_verbatim() {
        assert_eq!(short_label("Black Mesa"), "Black_Mesa");
    }

    #[test]
    fn long_labels_collapse_to_initials_of_the_original() {
        // "Half-Life_2" is 11 characters sanitized; the hyphen is not a word
        // boundary, so the initials are H and 2.
        assert_eq!(short_label("Half-Life 2"), "H2");
        assert_eq!(short_label("The Elder Scrolls V: Skyrim"), "TESVS");
    }

    #[test]
    fn initials_are_uppercased() {
        assert_eq!(short_label("the witcher 3 wild hunt"), "TW3WH");
    }

    #[test]
    fn file_names_are_deterministic() {
        let a = screenshot_file_name("gordon", "Portal 2", 1);
        let b = screenshot_file_name("gordon", "Portal 2", 1);
        assert_eq!(a, b);
        assert_eq!(a, "screenshot_gordon_Portal_2_1.jpg");
    }

    #[test]
    fn index_is_one_based_in_the_name() {
        assert_eq!(
            screenshot_file_name("gordon", "Half-Life 2", 3),
            "screenshot_gordon_H2_3.jpg"
        );
    }
}
