//! Suggestion lists offered next to the free-text inputs. Advisory only:
//! the form accepts any text.

pub const COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "beige", "navy", "purple", "pink",
    "olive green", "gray", "brown", "cream", "khaki", "silver", "burgundy", "camel", "denim",
    "tan", "light blue", "dark wash",
];

pub const CATEGORIES: &[&str] = &[
    "t-shirt", "sneakers", "pants", "polo shirt", "jeans", "shirt", "blouse", "hoodie", "sweater",
    "pullover", "top", "jacket", "blazer", "trousers", "shorts", "skirt", "leggings", "culottes",
    "shoes", "boots", "sandals", "loafers", "heels", "flats", "dress",
];

pub const STYLES: &[&str] = &[
    "elegant", "sportive", "casual", "smart", "street", "business casual", "professional",
    "date night", "edgy casual", "smart casual", "business formal", "sophisticated casual",
    "feminine casual", "relaxed casual", "cozy smart casual", "chic Parisian", "urban chic",
    "street style",
];

/// Entries containing `input` (case-insensitive), in vocabulary order.
pub fn suggest(vocabulary: &'static [&'static str], input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return vocabulary.to_vec();
    }
    vocabulary.iter().copied().filter(|v| v.to_lowercase().contains(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vocabulary_sizes() {
        assert_eq!(COLORS.len(), 22);
        assert_eq!(CATEGORIES.len(), 25);
        assert_eq!(STYLES.len(), 18);
    }

    #[test]
    fn suggest_filters_in_order() {
        assert_eq!(suggest(COLORS, "blue"), vec!["blue", "light blue"]);
        assert_eq!(suggest(STYLES, "PARIS"), vec!["chic Parisian"]);
        assert_eq!(suggest(CATEGORIES, "  ").len(), CATEGORIES.len());
        assert!(suggest(COLORS, "plaid").is_empty());
    }
}
