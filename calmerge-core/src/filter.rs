//! Keyword based exclusion of events.

/// Ordered, case-insensitive set of exclusion keywords.
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    // (original, lowercased)
    keywords: Vec<(String, String)>,
}

impl KeywordFilter {
    /// Build a filter from configured keywords.
    ///
    /// Empty (or whitespace-only) keywords are dropped, otherwise they would
    /// match every title.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k| !k.trim().is_empty())
            .map(|k| {
                let lower = k.to_lowercase();
                (k, lower)
            })
            .collect();

        KeywordFilter { keywords }
    }

    /// Returns the first configured keyword contained in `title`, if any.
    pub fn matching_keyword(&self, title: &str) -> Option<&str> {
        let title = title.to_lowercase();
        self.keywords
            .iter()
            .find(|(_, lower)| title.contains(lower.as_str()))
            .map(|(original, _)| original.as_str())
    }

    pub fn keeps(&self, title: &str) -> bool {
        self.matching_keyword(title).is_none()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|(original, _)| original.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uni_filter() -> KeywordFilter {
        KeywordFilter::new([
            "grundlagen data science",
            "englisch",
            "physikalische chemie",
            "Elektrotechnik",
        ])
    }

    #[test]
    fn test_drops_case_insensitive_substring() {
        let filter = uni_filter();
        assert_eq!(
            filter.matching_keyword("Physikalische Chemie Lab"),
            Some("physikalische chemie")
        );
        assert_eq!(
            filter.matching_keyword("Grundlagen ELEKTROTECHNIK 2"),
            Some("Elektrotechnik")
        );
        assert!(!filter.keeps("Englisch B2"));
    }

    #[test]
    fn test_keeps_unrelated_titles() {
        let filter = uni_filter();
        assert!(filter.keeps("Networks"));
        assert!(filter.keeps("Data Science Project"));
    }

    #[test]
    fn test_first_keyword_in_order_wins() {
        let filter = KeywordFilter::new(["chemie", "physikalische"]);
        assert_eq!(filter.matching_keyword("Physikalische Chemie"), Some("chemie"));
    }

    #[test]
    fn test_empty_title_is_kept() {
        assert!(uni_filter().keeps(""));
    }

    #[test]
    fn test_empty_keywords_are_ignored() {
        let filter = KeywordFilter::new(["", "   ", "englisch"]);
        assert_eq!(filter.len(), 1);
        assert!(filter.keeps(""));
        assert!(filter.keeps("Networks"));
        assert!(!filter.keeps("Englisch"));
    }

    #[test]
    fn test_no_keywords_keeps_everything() {
        let filter = KeywordFilter::default();
        assert!(filter.is_empty());
        assert!(filter.keeps("Anything at all"));
    }
}
