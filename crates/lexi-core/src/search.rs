use crate::entry::Entry;

/// How much longer than the typed term a substring match may be.
///
/// A coarse tuning constant, not a relevance score. A ranking pass would be
/// the proper replacement.
pub const LENGTH_SLACK: usize = 3;

/// The user's search input. Empty means no filter; wrapped in double quotes
/// means exact-word match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    slack: usize,
}

impl Default for SearchTerm {
    fn default() -> Self {
        Self::new("")
    }
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            slack: LENGTH_SLACK,
        }
    }

    pub fn with_slack(mut self, slack: usize) -> Self {
        self.slack = slack;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// A lone `"` counts too: it both starts and ends with a quote
    pub fn is_exact(&self) -> bool {
        self.raw.starts_with('"') && self.raw.ends_with('"')
    }

    /// The term with every double quote removed
    pub fn search_word(&self) -> String {
        self.raw.replace('"', "")
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if self.raw.is_empty() {
            return true;
        }

        let search_word = self.search_word();
        if self.is_exact() {
            return entry.word == search_word;
        }

        // The bound uses the raw term length, quotes included
        let length_close = entry.word.chars().count() <= self.raw.chars().count() + self.slack;
        length_close && entry.word.contains(search_word.as_str())
    }
}

pub fn matches(entry: &Entry, term: &SearchTerm) -> bool {
    term.matches(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> Entry {
        Entry::parse(word, "1. something")
    }

    #[test]
    fn empty_term_matches_everything() {
        let term = SearchTerm::default();
        assert!(matches(&entry("anything"), &term));
        assert!(matches(&entry("extraordinarily"), &term));
    }

    #[test]
    fn quoted_term_matches_exact_word_only() {
        let term = SearchTerm::new("\"cat\"");
        assert!(term.is_exact());
        assert!(matches(&entry("cat"), &term));
        assert!(!matches(&entry("cats"), &term));
        assert!(!matches(&entry("bobcat"), &term));
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let term = SearchTerm::new("\"cat\"");
        assert!(!matches(&entry("Cat"), &term));
    }

    #[test]
    fn substring_respects_length_heuristic() {
        let term = SearchTerm::new("cat");
        assert!(matches(&entry("cats"), &term));
        assert!(matches(&entry("bobcat"), &term));
        assert!(!matches(&entry("concatenate"), &term));
        assert!(!matches(&entry("dog"), &term));
    }

    #[test]
    fn lone_quote_is_exact_mode_for_empty_word() {
        let term = SearchTerm::new("\"");
        assert!(term.is_exact());
        assert_eq!(term.search_word(), "");
        assert!(!matches(&entry("a"), &term));
        assert!(matches(&entry(""), &term));
    }

    #[test]
    fn half_quoted_term_uses_substring_mode() {
        // Quotes count toward the length bound but not the substring
        let term = SearchTerm::new("\"cat");
        assert!(!term.is_exact());
        assert!(matches(&entry("cattle"), &term));
        assert!(!matches(&entry("catalogs"), &term));
    }

    #[test]
    fn slack_is_adjustable() {
        assert!(!matches(&entry("cats"), &SearchTerm::new("cat").with_slack(0)));
        assert!(matches(&entry("concatenate"), &SearchTerm::new("cat").with_slack(8)));
    }
}
