//! Header search box with keyboard-driven suggestions.

use serde::{Deserialize, Serialize};

/// Suggestions offered when none are configured.
pub const DEFAULT_SUGGESTIONS: [&str; 5] = ["Home", "Shop", "Wallets", "Offers", "About Us"];

/// Keys the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKey {
    Down,
    Up,
    Enter,
}

impl SuggestionKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "down" | "arrowdown" => Some(SuggestionKey::Down),
            "up" | "arrowup" => Some(SuggestionKey::Up),
            "enter" => Some(SuggestionKey::Enter),
            _ => None,
        }
    }
}

/// Search term, the candidates matching it, and the highlighted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionBox {
    candidates: Vec<String>,
    term: String,
    suggestions: Vec<String>,
    selected: Option<usize>,
}

impl SuggestionBox {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        Self {
            suggestions: candidates.clone(),
            candidates,
            term: String::new(),
            selected: None,
        }
    }

    /// Update the term and recompute suggestions by case-insensitive
    /// substring match. The highlighted row is left alone.
    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_string();
        let needle = term.to_lowercase();
        self.suggestions = self
            .candidates
            .iter()
            .filter(|c| c.to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }

    /// Apply a navigation key. Returns the accepted suggestion on `Enter`.
    pub fn handle_key(&mut self, key: SuggestionKey) -> Option<String> {
        match key {
            SuggestionKey::Down => {
                if let Some(last) = self.suggestions.len().checked_sub(1) {
                    self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
                }
                None
            }
            SuggestionKey::Up => {
                self.selected = self.selected.and_then(|i| i.checked_sub(1));
                None
            }
            SuggestionKey::Enter => {
                let chosen = self.selected.and_then(|i| self.suggestions.get(i)).cloned()?;
                self.term = chosen.clone();
                self.suggestions.clear();
                self.selected = None;
                Some(chosen)
            }
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The dropdown shows only with a term and at least one match.
    pub fn is_open(&self) -> bool {
        !self.term.is_empty() && !self.suggestions.is_empty()
    }
}

impl Default for SuggestionBox {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_substring() {
        let mut search = SuggestionBox::default();
        search.set_term("O");
        assert_eq!(search.suggestions(), ["Home", "Shop", "Offers", "About Us"]);

        search.set_term("wal");
        assert_eq!(search.suggestions(), ["Wallets"]);
        assert!(search.is_open());
    }

    #[test]
    fn test_closed_without_term_or_matches() {
        let mut search = SuggestionBox::default();
        assert!(!search.is_open());

        search.set_term("zzz");
        assert!(search.suggestions().is_empty());
        assert!(!search.is_open());
    }

    #[test]
    fn test_down_clamps_at_last() {
        let mut search = SuggestionBox::default();
        search.set_term("sh");
        assert_eq!(search.suggestions(), ["Shop"]);

        search.handle_key(SuggestionKey::Down);
        search.handle_key(SuggestionKey::Down);
        assert_eq!(search.selected(), Some(0));
    }

    #[test]
    fn test_up_from_first_clears_selection() {
        let mut search = SuggestionBox::default();
        search.set_term("o");
        search.handle_key(SuggestionKey::Down);
        search.handle_key(SuggestionKey::Down);
        assert_eq!(search.selected(), Some(1));

        search.handle_key(SuggestionKey::Up);
        search.handle_key(SuggestionKey::Up);
        assert_eq!(search.selected(), None);
        search.handle_key(SuggestionKey::Up);
        assert_eq!(search.selected(), None);
    }

    #[test]
    fn test_down_on_empty_list_is_noop() {
        let mut search = SuggestionBox::default();
        search.set_term("zzz");
        search.handle_key(SuggestionKey::Down);
        assert_eq!(search.selected(), None);
    }

    #[test]
    fn test_enter_accepts_selection() {
        let mut search = SuggestionBox::default();
        search.set_term("of");
        search.handle_key(SuggestionKey::Down);

        let chosen = search.handle_key(SuggestionKey::Enter);
        assert_eq!(chosen.as_deref(), Some("Offers"));
        assert_eq!(search.term(), "Offers");
        assert!(search.suggestions().is_empty());
        assert_eq!(search.selected(), None);
    }

    #[test]
    fn test_enter_without_selection_does_nothing() {
        let mut search = SuggestionBox::default();
        search.set_term("of");
        assert_eq!(search.handle_key(SuggestionKey::Enter), None);
        assert_eq!(search.term(), "of");
        assert_eq!(search.suggestions(), ["Offers"]);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(SuggestionKey::parse("ArrowDown"), Some(SuggestionKey::Down));
        assert_eq!(SuggestionKey::parse("up"), Some(SuggestionKey::Up));
        assert_eq!(SuggestionKey::parse("tab"), None);
    }
}
