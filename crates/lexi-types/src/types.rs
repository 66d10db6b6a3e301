use serde::{Deserialize, Serialize};

/// User commands coming from the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SubmitSearch(String),
    ClearSearch,
    SelectLetter(char),
    NextPage,
    PrevPage,
    /// Re-run the dictionary fetch after a failure
    Retry,
    Close,
}

/// Mapping-load lifecycle as seen by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Loading,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    pub word: String,
    pub definitions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTab {
    pub letter: char,
    pub active: bool,
}

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub status: LoadStatus,
    pub search_term: String,
    pub letters: Vec<LetterTab>,
    pub entries: Vec<EntryView>,
    /// Zero-based index of the page being shown
    pub page: usize,
    pub page_count: usize,
    pub can_prev: bool,
    pub can_next: bool,
    /// Loaded, but the search term matched nothing anywhere
    pub no_results: bool,
}

impl ViewModel {
    pub fn active_letter(&self) -> Option<char> {
        self.letters.iter().find(|tab| tab.active).map(|tab| tab.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_status_serializes_with_tag() {
        let json = serde_json::to_string(&LoadStatus::Failed("boom".into())).unwrap();
        assert_eq!(json, r#"{"state":"failed","message":"boom"}"#);

        let json = serde_json::to_string(&LoadStatus::Ready).unwrap();
        assert_eq!(json, r#"{"state":"ready"}"#);
    }

    #[test]
    fn active_letter_picks_flagged_tab() {
        let view = ViewModel {
            letters: vec![
                LetterTab { letter: 'a', active: false },
                LetterTab { letter: 'b', active: true },
            ],
            ..Default::default()
        };
        assert_eq!(view.active_letter(), Some('b'));
        assert_eq!(ViewModel::default().active_letter(), None);
    }
}
