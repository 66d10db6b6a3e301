use lexi_config::Config;
use lexi_types::{EntryView, LetterTab, ViewModel};

use crate::entry::{Entry, parse_mapping};
use crate::error::LoadError;
use crate::group::{LetterGroup, group};
use crate::load::LoadState;
use crate::navigation::NavigationState;
use crate::paginate::PAGE_SIZE;
use crate::search::{LENGTH_SLACK, SearchTerm};
use crate::sections::Sections;
use crate::types::DictionaryMapping;

/// The viewer's only mutable state: the loaded mapping, the search term and
/// the letter/page selection. Everything else is derived on demand.
pub struct ViewerState {
    load: LoadState,
    groups: Vec<LetterGroup>,
    term: SearchTerm,
    nav: NavigationState,
    page_size: usize,
    length_slack: usize,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(PAGE_SIZE, LENGTH_SLACK, 'a')
    }
}

impl ViewerState {
    pub fn new(page_size: usize, length_slack: usize, initial_letter: char) -> Self {
        Self {
            load: LoadState::default(),
            groups: Vec::new(),
            term: SearchTerm::default().with_slack(length_slack),
            nav: NavigationState::new(initial_letter),
            page_size,
            length_slack,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.view.page_size,
            config.search.length_slack,
            config.view.initial_letter,
        )
    }

    /// Returns true when the caller should start a fetch
    pub fn begin_load(&mut self) -> bool {
        self.load.begin()
    }

    pub fn finish_load(&mut self, result: Result<DictionaryMapping, LoadError>) {
        if !self.load.finish(result) {
            tracing::warn!("Dropping dictionary result, no load in progress");
            return;
        }

        match &self.load {
            LoadState::Ready(mapping) => {
                self.groups = group(parse_mapping(mapping));
                tracing::info!(
                    "Dictionary ready: {} entries in {} letter groups",
                    mapping.len(),
                    self.groups.len()
                );
                let sections = Sections::build(&self.groups, &self.term, self.page_size);
                self.nav.ensure_valid(&sections);
            }
            LoadState::Failed(e) => tracing::error!("Dictionary load failed: {e}"),
            _ => {}
        }
    }

    pub fn search_term(&self) -> &SearchTerm {
        &self.term
    }

    pub fn navigation(&self) -> NavigationState {
        self.nav
    }

    pub fn sections(&self) -> Sections<'_> {
        Sections::build(&self.groups, &self.term, self.page_size)
    }

    pub fn navigable_letters(&self) -> Vec<char> {
        self.sections().navigable_letters()
    }

    /// Entries on the selected page; empty when nothing is selectable
    pub fn current_page(&self) -> Vec<&Entry> {
        let sections = self.sections();
        sections
            .find(self.nav.selected_letter)
            .and_then(|section| section.page(self.nav.selected_page))
            .map(|page| page.entries().to_vec())
            .unwrap_or_default()
    }

    pub fn can_prev(&self) -> bool {
        self.nav.can_prev(&self.sections())
    }

    pub fn can_next(&self) -> bool {
        self.nav.can_next(&self.sections())
    }

    /// Store the lowercased, trimmed input as the term, then pick the letter
    /// from the recomputed sections
    pub fn submit_search(&mut self, input: &str) {
        let normalized = input.trim().to_lowercase();
        self.term = SearchTerm::new(normalized.clone()).with_slack(self.length_slack);

        let sections = Sections::build(&self.groups, &self.term, self.page_size);
        self.nav.jump_to_search(&normalized, &sections);
        tracing::debug!(
            "Search '{}' -> letter '{}', {} navigable letters",
            normalized,
            self.nav.selected_letter,
            sections.navigable_letters().len()
        );
    }

    pub fn clear_search(&mut self) {
        self.term = SearchTerm::default().with_slack(self.length_slack);

        let sections = Sections::build(&self.groups, &self.term, self.page_size);
        self.nav.ensure_valid(&sections);
        tracing::debug!("Search cleared");
    }

    /// Only navigable letters can be selected
    pub fn select_letter(&mut self, letter: char) -> bool {
        if !self.navigable_letters().contains(&letter) {
            tracing::debug!("Ignoring selection of letter '{letter}'");
            return false;
        }
        self.nav.select_letter(letter);
        true
    }

    pub fn next_page(&mut self) -> bool {
        let sections = Sections::build(&self.groups, &self.term, self.page_size);
        let moved = self.nav.next_page(&sections);
        tracing::debug!("Next page -> {:?} (moved: {moved})", self.nav);
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let sections = Sections::build(&self.groups, &self.term, self.page_size);
        let moved = self.nav.prev_page(&sections);
        tracing::debug!("Prev page -> {:?} (moved: {moved})", self.nav);
        moved
    }

    pub fn view_model(&self) -> ViewModel {
        let sections = self.sections();
        let letters = sections.navigable_letters();
        let current = sections.find(self.nav.selected_letter);

        let entries: Vec<EntryView> = current
            .and_then(|section| section.page(self.nav.selected_page))
            .map(|page| {
                page.entries()
                    .iter()
                    .map(|entry| EntryView {
                        word: entry.word.clone(),
                        definitions: entry.definitions.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        ViewModel {
            status: self.load.status(),
            search_term: self.term.as_str().to_string(),
            letters: letters
                .iter()
                .map(|&letter| LetterTab {
                    letter,
                    active: letter == self.nav.selected_letter,
                })
                .collect(),
            entries,
            page: self.nav.selected_page,
            page_count: current.map_or(0, |section| section.pages().len()),
            can_prev: self.nav.can_prev(&sections),
            can_next: self.nav.can_next(&sections),
            no_results: self.load.is_ready() && letters.is_empty(),
        }
    }
}
