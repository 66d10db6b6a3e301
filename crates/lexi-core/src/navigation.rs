use crate::sections::Sections;

/// Selected letter tab and page within it.
///
/// Transitions that would step before the first or past the last navigable
/// letter are refused and leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub selected_letter: char,
    pub selected_page: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new('a')
    }
}

impl NavigationState {
    pub fn new(initial_letter: char) -> Self {
        Self {
            selected_letter: initial_letter,
            selected_page: 0,
        }
    }

    pub fn select_letter(&mut self, letter: char) {
        self.selected_letter = letter;
        self.selected_page = 0;
    }

    pub fn can_prev(&self, sections: &Sections) -> bool {
        if self.selected_page > 0 {
            return true;
        }
        letter_index(sections, self.selected_letter).is_some_and(|i| i > 0)
    }

    pub fn can_next(&self, sections: &Sections) -> bool {
        let Some(section) = sections.find(self.selected_letter) else {
            return false;
        };
        if self.selected_page < section.last_page_index() {
            return true;
        }
        let letters = sections.navigable_letters();
        letter_index(sections, self.selected_letter).is_some_and(|i| i + 1 < letters.len())
    }

    /// Returns whether the state moved
    pub fn next_page(&mut self, sections: &Sections) -> bool {
        if !self.can_next(sections) {
            return false;
        }

        let last_page = sections
            .find(self.selected_letter)
            .map_or(0, |section| section.last_page_index());

        if self.selected_page >= last_page {
            let letters = sections.navigable_letters();
            let Some(next) = letter_index(sections, self.selected_letter).and_then(|i| letters.get(i + 1)) else {
                return false;
            };
            self.selected_letter = *next;
            self.selected_page = 0;
        } else {
            self.selected_page += 1;
        }
        true
    }

    /// Returns whether the state moved
    pub fn prev_page(&mut self, sections: &Sections) -> bool {
        if !self.can_prev(sections) {
            return false;
        }

        if self.selected_page == 0 {
            let letters = sections.navigable_letters();
            let Some(prev) = letter_index(sections, self.selected_letter)
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| letters.get(i))
            else {
                return false;
            };
            self.selected_letter = *prev;
            self.selected_page = sections
                .find(*prev)
                .map_or(0, |section| section.last_page_index());
        } else {
            self.selected_page -= 1;
        }
        true
    }

    /// Selection after a search is submitted. `submitted` is the raw input;
    /// `sections` must already reflect the new term.
    pub fn jump_to_search(&mut self, submitted: &str, sections: &Sections) {
        self.selected_page = 0;

        let letters = sections.navigable_letters();
        let typed = submitted.trim().to_lowercase().chars().next();

        match typed.filter(|letter| letters.contains(letter)) {
            Some(letter) => self.selected_letter = letter,
            None => {
                if let Some(first) = letters.first() {
                    self.selected_letter = *first;
                }
            }
        }
    }

    /// Snap back to the first navigable letter if the selection no longer
    /// points at a page that exists
    pub fn ensure_valid(&mut self, sections: &Sections) {
        let valid = sections
            .find(self.selected_letter)
            .is_some_and(|section| self.selected_page <= section.last_page_index());

        if !valid && let Some(first) = sections.navigable_letters().first() {
            self.select_letter(*first);
        }
    }
}

fn letter_index(sections: &Sections, letter: char) -> Option<usize> {
    sections.navigable_letters().iter().position(|l| *l == letter)
}
