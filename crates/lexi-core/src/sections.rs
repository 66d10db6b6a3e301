use crate::entry::Entry;
use crate::group::LetterGroup;
use crate::paginate::{Page, paginate};
use crate::search::{SearchTerm, matches};

/// One letter group's filtered entries, split into pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSection<'a> {
    pages: Vec<Page<'a>>,
}

impl<'a> LetterSection<'a> {
    /// Letter of the first surviving entry; `None` when nothing in the group
    /// matched the search term
    pub fn letter(&self) -> Option<char> {
        self.pages
            .first()
            .and_then(Page::first)
            .and_then(|entry| entry.first_char())
    }

    pub fn pages(&self) -> &[Page<'a>] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page<'a>> {
        self.pages.get(index)
    }

    pub fn last_page_index(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }
}

/// Paginated view over every letter group for one search term.
///
/// Case-interleaved dictionaries sort `ant, Apple, apricot` into three runs
/// (`a`, `A`, `a`); runs sharing a letter are merged into one section, in
/// sorted order, so every letter appears once and every entry is reachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    sections: Vec<LetterSection<'a>>,
}

impl<'a> Sections<'a> {
    pub fn build(groups: &'a [LetterGroup], term: &SearchTerm, page_size: usize) -> Self {
        let mut merged: Vec<(Option<char>, Vec<&'a Entry>)> = Vec::new();

        for group in groups {
            let letter = group.letter();
            let filtered = group.entries().iter().filter(|entry| matches(entry, term));

            match merged.iter().position(|(l, _)| letter.is_some() && *l == letter) {
                Some(i) => merged[i].1.extend(filtered),
                None => merged.push((letter, filtered.collect())),
            }
        }

        let sections = merged
            .into_iter()
            .map(|(_, entries)| LetterSection {
                pages: paginate(entries, page_size),
            })
            .collect();

        Self { sections }
    }

    pub fn all(&self) -> &[LetterSection<'a>] {
        &self.sections
    }

    /// Letters that still have at least one matching entry, in sorted order
    pub fn navigable_letters(&self) -> Vec<char> {
        self.sections.iter().filter_map(LetterSection::letter).collect()
    }

    pub fn find(&self, letter: char) -> Option<&LetterSection<'a>> {
        self.sections.iter().find(|section| section.letter() == Some(letter))
    }
}
