use crate::entry::Entry;

/// Contiguous run of sorted entries sharing the same first character.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGroup {
    entries: Vec<Entry>,
}

impl LetterGroup {
    pub fn letter(&self) -> Option<char> {
        self.entries.first().and_then(Entry::first_char)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split already-sorted entries into runs of equal first character.
///
/// The comparison is against the first character of the run being built, on
/// the raw character, so `a` and `A` words form separate runs.
pub fn group(entries: Vec<Entry>) -> Vec<LetterGroup> {
    let mut groups = Vec::new();
    let mut current: Vec<Entry> = Vec::new();

    for entry in entries {
        let starts_new_run = current
            .last()
            .is_some_and(|last| last.first_char() != entry.first_char());

        if starts_new_run {
            groups.push(LetterGroup {
                entries: std::mem::take(&mut current),
            });
        }
        current.push(entry);
    }

    if !current.is_empty() {
        groups.push(LetterGroup { entries: current });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::parse_mapping;
    use crate::types::DictionaryMapping;

    fn entries(words: &[&str]) -> Vec<Entry> {
        words.iter().map(|w| Entry::parse(w, "1. x")).collect()
    }

    #[test]
    fn runs_are_split_on_first_character() {
        let groups = group(entries(&["ant", "apple", "bee", "cat", "cow"]));
        let letters: Vec<Option<char>> = groups.iter().map(LetterGroup::letter).collect();
        assert_eq!(letters, vec![Some('a'), Some('b'), Some('c')]);
        assert_eq!(groups.iter().map(LetterGroup::len).collect::<Vec<_>>(), vec![2, 1, 2]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group(Vec::new()).is_empty());
    }

    #[test]
    fn single_trailing_entry_is_emitted() {
        let groups = group(entries(&["ant", "zebra"]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].entries()[0].word, "zebra");
    }

    #[test]
    fn interleaved_case_forms_separate_runs() {
        let groups = group(entries(&["ant", "Apple", "apricot"]));
        let letters: Vec<Option<char>> = groups.iter().map(LetterGroup::letter).collect();
        assert_eq!(letters, vec![Some('a'), Some('A'), Some('a')]);
    }

    #[test]
    fn grouping_partitions_every_word_in_order() {
        let mapping: DictionaryMapping = ["delta", "alpha", "charlie", "bravo", "alpine", "dog", "Echo"]
            .into_iter()
            .map(|w| (w.to_string(), format!("1. {w}")))
            .collect();

        let sorted = parse_mapping(&mapping);
        let groups = group(sorted.clone());

        let total: usize = groups.iter().map(LetterGroup::len).sum();
        assert_eq!(total, mapping.len());

        let rejoined: Vec<Entry> = groups
            .iter()
            .flat_map(|g| g.entries().iter().cloned())
            .collect();
        assert_eq!(rejoined, sorted);

        for g in &groups {
            assert!(!g.is_empty());
            assert!(g.entries().iter().all(|e| e.first_char() == g.letter()));
        }
    }
}
