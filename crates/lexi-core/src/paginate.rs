use crate::entry::Entry;

/// Page threshold. A page is closed only once it holds more than this many
/// entries, so full pages carry `PAGE_SIZE + 1` entries.
pub const PAGE_SIZE: usize = 90;

/// Slice of one letter's filtered entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page<'a> {
    entries: Vec<&'a Entry>,
}

impl<'a> Page<'a> {
    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }

    pub fn first(&self) -> Option<&'a Entry> {
        self.entries.first().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cut filtered entries into pages. Always returns at least one page; with no
/// entries that page is empty.
pub fn paginate<'a, I>(filtered: I, page_size: usize) -> Vec<Page<'a>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut pages = Vec::new();
    let mut current = Page::default();

    for entry in filtered {
        if current.len() > page_size {
            pages.push(std::mem::take(&mut current));
        }
        current.entries.push(entry);
    }

    pages.push(current);
    pages
}
