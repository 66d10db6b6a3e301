use crate::collate::locale_cmp;
use crate::types::DictionaryMapping;

/// A headword with its individual definitions, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub definitions: Vec<String>,
}

impl Entry {
    pub fn parse(word: &str, raw: &str) -> Self {
        Self {
            word: word.to_string(),
            definitions: split_definitions(raw),
        }
    }

    /// First character of the headword, `None` for an empty word
    pub fn first_char(&self) -> Option<char> {
        self.word.chars().next()
    }
}

/// Parse every pair of the mapping and return the entries sorted by word
pub fn parse_mapping(mapping: &DictionaryMapping) -> Vec<Entry> {
    let mut pairs: Vec<(&String, &String)> = mapping.iter().collect();
    pairs.sort_by(|a, b| locale_cmp(a.0, b.0));

    pairs
        .into_iter()
        .map(|(word, raw)| Entry::parse(word, raw))
        .collect()
}

/// Drop a leading "1. " and cut the rest at every " <digit>. " marker.
///
/// Marker whitespace may be any whitespace character. Fragments are not
/// trimmed, and text without markers comes back as a single definition.
fn split_definitions(raw: &str) -> Vec<String> {
    let text = strip_first_marker(raw);
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut definitions = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i + 3 < chars.len() {
        let (pos, c) = chars[i];
        let is_marker = c.is_whitespace()
            && chars[i + 1].1.is_ascii_digit()
            && chars[i + 2].1 == '.'
            && chars[i + 3].1.is_whitespace();

        if is_marker {
            definitions.push(text[start..pos].to_string());
            start = chars.get(i + 4).map_or(text.len(), |&(next, _)| next);
            i += 4;
        } else {
            i += 1;
        }
    }

    definitions.push(text[start..].to_string());
    definitions
}

fn strip_first_marker(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('1'), Some('.'), Some(ws)) if ws.is_whitespace() => &raw[2 + ws.len_utf8()..],
        _ => raw,
    }
}
