use std::fmt::Write;

use lexi_types::{LoadStatus, ViewModel};

pub const HELP: &str = "\
Commands:
  <text> | /search <text>   search (wrap in double quotes for an exact word)
  /clear                    clear the search
  /letter <c>               jump to a letter
  n | p                     next / previous page
  /retry                    retry a failed load
  /quit                     exit
";

/// Plain-text frame for one view model
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();

    match &view.status {
        LoadStatus::Loading => {
            out.push_str("Loading...\n");
            return out;
        }
        LoadStatus::Failed(message) => {
            let _ = writeln!(out, "Failed to load dictionary: {message}");
            out.push_str("Type /retry to try again.\n");
            return out;
        }
        LoadStatus::Ready => {}
    }

    if !view.search_term.is_empty() {
        let _ = writeln!(out, "Search: {}", view.search_term);
    }

    if view.no_results {
        out.push_str("No results.\n");
        return out;
    }

    let tabs: Vec<String> = view
        .letters
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.letter)
            } else {
                tab.letter.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" "));
    out.push('\n');

    for entry in &view.entries {
        let _ = writeln!(out, "{}", entry.word);
        for (i, definition) in entry.definitions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, definition);
        }
    }

    let prev = if view.can_prev { "p: prev" } else { "-" };
    let next = if view.can_next { "n: next" } else { "-" };
    let _ = writeln!(
        out,
        "\n{prev}  page {}/{}  {next}",
        view.page + 1,
        view.page_count.max(1)
    );

    out
}
