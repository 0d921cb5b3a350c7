use crate::messages::{
    search_header, search_no_results, LIST_EMPTY, LIST_HEADER, SEARCH_FOOTER,
};
use crate::search::{ResultRef, SearchIndex};

/// Custom encouragements numbered by store position (0-based).
pub fn format_list(entries: &[String]) -> String {
    if entries.is_empty() {
        return LIST_EMPTY.to_string();
    }
    let mut text = String::from(LIST_HEADER);
    for (position, entry) in entries.iter().enumerate() {
        text.push_str(&format!("\n{position}: {entry}"));
    }
    text
}

/// Search hits numbered from 1, tagged by origin.
pub fn format_search(term: &str, index: &SearchIndex) -> String {
    if index.is_empty() {
        return search_no_results(term);
    }
    let mut text = search_header(term);
    text.push('\n');
    for (number, hit) in index.iter() {
        text.push_str(&format_hit(number, hit));
        text.push('\n');
    }
    text.push_str(SEARCH_FOOTER);
    text
}

fn format_hit(number: u64, hit: &ResultRef) -> String {
    let tag = match hit {
        ResultRef::Builtin(_) => "built-in",
        ResultRef::Custom { .. } => "custom - deletable",
    };
    format!("{number}. {} ({tag})", hit.text())
}
