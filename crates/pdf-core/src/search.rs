// pdf-core/src/search.rs
//! 搜索模块
//!
//! Case-insensitive substring search over extracted text, one result per
//! matching line with a single line of context on each side.

use crate::models::SearchResult;

/// 搜索文本，返回所有匹配行及其上下文
///
/// `text` is split on `'\n'` with no special handling of a trailing newline,
/// so the blank lines that separate pages are ordinary lines: they show up in
/// context windows but never match a non-blank query. A blank query returns
/// nothing.
pub fn search(text: &str, query: &str) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    let needle = query.to_lowercase();

    let results: Vec<SearchResult> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(&needle))
        .map(|(index, line)| {
            let start = index.saturating_sub(1);
            let end = (index + 1).min(last);
            SearchResult {
                match_line: line.to_string(),
                context: lines[start..=end].join("\n"),
                line: index,
            }
        })
        .collect();

    tracing::debug!(
        "[search] query '{}': {} matches in {} lines",
        query,
        results.len(),
        lines.len()
    );
    results
}
