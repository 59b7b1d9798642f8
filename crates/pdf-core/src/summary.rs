// pdf-core/src/summary.rs
//! 内容摘要（预览）

use crate::config::DisplayConfig;

const SENTENCE_ENDINGS: [char; 9] = ['。', '！', '？', '.', '!', '?', '\n', '；', ';'];

pub const EMPTY_SUMMARY: &str = "[no text content]";

/// 截取文本开头作为摘要
///
/// Prefers to cut after a sentence ending found between
/// `sentence_search_start` and `preview_max_length` characters, then at the
/// last whitespace in that range, and only then mid-word. Lengths are counted
/// in chars.
pub fn summarize(text: &str, display: &DisplayConfig) -> String {
    let cleaned = text.trim();
    if cleaned.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let max_len = display.preview_max_length;
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() <= max_len {
        return cleaned.to_string();
    }

    let window = display.sentence_search_start.min(max_len)..max_len;
    let end = window
        .clone()
        .rev()
        .find(|&i| SENTENCE_ENDINGS.contains(&chars[i]))
        .map(|i| i + 1)
        .or_else(|| window.rev().find(|&i| chars[i].is_whitespace()))
        .unwrap_or(max_len);

    let head: String = chars[..end].iter().collect();
    format!("{}...", head.trim_end())
}
