// pdf-core/src/models.rs
//! 数据模型定义

use serde::{Deserialize, Serialize};

/// Separator appended after every page when building [`Document::text`].
pub const PAGE_SEPARATOR: &str = "\n\n";

/// 已提取的 PDF 文档
///
/// Created once per opened file and never mutated afterwards; a new upload
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// All pages concatenated, each followed by [`PAGE_SEPARATOR`].
    pub text: String,
    /// Total number of pages, including pages without extractable text.
    pub page_count: usize,
    /// Text of every page, in page order.
    pub pages: Vec<String>,
    /// Where the document was read from, when it came from disk.
    pub source: Option<String>,
}

impl Document {
    pub fn from_pages(pages: Vec<String>, source: Option<String>) -> Self {
        let capacity = pages.iter().map(|p| p.len() + PAGE_SEPARATOR.len()).sum();
        let mut text = String::with_capacity(capacity);
        for page in &pages {
            text.push_str(page);
            text.push_str(PAGE_SEPARATOR);
        }

        Self {
            text,
            page_count: pages.len(),
            pages,
            source,
        }
    }

    /// Text of a 1-based page number.
    pub fn page_text(&self, page: usize) -> Option<&str> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Maps a 0-based line index of [`Document::text`] (as split on `'\n'`)
    /// to the 1-based page it belongs to.
    ///
    /// The blank separator line after a page counts towards that page; the
    /// trailing empty segment after the final separator maps to the last page.
    pub fn page_of_line(&self, line: usize) -> Option<usize> {
        if self.page_count == 0 {
            return None;
        }

        let mut start = 0;
        for (index, page) in self.pages.iter().enumerate() {
            let span = page.matches('\n').count() + 2;
            if line < start + span {
                return Some(index + 1);
            }
            start += span;
        }

        // 最后一个分隔符之后的空行
        (line == start).then_some(self.page_count)
    }
}

/// 一条搜索结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The line that contains the query, in its original case.
    #[serde(rename = "match")]
    pub match_line: String,
    /// The matched line plus at most one neighbour on each side, joined by `\n`.
    pub context: String,
    /// 0-based index of the matched line.
    pub line: usize,
}
