// pdf-core/src/lib.rs
//! PDF 阅读核心库
//!
//! 提供：
//! - 逐页 PDF 文本提取
//! - 带上下文的行级文本搜索
//! - 文本摘要预览
//! - 可替换的模拟聊天回复器
//!
//! The library holds no state of its own. Callers keep the extracted
//! [`Document`] and pass its text back into [`search`].

pub mod config;
pub mod extract;
pub mod models;
pub mod responder;
pub mod search;
pub mod summary;

// 重导出核心类型
pub use config::{CoreConfig, DisplayConfig, ExtractConfig};
pub use extract::{extract, extract_bytes, is_pdf, ExtractionError, PdfExtractor};
pub use models::{Document, SearchResult, PAGE_SEPARATOR};
pub use responder::{
    CannedResponder, KeywordResponder, Responder, ResponderKind, UnknownResponder, SUGGESTIONS,
};
pub use search::search;
pub use summary::summarize;
