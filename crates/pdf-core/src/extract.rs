// pdf-core/src/extract.rs
//! 文本提取模块
//!
//! `pdf_extract` can panic on malformed input instead of returning an error,
//! so every call is wrapped in `catch_unwind`. A panic hook installed once
//! keeps those panics off stderr; panics elsewhere still reach the previous
//! hook.

use std::cell::Cell;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Once;

use crate::config::ExtractConfig;
use crate::models::Document;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("not a readable PDF: {0}")]
    Parse(String),
    #[error("PDF parser panicked on malformed input")]
    Panicked,
    #[error("document is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },
    #[error("document has {pages} pages, limit is {limit}")]
    TooManyPages { pages: usize, limit: usize },
}

/// Extracts a PDF from disk with no size limits.
pub fn extract(path: &Path) -> Result<Document, ExtractionError> {
    PdfExtractor::default().extract(path)
}

/// Extracts a PDF held in memory with no size limits.
pub fn extract_bytes(bytes: &[u8]) -> Result<Document, ExtractionError> {
    PdfExtractor::default().extract_bytes(bytes)
}

/// 检查是否为 PDF 文件（仅看扩展名）
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

thread_local! {
    static IN_PARSER: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !IN_PARSER.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Runs `parse` and turns a panic into [`ExtractionError::Panicked`].
fn catch_parser_panic<T>(parse: impl FnOnce() -> T) -> Result<T, ExtractionError> {
    install_quiet_hook();

    IN_PARSER.with(|flag| flag.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(parse));
    IN_PARSER.with(|flag| flag.set(false));

    result.map_err(|_| {
        tracing::warn!("pdf_extract panicked on malformed input");
        ExtractionError::Panicked
    })
}

fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    catch_parser_panic(|| pdf_extract::extract_text_from_mem_by_pages(bytes))?
        .map_err(|e| ExtractionError::Parse(e.to_string()))
}

/// 文本提取器
///
/// Stateless apart from its limits; callers cache the returned [`Document`].
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    limits: ExtractConfig,
}

impl PdfExtractor {
    pub fn new(limits: ExtractConfig) -> Self {
        Self { limits }
    }

    pub fn extract(&self, path: &Path) -> Result<Document, ExtractionError> {
        let io_error = |source| ExtractionError::Io {
            path: path.display().to_string(),
            source,
        };

        let size = fs::metadata(path).map_err(io_error)?.len();
        self.check_size(size)?;

        tracing::debug!("正在解析文件: {:?}", path);
        let bytes = fs::read(path).map_err(io_error)?;

        let mut document = self.extract_bytes(&bytes)?;
        document.source = Some(path.display().to_string());
        Ok(document)
    }

    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<Document, ExtractionError> {
        self.check_size(bytes.len() as u64)?;

        let pages = extract_pages(bytes)?;
        if self.limits.max_pages > 0 && pages.len() > self.limits.max_pages {
            return Err(ExtractionError::TooManyPages {
                pages: pages.len(),
                limit: self.limits.max_pages,
            });
        }

        for (index, page) in pages.iter().enumerate() {
            if page.trim().is_empty() {
                tracing::debug!("page {} has no extractable text", index + 1);
            } else {
                tracing::trace!("page {}: {} bytes of text", index + 1, page.len());
            }
        }

        let document = Document::from_pages(pages, None);
        tracing::debug!(
            "extracted {} pages, {} bytes of text",
            document.page_count,
            document.text.len()
        );
        Ok(document)
    }

    fn check_size(&self, size: u64) -> Result<(), ExtractionError> {
        let limit = self.limits.max_file_size;
        if limit > 0 && size > limit {
            return Err(ExtractionError::TooLarge { size, limit });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    const THREE_PAGES: &[u8] = include_bytes!("../tests/fixtures/three_pages.pdf");

    #[test]
    fn test_extract_three_page_fixture() {
        let document = extract_bytes(THREE_PAGES).unwrap();

        assert_eq!(document.page_count, 3);
        assert_eq!(document.pages.len(), 3);
        assert_eq!(document.pages[0].trim(), "Hello World");
        assert_eq!(document.pages[1], "");
        assert_eq!(document.pages[2].trim(), "Needle Here");
        assert!(document.text.ends_with("\n\n"));
        assert_eq!(document.source, None);
    }

    #[test]
    fn test_search_fixture_maps_hit_to_page() {
        let document = extract_bytes(THREE_PAGES).unwrap();

        let results = crate::search(&document.text, "needle");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_line, "Needle Here");
        assert!(results[0].context.contains("Needle Here"));
        assert_eq!(document.page_of_line(results[0].line), Some(3));

        let results = crate::search(&document.text, "HELLO");
        assert_eq!(results.len(), 1);
        assert_eq!(document.page_of_line(results[0].line), Some(1));
    }

    #[test]
    fn test_extract_fixture_from_disk_records_source() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(THREE_PAGES).unwrap();

        let document = extract(file.path()).unwrap();
        assert_eq!(document.page_count, 3);
        assert_eq!(document.source, Some(file.path().display().to_string()));
    }

    #[test]
    fn test_page_limit() {
        let extractor = PdfExtractor::new(ExtractConfig {
            max_pages: 2,
            max_file_size: 0,
        });
        let err = extractor.extract_bytes(THREE_PAGES).unwrap_err();
        assert!(matches!(err, ExtractionError::TooManyPages { pages: 3, limit: 2 }));
    }

    #[test]
    fn test_truncated_fixture_fails() {
        assert!(extract_bytes(&THREE_PAGES[..THREE_PAGES.len() / 2]).is_err());
    }

    #[test]
    fn test_parser_panic_becomes_error() {
        let result: Result<(), _> = catch_parser_panic(|| panic!("malformed object stream"));
        assert!(matches!(result, Err(ExtractionError::Panicked)));
        assert!(!IN_PARSER.with(Cell::get));

        assert_eq!(catch_parser_panic(|| 7).unwrap(), 7);
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"hello, this is plain text".as_slice())]
    #[case(b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog".as_slice())]
    fn test_non_pdf_bytes_fail(#[case] bytes: &[u8]) {
        assert!(extract_bytes(bytes).is_err());
    }

    #[test]
    fn test_size_limit_checked_before_parsing() {
        let extractor = PdfExtractor::new(ExtractConfig {
            max_pages: 0,
            max_file_size: 4,
        });
        let err = extractor.extract_bytes(b"%PDF-1.7").unwrap_err();
        assert!(matches!(err, ExtractionError::TooLarge { size: 8, limit: 4 }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(&dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }

    #[test]
    fn test_garbage_file_fails() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"definitely not a pdf").unwrap();

        assert!(is_pdf(file.path()));
        assert!(extract(file.path()).is_err());
    }

    #[rstest]
    #[case("paper.pdf", true)]
    #[case("PAPER.PDF", true)]
    #[case("notes.txt", false)]
    #[case("pdf", false)]
    fn test_is_pdf(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_pdf(Path::new(path)), expected);
    }
}
