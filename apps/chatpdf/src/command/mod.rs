pub mod chat;
pub mod extract;
pub mod search;
pub mod summary;

use crate::error::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use pdf_core::{Document, ExtractConfig, PdfExtractor};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use chat::ChatCommand;
pub use extract::ExtractCommand;
pub use search::SearchCommand;
pub use summary::SummaryCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// 提取 PDF 文本，提取期间显示进度指示
///
/// Extraction is blocking, so it runs on the blocking pool.
pub async fn load_document(path: &Path, limits: &ExtractConfig) -> Result<Document> {
    if !pdf_core::is_pdf(path) {
        tracing::warn!("{} does not have a .pdf extension", path.display());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Processing PDF...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let extractor = PdfExtractor::new(limits.clone());
    let owned: PathBuf = path.to_path_buf();
    let result = tokio::task::spawn_blocking(move || extractor.extract(&owned)).await;
    spinner.finish_and_clear();

    let document = result
        .wrap_err("Extraction task failed")?
        .with_context(|| format!("Failed to extract text from {}", path.display()))?;

    tracing::info!(
        "processed {}: {} pages",
        path.display(),
        document.page_count
    );
    Ok(document)
}
