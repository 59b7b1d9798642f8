use super::{Command, load_document};
use crate::config::Config;
use crate::error::Result;
use pdf_core::{Document, SearchResult};
use std::path::PathBuf;

pub struct SearchCommand {
    config: Config,
    path: PathBuf,
    query: String,
    json: bool,
}

impl SearchCommand {
    pub fn new(config: Config, path: PathBuf, query: String, json: bool) -> Self {
        Self { config, path, query, json }
    }
}

/// 格式化搜索结果（人类可读）
pub fn render_results(document: &Document, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results\n".to_string();
    }

    let mut out = format!("Found {} results\n", results.len());
    for (index, result) in results.iter().enumerate() {
        let header = match document.page_of_line(result.line) {
            Some(page) => format!("\n── Result {} (page {}) ──\n", index + 1, page),
            None => format!("\n── Result {} ──\n", index + 1),
        };
        out.push_str(&header);
        out.push_str(&result.context);
        out.push('\n');
    }
    out
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let document = load_document(&self.path, &self.config.core.extract).await?;
        let results = pdf_core::search(&document.text, &self.query);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            print!("{}", render_results(&document, &results));
        }
        Ok(())
    }
}
