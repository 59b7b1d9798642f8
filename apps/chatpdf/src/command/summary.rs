use super::{Command, load_document};
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;

pub struct SummaryCommand {
    config: Config,
    path: PathBuf,
    max_len: Option<usize>,
}

impl SummaryCommand {
    pub fn new(config: Config, path: PathBuf, max_len: Option<usize>) -> Self {
        Self { config, path, max_len }
    }
}

#[async_trait::async_trait]
impl Command for SummaryCommand {
    async fn execute(&self) -> Result<()> {
        let document = load_document(&self.path, &self.config.core.extract).await?;

        let mut display = self.config.core.display.clone();
        if let Some(max_len) = self.max_len {
            display.preview_max_length = max_len;
        }

        println!("{}", pdf_core::summarize(&document.text, &display));
        Ok(())
    }
}
