use super::{Command, load_document};
use crate::config::Config;
use crate::error::{Result, bail};
use std::path::PathBuf;

pub struct ExtractCommand {
    config: Config,
    path: PathBuf,
    page: Option<usize>,
}

impl ExtractCommand {
    pub fn new(config: Config, path: PathBuf, page: Option<usize>) -> Self {
        Self { config, path, page }
    }
}

#[async_trait::async_trait]
impl Command for ExtractCommand {
    async fn execute(&self) -> Result<()> {
        let document = load_document(&self.path, &self.config.core.extract).await?;

        match self.page {
            Some(page) => {
                let Some(text) = document.page_text(page) else {
                    bail!("Page {} does not exist, the document has {} pages", page, document.page_count);
                };
                println!("Page {} / {}", page, document.page_count);
                println!("{}", text);
            }
            None => {
                println!("Pages: {}", document.page_count);
                print!("{}", document.text);
            }
        }

        Ok(())
    }
}
