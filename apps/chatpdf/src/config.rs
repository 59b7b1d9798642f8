use crate::error::{Result, WrapErr};
use pdf_core::{CoreConfig, DisplayConfig, ExtractConfig, ResponderKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const EXAMPLE_CONFIG: &str = r#"# chatpdf 配置文件
#
# 此文件在首次运行时自动创建，所有配置项均可省略

[extract]
# 最大页数，0 表示不限制
max-pages = 0
# 最大文件大小（字节），0 表示不限制
max-file-size = 0

[display]
# 摘要最大长度（字符）
preview-max-length = 200
# 从第几个字符开始寻找句子结尾
sentence-search-start = 50

[chat]
# 回复器: "canned" 或 "keyword"
responder = "canned"
# 回复前的等待时间（毫秒）
think-delay-ms = 300
"#;

/// 聊天界面配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ChatConfig {
    pub responder: ResponderKind,
    pub think_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            responder: ResponderKind::default(),
            think_delay_ms: 300,
        }
    }
}

/// 配置文件的完整结构
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    extract: ExtractConfig,
    display: DisplayConfig,
    chat: ChatConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub core: CoreConfig,
    pub chat: ChatConfig,
}

impl Config {
    pub fn load() -> Result<Config> {
        Self::load_from(config::config_file_path())
    }

    pub fn load_from(config_path: PathBuf) -> Result<Config> {
        let file: ConfigFile = match std::fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // 配置文件不存在，创建示例配置文件
                Self::create_example_config(&config_path)?;
                ConfigFile::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Config {
            path: config_path,
            core: CoreConfig {
                extract: file.extract,
                display: file.display,
            },
            chat: file.chat,
        })
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, EXAMPLE_CONFIG)?;

        tracing::info!("created example config at {}", config_path.display());
        Ok(())
    }
}
