// pdf-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};

/// 核心配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CoreConfig {
    pub extract: ExtractConfig,
    pub display: DisplayConfig,
}

/// 提取限制，0 表示不限制
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ExtractConfig {
    pub max_pages: usize,
    pub max_file_size: u64,
}

/// 显示配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub preview_max_length: usize,
    pub sentence_search_start: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_max_length: 200,
            sentence_search_start: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: CoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.display.preview_max_length, 200);
        assert_eq!(config.extract.max_pages, 0);
    }

    #[test]
    fn test_partial_config() {
        let config: CoreConfig = toml::from_str(
            r#"
[extract]
max-pages = 50

[display]
sentence-search-start = 10
"#,
        )
        .unwrap();
        assert_eq!(config.extract.max_pages, 50);
        assert_eq!(config.extract.max_file_size, 0);
        assert_eq!(config.display.sentence_search_start, 10);
        assert_eq!(config.display.preview_max_length, 200);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<CoreConfig>("watch-paths = []").is_err());
        assert!(toml::from_str::<CoreConfig>("[display]\npreview = 3").is_err());
        assert!(toml::from_str::<CoreConfig>("[chat]\nthink-delay-ms = 0").is_err());
    }
}
