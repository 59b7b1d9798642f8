pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "chatpdf";
pub const APP_NAME: &str = "chatpdf";

pub const CONFIG_FILE_NAME: &str = "chatpdf.toml";

/// Overrides the directory that holds [`CONFIG_FILE_NAME`].
pub const CONFIG_DIR_ENV: &str = "CHATPDF_CONFIG_DIRECTORY";
