pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::env;
use std::path::PathBuf;

pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Environment variable first, then the platform strategy, then a folder under
/// the temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Full path of the configuration file.
///
/// Falls back to the temp dir when no home directory can be determined.
pub fn config_file_path() -> PathBuf {
    let dir = match create_strategy() {
        Ok(strategy) => resolve_dir(constants::CONFIG_DIR_ENV, &strategy, |s| {
            Some(s.config_dir())
        }),
        Err(_) => env::var_os(constants::CONFIG_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME)),
    };
    dir.join(constants::CONFIG_FILE_NAME)
}
