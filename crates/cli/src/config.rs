//! Application configuration from environment variables.

use std::path::PathBuf;

use salesbook_observability::LogFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `sales_items.json` and `shipping_locations.json`.
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("no data directory: {0}")]
    NoDataDir(String),
}

/// Load configuration, reading a `.env` file first if one exists.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a plain map.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let data_dir = match lookup("SALESBOOK_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => salesbook_storage::default_data_dir()
            .map_err(|e| ConfigError::NoDataDir(e.to_string()))?,
    };

    let log_format = match lookup("SALESBOOK_LOG_FORMAT") {
        Ok(raw) => raw.parse::<LogFormat>().map_err(|e| {
            ConfigError::InvalidEnvVar {
                var: "SALESBOOK_LOG_FORMAT".to_string(),
                reason: e.to_string(),
            }
        })?,
        Err(_) => LogFormat::default(),
    };

    Ok(AppConfig {
        data_dir,
        log_format,
    })
}
