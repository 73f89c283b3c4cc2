use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_SYMBOL: &str = "2330.TW";
pub const DEFAULT_ALERT_LABEL: &str = "TSMC";
pub const DEFAULT_STATE_FILE: &str = "last_state.txt";

/// Optional on-disk settings. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    symbol: Option<String>,
    alert_label: Option<String>,
    state_file: Option<PathBuf>,
}

/// Sender credentials. Absent values are reported when an email is sent.
#[derive(Debug, Clone, Default)]
pub struct EmailConfig {
    pub api_key: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub symbol: String,
    pub alert_label: String,
    pub state_file: PathBuf,
    pub email: EmailConfig,
}

/// Loads the config file at `path` (a missing file means defaults) and applies
/// environment overrides from the process environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

pub fn load_config_with<F>(path: &Path, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let file = match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str::<FileConfig>(&content)?,
        Err(e) if e.kind() == ErrorKind::NotFound => FileConfig::default(),
        Err(e) => return Err(e.into()),
    };

    // Empty environment values count as unset.
    let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    Ok(AppConfig {
        symbol: env("STOCK_SYMBOL")
            .or(file.symbol)
            .unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
        alert_label: env("ALERT_LABEL")
            .or(file.alert_label)
            .unwrap_or_else(|| DEFAULT_ALERT_LABEL.to_string()),
        state_file: env("STATE_FILE")
            .map(PathBuf::from)
            .or(file.state_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE)),
        email: EmailConfig {
            api_key: env("SENDGRID_API_KEY"),
            from: env("FROM_EMAIL"),
            to: env("TO_EMAIL"),
        },
    })
}
