//! Startup configuration read from `recipes_app.ron` in the working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use recipes_core::{TableSettings, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use recipes_engine::{FetchSettings, DEFAULT_BASE_URL};
use recipes_logging::recipes_warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const CONFIG_FILENAME: &str = "recipes_app.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("base_url {0:?} is not an absolute http(s) url")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub default_page_size: u32,
    pub filter_debounce_ms: u64,
    pub serves_debounce_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_body_bytes: u64,
    pub tick_ms: u64,
    pub log_file: PathBuf,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            filter_debounce_ms: 300,
            serves_debounce_ms: 200,
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
            max_body_bytes: 5 * 1024 * 1024,
            tick_ms: 50,
            log_file: PathBuf::from("./recipes_app.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_body_bytes,
            ..FetchSettings::default()
        }
    }

    /// Core table settings; an unknown page size falls back to the default.
    pub fn table_settings(&self) -> TableSettings {
        let default_limit = if PAGE_SIZE_OPTIONS.contains(&self.default_page_size) {
            self.default_page_size
        } else {
            recipes_warn!(
                "default_page_size {} is not one of {:?}; using {}",
                self.default_page_size,
                PAGE_SIZE_OPTIONS,
                DEFAULT_PAGE_SIZE
            );
            DEFAULT_PAGE_SIZE
        };
        TableSettings {
            default_limit,
            filter_debounce: Duration::from_millis(self.filter_debounce_ms),
            serves_debounce: Duration::from_millis(self.serves_debounce_ms),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(self),
            _ => Err(ConfigError::InvalidBaseUrl(self.base_url)),
        }
    }
}

/// Reads the config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: AppConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.table_settings(), TableSettings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"(base_url: "https://recipes.example/api/recipes", default_page_size: 50, tick_ms: 20)"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.base_url, "https://recipes.example/api/recipes");
        assert_eq!(config.table_settings().default_limit, 50);
        assert_eq!(config.tick(), Duration::from_millis(20));
        assert_eq!(config.filter_debounce_ms, 300);
        assert_eq!(
            config.fetch_settings().request_timeout,
            Duration::from_secs(30)
        );
    }

    #[test]
    fn unknown_page_size_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "(default_page_size: 7)");
        let config = load_config(&path).unwrap();
        assert_eq!(config.default_page_size, 7);
        assert_eq!(config.table_settings().default_limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "(base_url: ");
        assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"(base_url: "ftp://example.com/recipes")"#);
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn log_level_parses_or_defaults() {
        let config = AppConfig {
            log_level: "debug".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Debug);
        let config = AppConfig {
            log_level: "loud".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Info);
    }
}
