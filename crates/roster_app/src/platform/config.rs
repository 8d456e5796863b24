use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use roster_core::{Cursor, SessionConfig, UnknownItemPolicy};
use roster_engine::FetchSettings;
use serde::Deserialize;

use super::logging::LogDestination;

pub const DEFAULT_INITIAL_URL: &str = "https://pokeapi.co/api/v2/pokemon?limit=10";
/// Height of the list container; content must fill it before scrolling can load more.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 576;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownItems {
    #[default]
    Reject,
    Synthesize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let defaults = FetchSettings::default();
        Self {
            connect_timeout_ms: defaults.connect_timeout.as_millis() as u64,
            request_timeout_ms: defaults.request_timeout.as_millis() as u64,
            redirect_limit: defaults.redirect_limit,
            max_bytes: defaults.max_bytes,
        }
    }
}

/// Unknown keys are rejected so a misspelled setting fails loudly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub initial_cursor: Option<String>,
    pub min_content_height: u32,
    pub viewport_height: u32,
    pub row_height: u32,
    pub loader_height: u32,
    pub unknown_item_policy: UnknownItems,
    pub fetch: FetchConfig,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_cursor: Some(DEFAULT_INITIAL_URL.to_string()),
            min_content_height: DEFAULT_VIEWPORT_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            row_height: 53,
            loader_height: 80,
            unknown_item_policy: UnknownItems::default(),
            fetch: FetchConfig::default(),
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            initial_cursor: self.initial_cursor.clone().map(Cursor::from),
            min_content_height: self.min_content_height,
            unknown_item_policy: match self.unknown_item_policy {
                UnknownItems::Reject => UnknownItemPolicy::Reject,
                UnknownItems::Synthesize => UnknownItemPolicy::Synthesize,
            },
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_millis(self.fetch.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.fetch.request_timeout_ms),
            redirect_limit: self.fetch.redirect_limit,
            max_bytes: self.fetch.max_bytes,
            ..FetchSettings::default()
        }
    }
}

/// Load the config at `path`. Returns `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
