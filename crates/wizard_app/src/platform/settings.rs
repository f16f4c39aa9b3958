//! User settings stored as RON next to the binary's working directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wizard_engine::{EngineConfig, TransportSettings};

pub const DEFAULT_SETTINGS_FILE: &str = "wizard_settings.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub output_dir: PathBuf,
    pub connect_timeout_secs: u64,
    /// Unset means a generation request may take as long as the service needs.
    pub request_timeout_secs: Option<u64>,
    pub log_to_file: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let transport = TransportSettings::default();
        Self {
            endpoint: transport.endpoint,
            output_dir: PathBuf::from("output"),
            connect_timeout_secs: transport.connect_timeout.as_secs(),
            request_timeout_secs: transport.request_timeout.map(|t| t.as_secs()),
            log_to_file: true,
        }
    }
}

impl Settings {
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default_with_output(self.output_dir.clone());
        config.transport = TransportSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..TransportSettings::default()
        };
        config
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Reads settings from `path`. A missing file yields the defaults.
pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    ron::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// First CLI argument, else [`DEFAULT_SETTINGS_FILE`].
pub fn settings_path(mut args: impl Iterator<Item = String>) -> PathBuf {
    args.nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}
