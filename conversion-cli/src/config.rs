//! Configuration loading from the config file, CLI flags and environment.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use fastforex_client::DEFAULT_BASE_URL;

/// Contents of `config.json`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub fast_forex_api_key: Option<String>,
    pub api_url: Option<String>,
}

impl ConfigFile {
    /// Reads the file at `path`. A missing file yields `None`.
    pub fn read(path: &Path) -> anyhow::Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let parsed = serde_json::from_str(&raw)
                    .with_context(|| format!("invalid config file {}", path.display()))?;
                Ok(Some(parsed))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read config file {}", path.display()))
            }
        }
    }
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub output_dir: PathBuf,
}

impl Config {
    /// Loads the config file and applies flag/environment overrides.
    pub fn load(
        path: &Path,
        api_key: Option<String>,
        api_url: Option<String>,
        output_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let file = ConfigFile::read(path)?.unwrap_or_default();
        Self::merge(file, api_key, api_url, output_dir).with_context(|| {
            format!(
                "set fast_forex_api_key in {} or FAST_FOREX_API_KEY",
                path.display()
            )
        })
    }

    /// Flags and environment take precedence over the file.
    pub fn merge(
        file: ConfigFile,
        api_key: Option<String>,
        api_url: Option<String>,
        output_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let api_key = api_key
            .or(file.fast_forex_api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("FastForex API key is required"))?;

        let api_url = api_url
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            api_url,
            output_dir,
        })
    }
}
