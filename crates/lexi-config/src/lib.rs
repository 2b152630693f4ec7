use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::history::HistoryConfig;
use self::log::LogConfig;
use self::render::RenderConfig;

pub mod api;
pub mod history;
pub mod log;
pub mod render;

pub use self::log::LogFormat;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub history: HistoryConfig,
    pub render: RenderConfig,
    pub log: LogConfig,
}

impl Config {
    /// Load a JSON profile (when given) and apply environment overrides on top
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os("LEXI_CONFIG").map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Config::default(),
        };
        config.apply_env(|key| env::var(key).ok());

        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Override fields from `LEXI_*` variables; unparseable values are ignored
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("LEXI_API_URL") {
            self.api.base_url = url;
        }

        if let Some(path) = var("LEXI_HISTORY_FILE") {
            self.history.path = PathBuf::from(path);
        }

        if let Some(capacity) = var("LEXI_HISTORY_CAPACITY").and_then(|v| v.parse().ok()) {
            self.history.capacity = capacity;
        }

        if let Some(format) = var("LEXI_LOG_FORMAT").and_then(|v| v.parse().ok()) {
            self.log.format = format;
        }
    }
}
