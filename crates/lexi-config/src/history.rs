use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_capacity() -> usize {
    20
}

/// `$XDG_DATA_HOME/lexi/store.json`, falling back to `~/.local/share`
fn default_path() -> PathBuf {
    let data_dir = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("lexi").join("store.json")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Key-value file holding the history record
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Maximum number of remembered words
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            capacity: default_capacity(),
        }
    }
}
