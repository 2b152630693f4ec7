use serde::{Deserialize, Serialize};

fn default_max_entries() -> usize {
    2
}

fn default_max_definitions() -> usize {
    4
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    /// Entries shown per search, the rest are dropped
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Definitions shown per meaning
    #[serde(default = "default_max_definitions")]
    pub max_definitions: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            max_definitions: default_max_definitions(),
        }
    }
}
