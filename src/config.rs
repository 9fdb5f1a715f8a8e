use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:7373/api";
pub const DEFAULT_TIMEOUT_SEC: u64 = 30;

/// Optional TOML config. Every field falls back to a default so an absent
/// or empty file is fine.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub backend_url: Option<String>,
    pub timeout_sec: Option<u64>,
    pub sort: Option<SortConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct SortConfig {
    /// Extra sort-name aliases, merged over the built-in table.
    pub aliases: HashMap<String, String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    pub fn timeout_sec(&self) -> u64 {
        self.timeout_sec.unwrap_or(DEFAULT_TIMEOUT_SEC)
    }

    pub fn sort_aliases(&self) -> HashMap<String, String> {
        self.sort.clone().unwrap_or_default().aliases
    }
}
