use std::env;

use serde::{Deserialize, Serialize};

fn default_location() -> String {
    "dictionary.json".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Where the word -> definition mapping comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// `http(s)://` URL or a local file path
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl SourceConfig {
    pub fn new() -> Self {
        let location = env::var("LEXI_SOURCE").unwrap_or_else(|_| default_location());

        let timeout_seconds = env::var("LEXI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_timeout_seconds());

        Self {
            location,
            timeout_seconds,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.location.starts_with("http://") || self.location.starts_with("https://")
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
