use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::search::SearchConfig;
use self::source::SourceConfig;
use self::view::ViewConfig;

pub mod search;
pub mod source;
pub mod view;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub view: ViewConfig,
    pub search: SearchConfig,

    /// Capacity of the front end -> event loop channel
    pub command_buffer: usize,
}

impl Config {
    pub fn new() -> Self {
        let command_buffer = env::var("LEXI_COMMAND_BUFFER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            source: SourceConfig::new(),
            view: ViewConfig::new(),
            search: SearchConfig::new(),

            command_buffer,
        }
    }

    /// Load a config profile stored as JSON, missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, std::io::Error> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(std::io::Error::from)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            view: ViewConfig::default(),
            search: SearchConfig::default(),
            command_buffer: 64,
        }
    }
}
