use std::env;

use serde::{Deserialize, Serialize};

fn default_page_size() -> usize {
    90
}

fn default_initial_letter() -> char {
    'a'
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// A page closes once it holds more than this many entries
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_initial_letter")]
    pub initial_letter: char,
}

impl ViewConfig {
    pub fn new() -> Self {
        let page_size = env::var("LEXI_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_page_size());

        let initial_letter = env::var("LEXI_INITIAL_LETTER")
            .ok()
            .and_then(|v| v.chars().next())
            .unwrap_or(default_initial_letter());

        Self {
            page_size,
            initial_letter,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            initial_letter: default_initial_letter(),
        }
    }
}
