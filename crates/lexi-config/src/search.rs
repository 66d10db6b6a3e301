use std::env;

use serde::{Deserialize, Serialize};

fn default_length_slack() -> usize {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Substring matches may be at most this many characters longer than the term
    #[serde(default = "default_length_slack")]
    pub length_slack: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        let length_slack = env::var("LEXI_LENGTH_SLACK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_length_slack());

        Self { length_slack }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            length_slack: default_length_slack(),
        }
    }
}
