use std::sync::Arc;

use lexi_config::Config;
use lexi_core::DictionarySource;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub source: Arc<dyn DictionarySource>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn DictionarySource>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            source,
        }
    }
}
