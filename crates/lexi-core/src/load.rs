use lexi_types::LoadStatus;

use crate::error::LoadError;
use crate::types::DictionaryMapping;

/// Lifecycle of the one dictionary fetch
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Ready(DictionaryMapping),
    Failed(LoadError),
}

impl LoadState {
    /// Enter `Loading`. Returns false when a fetch is already running or done.
    pub fn begin(&mut self) -> bool {
        match self {
            LoadState::NotStarted | LoadState::Failed(_) => {
                *self = LoadState::Loading;
                true
            }
            LoadState::Loading | LoadState::Ready(_) => false,
        }
    }

    /// Record the fetch outcome. Ignored unless a fetch is in flight.
    pub fn finish(&mut self, result: Result<DictionaryMapping, LoadError>) -> bool {
        if !matches!(self, LoadState::Loading) {
            return false;
        }

        *self = match result {
            Ok(mapping) => LoadState::Ready(mapping),
            Err(e) => LoadState::Failed(e),
        };
        true
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::NotStarted | LoadState::Loading => LoadStatus::Loading,
            LoadState::Ready(_) => LoadStatus::Ready,
            LoadState::Failed(e) => LoadStatus::Failed(e.to_string()),
        }
    }
}
