use std::collections::HashMap;

use lexi_types::{UiEvent, ViewModel};

use crate::error::LoadError;

/// Word -> raw definition text, exactly as fetched
pub type DictionaryMapping = HashMap<String, String>;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    DictionaryLoaded(DictionaryMapping),
    DictionaryFailed(LoadError),
    Render(ViewModel),
}
