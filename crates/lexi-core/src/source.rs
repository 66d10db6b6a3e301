use crate::error::LoadError;
use crate::types::DictionaryMapping;

/// Somewhere a word -> definition mapping can be fetched from
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch the whole mapping once
    async fn fetch(&self) -> Result<DictionaryMapping, LoadError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}
