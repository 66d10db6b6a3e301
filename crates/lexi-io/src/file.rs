use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lexi_core::types::DictionaryMapping;
use lexi_core::{DictionarySource, LoadError};

use crate::error::SourceError;

/// Dictionary JSON read from the local filesystem
#[derive(Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn read(&self) -> Result<DictionaryMapping, SourceError> {
        let data = tokio::fs::read_to_string(&self.path).await?;
        crate::parse_mapping_json(&data)
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self) -> Result<DictionaryMapping, LoadError> {
        tracing::info!("Loading dictionary from file: {}", self.path.display());
        let mapping = self.read().await?;
        tracing::info!("Loaded {} words from file", mapping.len());
        Ok(mapping)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
