use std::time::Duration;

use async_trait::async_trait;
use lexi_core::types::DictionaryMapping;
use lexi_core::{DictionarySource, LoadError};

use crate::error::SourceError;

/// Plain GET of a JSON dictionary, no parameters, headers or auth
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: String, timeout_seconds: u64) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self { client, url })
    }

    async fn get(&self) -> Result<DictionaryMapping, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let body = response.text().await?;
        crate::parse_mapping_json(&body)
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self) -> Result<DictionaryMapping, LoadError> {
        tracing::info!("Fetching dictionary from {}", self.url);
        let mapping = self.get().await?;
        tracing::info!("Fetched {} words", mapping.len());
        Ok(mapping)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Port 9 (discard) is closed on any sane test machine
        let source = HttpSource::new("http://127.0.0.1:9/dictionary.json".to_string(), 2).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Network(_)), "unexpected error: {err:?}");
    }
}
