use lexi_core::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SourceError> for LoadError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::Network(e) => LoadError::Network(e.to_string()),
            SourceError::Status(status) => LoadError::Status(status.as_u16()),
            SourceError::Io(e) => LoadError::Io(e.to_string()),
            SourceError::Json(e) => LoadError::InvalidFormat(e.to_string()),
        }
    }
}
