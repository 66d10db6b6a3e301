mod error;
mod file;
mod http;

pub use error::SourceError;
pub use file::FileSource;
pub use http::HttpSource;

use lexi_config::source::SourceConfig;
use lexi_core::DictionarySource;
use lexi_core::types::DictionaryMapping;

/// Pick the source matching the configured location
pub fn source_from_config(config: &SourceConfig) -> Result<Box<dyn DictionarySource>, SourceError> {
    if config.is_remote() {
        Ok(Box::new(HttpSource::new(config.location.clone(), config.timeout_seconds)?))
    } else {
        Ok(Box::new(FileSource::new(&config.location)))
    }
}

/// Parse the flat `{ "word": "definition text", ... }` JSON object
pub fn parse_mapping_json(data: &str) -> Result<DictionaryMapping, SourceError> {
    Ok(serde_json::from_str(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_object_parses() {
        let mapping = parse_mapping_json(r#"{"ant": "1. a small insect", "bee": "1. a flying insect 2. to exist"}"#).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["ant"], "1. a small insect");
    }

    #[test]
    fn non_string_values_are_rejected() {
        let err = parse_mapping_json(r#"{"ant": 1}"#).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));

        let err = parse_mapping_json("[]").unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn location_picks_source_kind() {
        let mut config = SourceConfig::default();
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "file dictionary.json");

        config.location = "http://localhost:9/dictionary.json".into();
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "GET http://localhost:9/dictionary.json");
    }
}
