//! Source configuration value object
//!
//! Pairs a short prefix with the canonical ontology identifier. The
//! identifier is the logical identity used in all downstream reporting;
//! where the document is physically fetched from is tracked elsewhere.

use crate::rdf::auto_prefix;
use oxiri::Iri;
use thiserror::Error;

/// Source configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Blank prefix
    #[error("Blank prefix for identifier: {0}")]
    BlankPrefix(String),

    /// Blank identifier
    #[error("Blank identifier")]
    BlankIdentifier,

    /// Identifier is not an absolute IRI
    #[error("Invalid identifier {identifier}: {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    /// HTTP client could not be constructed from its settings
    #[error("HTTP client configuration: {0}")]
    HttpClient(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Immutable (prefix, identifier) pair naming an ontology
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceConfig {
    prefix: String,
    identifier: String,
}

impl SourceConfig {
    /// Create a config, validating both fields
    pub fn new(prefix: impl Into<String>, identifier: impl Into<String>) -> ConfigResult<Self> {
        let prefix = prefix.into();
        let identifier = identifier.into();

        if identifier.trim().is_empty() {
            return Err(ConfigError::BlankIdentifier);
        }
        Iri::parse(identifier.as_str()).map_err(|e| ConfigError::InvalidIdentifier {
            identifier: identifier.clone(),
            reason: e.to_string(),
        })?;
        if prefix.trim().is_empty() {
            return Err(ConfigError::BlankPrefix(identifier));
        }

        Ok(Self { prefix, identifier })
    }

    /// Create a config with the prefix derived from the identifier
    pub fn from_identifier(identifier: impl Into<String>) -> ConfigResult<Self> {
        let identifier = identifier.into();
        let prefix = auto_prefix(&identifier);
        Self::new(prefix, identifier)
    }

    /// Get the prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get the canonical identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = SourceConfig::new("foaf", "http://xmlns.com/foaf/0.1/").unwrap();
        assert_eq!(config.prefix(), "foaf");
        assert_eq!(config.identifier(), "http://xmlns.com/foaf/0.1/");
    }

    #[test]
    fn test_blank_prefix_rejected() {
        let result = SourceConfig::new("  ", "http://xmlns.com/foaf/0.1/");
        assert!(matches!(result, Err(ConfigError::BlankPrefix(_))));
    }

    #[test]
    fn test_blank_identifier_rejected() {
        assert!(matches!(
            SourceConfig::new("foaf", ""),
            Err(ConfigError::BlankIdentifier)
        ));
    }

    #[test]
    fn test_relative_identifier_rejected() {
        let result = SourceConfig::new("rel", "ontology/core");
        assert!(matches!(result, Err(ConfigError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_auto_derived_prefix() {
        let config = SourceConfig::from_identifier("http://dbpedia.org/ontology/").unwrap();
        assert_eq!(config.prefix(), "dbpediaorgontology");
    }
}
