//! Well-known schema catalog
//!
//! Maps short prefixes to the ontology identifiers a validation run most
//! commonly needs, so callers can resolve a source from a prefix alone.

use super::config::ConfigError;
use super::resolver::SchemaResolver;
use super::schema::SchemaSource;
use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;

/// Catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Invalid catalog entry
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Prefix → ontology identifier catalog
pub struct SchemaCatalog {
    entries: IndexMap<String, String>,
}

impl SchemaCatalog {
    /// Create a catalog seeded with common vocabularies
    pub fn new() -> Self {
        let mut catalog = Self::empty();

        catalog.register("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        catalog.register("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        catalog.register("xsd", "http://www.w3.org/2001/XMLSchema#");
        catalog.register("owl", "http://www.w3.org/2002/07/owl#");
        catalog.register("foaf", "http://xmlns.com/foaf/0.1/");
        catalog.register("dc", "http://purl.org/dc/elements/1.1/");
        catalog.register("dcterms", "http://purl.org/dc/terms/");
        catalog.register("skos", "http://www.w3.org/2004/02/skos/core#");
        catalog.register("prov", "http://www.w3.org/ns/prov#");

        catalog
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register a prefix
    pub fn register(&mut self, prefix: impl Into<String>, identifier: impl Into<String>) {
        self.entries.insert(prefix.into(), identifier.into());
    }

    /// Get the identifier for a prefix
    pub fn lookup(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(|s| s.as_str())
    }

    /// All registered prefixes, in registration order
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Resolve a catalogued prefix into a cache-first schema source
    pub fn resolve_known(
        &self,
        resolver: &SchemaResolver,
        base_folder: impl AsRef<Path>,
        prefix: &str,
    ) -> CatalogResult<SchemaSource> {
        let identifier = self
            .lookup(prefix)
            .ok_or_else(|| CatalogError::UnknownPrefix(prefix.to_string()))?;
        Ok(resolver.resolve_from_cache(base_folder, prefix, identifier)?)
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::new()
    }
}
