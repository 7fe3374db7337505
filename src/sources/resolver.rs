//! Schema source resolution
//!
//! Produces schema sources via the cheapest viable retrieval path:
//! cache-first, dereference-only, enriched-cache or literal text.
//! Resolution itself performs no I/O; everything is deferred to the first
//! read of the returned source.

use super::cache::cache_path;
use super::config::{ConfigResult, SourceConfig};
use super::reader::{Dereference, DereferenceConfig, HttpDereferencer, SchemaReader};
use super::schema::{SchemaSource, SchemaVariant};
use crate::rdf::RdfFormat;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Resolves ontology identifiers (or literal text) into lazy schema sources
pub struct SchemaResolver {
    fetcher: Arc<dyn Dereference>,
}

impl SchemaResolver {
    /// Create a resolver backed by the default HTTP dereferencer
    pub fn new() -> ConfigResult<Self> {
        Self::with_config(&DereferenceConfig::default())
    }

    /// Create a resolver with explicit HTTP settings
    pub fn with_config(config: &DereferenceConfig) -> ConfigResult<Self> {
        let fetcher = HttpDereferencer::new(config)?;
        Ok(Self::with_fetcher(Arc::new(fetcher)))
    }

    /// Create a resolver with a custom fetch collaborator
    pub fn with_fetcher(fetcher: Arc<dyn Dereference>) -> Self {
        Self { fetcher }
    }

    /// Cache-first resolution: prefer the cache file, fall back to
    /// dereferencing the identifier, persisting fetched bytes to the cache.
    pub fn resolve_from_cache(
        &self,
        base_folder: impl AsRef<Path>,
        prefix: &str,
        identifier: &str,
    ) -> ConfigResult<SchemaSource> {
        self.resolve_from_cache_at(base_folder, prefix, identifier, identifier)
    }

    /// Cache-first resolution fetching from an explicit location. The
    /// identifier stays the reporting identity regardless of where the
    /// document is physically retrieved from.
    pub fn resolve_from_cache_at(
        &self,
        base_folder: impl AsRef<Path>,
        prefix: &str,
        identifier: &str,
        schema_location: &str,
    ) -> ConfigResult<SchemaSource> {
        let config = SourceConfig::new(prefix, identifier)?;
        let path = cache_path(base_folder, SchemaVariant::Plain, prefix, identifier);
        debug!("Resolved {} with cache path {}", identifier, path.display());

        let reader =
            SchemaReader::file_or_dereference(path, schema_location, self.fetcher.clone());
        Ok(SchemaSource::new(
            config,
            SchemaVariant::Plain,
            schema_location,
            RdfFormat::Turtle,
            reader,
        ))
    }

    /// Network-only resolution, bypassing the cache. Used when caching
    /// would waste effort, e.g. one-shot inline checks.
    pub fn resolve_by_dereference(
        &self,
        prefix: &str,
        identifier: &str,
    ) -> ConfigResult<SchemaSource> {
        self.resolve_by_dereference_at(prefix, identifier, identifier)
    }

    /// Network-only resolution fetching from an explicit location
    pub fn resolve_by_dereference_at(
        &self,
        prefix: &str,
        identifier: &str,
        schema_location: &str,
    ) -> ConfigResult<SchemaSource> {
        let config = SourceConfig::new(prefix, identifier)?;
        let reader = SchemaReader::dereference(schema_location, self.fetcher.clone());
        Ok(SchemaSource::new(
            config,
            SchemaVariant::Plain,
            schema_location,
            RdfFormat::Turtle,
            reader,
        ))
    }

    /// Cache-first resolution of the enriched variant. Same mechanics as
    /// [`resolve_from_cache`](Self::resolve_from_cache) but under the
    /// enriched cache namespace.
    pub fn resolve_enriched_from_cache(
        &self,
        base_folder: impl AsRef<Path>,
        prefix: &str,
        identifier: &str,
    ) -> ConfigResult<SchemaSource> {
        let config = SourceConfig::new(prefix, identifier)?;
        let path = cache_path(base_folder, SchemaVariant::Enriched, prefix, identifier);
        debug!(
            "Resolved enriched {} with cache path {}",
            identifier,
            path.display()
        );

        let reader = SchemaReader::file_or_dereference(path, identifier, self.fetcher.clone());
        Ok(SchemaSource::new(
            config,
            SchemaVariant::Enriched,
            identifier,
            RdfFormat::Turtle,
            reader,
        ))
    }

    /// Resolve literal schema text. The identifier is content-addressed:
    /// `namespace` plus the text digest, so identical text always yields an
    /// identical identity and needs no caching.
    pub fn resolve_from_text(
        &self,
        namespace: &str,
        text: &str,
        format: RdfFormat,
    ) -> ConfigResult<SchemaSource> {
        let identifier = format!("{}{}", namespace, content_digest(text));
        let config = SourceConfig::from_identifier(identifier.clone())?;

        let reader = SchemaReader::from_text(text);
        Ok(SchemaSource::new(
            config,
            SchemaVariant::Plain,
            identifier,
            format,
            reader,
        ))
    }
}

/// Full sha-256 hex of the literal text
fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::config::ConfigError;
    use crate::sources::reader::RetrievalResult;
    use async_trait::async_trait;
    use bytes::Bytes;

    struct NoFetch;

    #[async_trait]
    impl Dereference for NoFetch {
        async fn fetch(&self, location: &str) -> RetrievalResult<Bytes> {
            panic!("unexpected fetch of {}", location);
        }
    }

    fn resolver() -> SchemaResolver {
        SchemaResolver::with_fetcher(Arc::new(NoFetch))
    }

    #[test]
    fn test_resolution_is_validated_eagerly() {
        let result = resolver().resolve_by_dereference("", "http://example.org/");
        assert!(matches!(result, Err(ConfigError::BlankPrefix(_))));

        let result = resolver().resolve_from_cache("/cache", "ex", "no iri");
        assert!(matches!(result, Err(ConfigError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_resolution_performs_no_io() {
        // NoFetch panics on any fetch; pure resolution must never trigger it
        let source = resolver()
            .resolve_from_cache("/cache", "dbo", "http://dbpedia.org/ontology/")
            .unwrap();
        assert_eq!(source.identifier(), "http://dbpedia.org/ontology/");
    }

    #[test]
    fn test_text_resolution_content_identity() {
        let r = resolver();
        let a = r
            .resolve_from_text("http://example.org/inline/", "abc", RdfFormat::Turtle)
            .unwrap();
        let b = r
            .resolve_from_text("http://example.org/inline/", "abc", RdfFormat::Turtle)
            .unwrap();
        assert_eq!(a.identifier(), b.identifier());
        assert_eq!(a.prefix(), b.prefix());

        let c = r
            .resolve_from_text("http://example.org/inline/", "abd", RdfFormat::Turtle)
            .unwrap();
        assert_ne!(a.identifier(), c.identifier());
    }

    #[test]
    fn test_location_defaults_to_identifier() {
        let source = resolver()
            .resolve_by_dereference("foaf", "http://xmlns.com/foaf/0.1/")
            .unwrap();
        assert_eq!(source.schema_location(), source.identifier());
    }

    #[test]
    fn test_explicit_location_kept_apart() {
        let source = resolver()
            .resolve_from_cache_at(
                "/cache",
                "foaf",
                "http://xmlns.com/foaf/0.1/",
                "http://mirror.example.org/foaf.ttl",
            )
            .unwrap();
        assert_eq!(source.identifier(), "http://xmlns.com/foaf/0.1/");
        assert_eq!(source.schema_location(), "http://mirror.example.org/foaf.ttl");
    }
}
