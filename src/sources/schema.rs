//! Schema source entity
//!
//! A schema source names an ontology (via its config) and carries a lazy
//! reader for its serialized document. Logical identity (`identifier`) and
//! physical retrieval location (`schema_location`) are kept apart: resolving
//! one ontology from two mirrors still reports under a single identity.

use super::config::SourceConfig;
use super::reader::{RetrievalResult, SchemaReader};
use crate::rdf::{parse_model, Model, RdfFormat};
use bytes::Bytes;

/// Distinguishes a schema from one enriched with inferred statements.
///
/// Same attribute shape either way; the two are different artifacts for the
/// same logical ontology and cache under disjoint namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVariant {
    /// Schema as published
    Plain,
    /// Schema augmented with inferred statements
    Enriched,
}

impl SchemaVariant {
    /// Cache directory segment for this variant
    pub fn cache_segment(&self) -> &'static str {
        match self {
            SchemaVariant::Plain => "schema",
            SchemaVariant::Enriched => "enriched-schema",
        }
    }
}

/// An ontology reference plus a deferred means of reading its bytes
#[derive(Debug)]
pub struct SchemaSource {
    config: SourceConfig,
    variant: SchemaVariant,
    schema_location: String,
    format: RdfFormat,
    reader: SchemaReader,
}

impl SchemaSource {
    pub(crate) fn new(
        config: SourceConfig,
        variant: SchemaVariant,
        schema_location: impl Into<String>,
        format: RdfFormat,
        reader: SchemaReader,
    ) -> Self {
        Self {
            config,
            variant,
            schema_location: schema_location.into(),
            format,
            reader,
        }
    }

    /// The source configuration
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Short prefix for this ontology
    pub fn prefix(&self) -> &str {
        self.config.prefix()
    }

    /// Canonical identifier: the identity used in all downstream reporting
    pub fn identifier(&self) -> &str {
        self.config.identifier()
    }

    /// Physical retrieval location; defaults to the identifier but may
    /// point at a mirror
    pub fn schema_location(&self) -> &str {
        &self.schema_location
    }

    /// Plain or enriched
    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    /// Serialization format the document is expected in
    pub fn format(&self) -> RdfFormat {
        self.format
    }

    /// Read the serialized schema document. First call performs the bound
    /// I/O; the result is buffered per instance.
    pub async fn read(&self) -> RetrievalResult<Bytes> {
        self.reader.read().await
    }

    /// Read and parse the schema document into a model
    pub async fn read_model(&self) -> RetrievalResult<Model> {
        let bytes = self.read().await?;
        Ok(parse_model(&bytes, self.format)?)
    }
}

/// A clone shares identity and configuration but never the original's
/// buffered read state.
impl Clone for SchemaSource {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            variant: self.variant,
            schema_location: self.schema_location.clone(),
            format: self.format,
            reader: self.reader.fresh(),
        }
    }
}
