//! Schema source resolution and caching
//!
//! Turns a requested ontology identifier (or literal schema text) into a
//! lazily-readable, possibly-cached byte source:
//! - Deterministic cache-key derivation
//! - Cache / network / literal fallback chains
//! - Content-addressed identity for inline text
//!
//! Resolution is synchronous and cheap; all I/O happens at first read.

mod cache;
mod config;
mod reader;
mod registry;
mod resolver;
mod schema;

pub use cache::{cache_path, write_atomic, CacheWriteError, CacheWriteResult};
pub use config::{ConfigError, ConfigResult, SourceConfig};
pub use reader::{
    Dereference, DereferenceConfig, HttpDereferencer, RetrievalError, RetrievalResult,
    SchemaReader,
};
pub use registry::{CatalogError, CatalogResult, SchemaCatalog};
pub use resolver::SchemaResolver;
pub use schema::{SchemaSource, SchemaVariant};
