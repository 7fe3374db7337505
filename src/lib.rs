//! rdfcheck
//!
//! Core of a data-quality validation toolkit for RDF knowledge graphs.
//! Graphs are checked against schema-derived test queries; this crate owns
//! the two load-bearing layers underneath that process:
//!
//! - **Source resolution & caching**: turning an ontology identifier (or
//!   literal schema text) into a lazily-readable, possibly-cached byte
//!   source, with deterministic cache keys, cache/network/literal fallback
//!   chains and content-addressed identity for inline text.
//! - **Result annotation extraction**: pulling the fixed core record and an
//!   open-ended set of residual metadata out of the RDF description of a
//!   single test outcome.
//!
//! Query generation, test execution and report formatting live elsewhere;
//! this crate only hands them identities, bytes and structured results.
//!
//! # Example
//!
//! ```rust
//! use rdfcheck::rdf::RdfFormat;
//! use rdfcheck::sources::SchemaResolver;
//!
//! let resolver = SchemaResolver::new().unwrap();
//!
//! // Inline schema text gets a content-addressed identity: identical text
//! // always resolves to the identical identifier.
//! let source = resolver
//!     .resolve_from_text(
//!         "http://example.org/inline/",
//!         "@prefix ex: <http://example.org/> . ex:a ex:b ex:c .",
//!         RdfFormat::Turtle,
//!     )
//!     .unwrap();
//!
//! assert!(source.identifier().starts_with("http://example.org/inline/"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod rdf;
pub mod results;
pub mod sources;

// Re-export main types for convenience
pub use rdf::{
    auto_prefix, parse_model, Literal, Model, NamedNode, ParseError, Predicate, RdfFormat,
    Statement, Subject, Term,
};

pub use results::{
    AnnotationSet, CoreResult, CoreResultReader, ExtendedResult, ExtendedResultReader,
    ExtractionError, ExtractionResult, ResultReader, Severity,
};

pub use sources::{
    CacheWriteError, CatalogError, ConfigError, ConfigResult, Dereference, DereferenceConfig,
    HttpDereferencer, RetrievalError, RetrievalResult, SchemaCatalog, SchemaReader,
    SchemaResolver, SchemaSource, SchemaVariant, SourceConfig,
};
