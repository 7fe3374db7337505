//! RDF support for the validation toolkit
//!
//! This module provides:
//! - RDF terms and statements (wrappers over oxrdf)
//! - An in-memory model with ordered statement enumeration
//! - Parsing of Turtle, N-Triples and RDF/XML documents
//! - Vocabulary constants for result records
//! - Deterministic prefix derivation from ontology identifiers

mod model;
mod namespace;
mod serialization;
mod types;
pub mod vocabulary;

pub use model::Model;
pub use namespace::auto_prefix;
pub use serialization::{parse_model, ParseError, ParseResult, RdfFormat};
pub use types::{
    BlankNode, Literal, NamedNode, Predicate, Statement, Subject, Term, TermError, TermResult,
};
