//! RDF serialization formats and parsing
//!
//! Supports:
//! - Turtle (TTL)
//! - N-Triples (NT)
//! - RDF/XML
//!
//! JSON-LD is declared for format negotiation but not parseable here.

use super::model::Model;
use super::types::{BlankNode, Literal, NamedNode, Predicate, Statement, Subject, Term};
use rio_api::model as rio;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleError, TurtleParser};
use rio_xml::{RdfXmlError, RdfXmlParser};
use std::io::Cursor;
use thiserror::Error;

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
    /// RDF/XML format (.rdf)
    RdfXml,
    /// JSON-LD format (.jsonld)
    JsonLd,
}

impl RdfFormat {
    /// Preferred media type for content negotiation
    pub fn media_type(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::NTriples => "application/n-triples",
            RdfFormat::RdfXml => "application/rdf+xml",
            RdfFormat::JsonLd => "application/ld+json",
        }
    }

    /// Canonical file extension
    pub fn file_extension(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
            RdfFormat::RdfXml => "rdf",
            RdfFormat::JsonLd => "jsonld",
        }
    }

    /// Look a format up by common name or extension
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Some(RdfFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Some(RdfFormat::NTriples),
            "rdfxml" | "rdf/xml" | "rdf" | "xml" => Some(RdfFormat::RdfXml),
            "jsonld" | "json-ld" => Some(RdfFormat::JsonLd),
            _ => None,
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// Syntax error in the document
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Unsupported format
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(RdfFormat),
}

pub type ParseResult<T> = Result<T, ParseError>;

impl From<TurtleError> for ParseError {
    fn from(e: TurtleError) -> Self {
        ParseError::Syntax(e.to_string())
    }
}

impl From<RdfXmlError> for ParseError {
    fn from(e: RdfXmlError) -> Self {
        ParseError::Syntax(e.to_string())
    }
}

/// Parse a serialized RDF document into a model
pub fn parse_model(data: &[u8], format: RdfFormat) -> ParseResult<Model> {
    let mut model = Model::new();

    match format {
        RdfFormat::Turtle => {
            TurtleParser::new(Cursor::new(data), None).parse_all::<ParseError>(&mut |triple| {
                model.insert(convert_triple(&triple)?);
                Ok(())
            })?;
        }
        RdfFormat::NTriples => {
            NTriplesParser::new(Cursor::new(data)).parse_all::<ParseError>(&mut |triple| {
                model.insert(convert_triple(&triple)?);
                Ok(())
            })?;
        }
        RdfFormat::RdfXml => {
            RdfXmlParser::new(Cursor::new(data), None).parse_all::<ParseError>(&mut |triple| {
                model.insert(convert_triple(&triple)?);
                Ok(())
            })?;
        }
        RdfFormat::JsonLd => return Err(ParseError::UnsupportedFormat(format)),
    }

    Ok(model)
}

fn convert_triple(triple: &rio::Triple<'_>) -> ParseResult<Statement> {
    let subject = convert_subject(&triple.subject)?;
    let predicate: Predicate = named(triple.predicate)?.into();
    let object = convert_term(&triple.object)?;
    Ok(Statement {
        subject,
        predicate,
        object,
    })
}

fn convert_subject(subject: &rio::Subject<'_>) -> ParseResult<Subject> {
    match subject {
        rio::Subject::NamedNode(n) => Ok(named(*n)?.into()),
        rio::Subject::BlankNode(b) => Ok(blank(*b)?.into()),
        rio::Subject::Triple(_) => Err(ParseError::Syntax(
            "RDF-star subjects not supported".to_string(),
        )),
    }
}

fn convert_term(term: &rio::Term<'_>) -> ParseResult<Term> {
    match term {
        rio::Term::NamedNode(n) => Ok(named(*n)?.into()),
        rio::Term::BlankNode(b) => Ok(blank(*b)?.into()),
        rio::Term::Literal(l) => Ok(convert_literal(l)?.into()),
        rio::Term::Triple(_) => Err(ParseError::Syntax(
            "RDF-star terms not supported".to_string(),
        )),
    }
}

fn convert_literal(literal: &rio::Literal<'_>) -> ParseResult<Literal> {
    match literal {
        rio::Literal::Simple { value } => Ok(Literal::simple(*value)),
        rio::Literal::LanguageTaggedString { value, language } => {
            Literal::language_tagged(*value, *language)
                .map_err(|e| ParseError::Syntax(e.to_string()))
        }
        rio::Literal::Typed { value, datatype } => Ok(Literal::typed(*value, named(*datatype)?)),
    }
}

fn named(node: rio::NamedNode<'_>) -> ParseResult<NamedNode> {
    NamedNode::new(node.iri).map_err(|e| ParseError::Syntax(e.to_string()))
}

fn blank(node: rio::BlankNode<'_>) -> ParseResult<BlankNode> {
    BlankNode::from_identifier(node.id).map_err(|e| ParseError::Syntax(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURTLE: &str = r#"
        @prefix ex: <http://example.org/> .
        @prefix foaf: <http://xmlns.com/foaf/0.1/> .

        ex:alice foaf:name "Alice" ;
                 foaf:knows ex:bob .
    "#;

    #[test]
    fn test_parse_turtle() {
        let model = parse_model(TURTLE.as_bytes(), RdfFormat::Turtle).unwrap();
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_parse_ntriples() {
        let nt = "<http://example.org/s> <http://example.org/p> \"v\" .\n";
        let model = parse_model(nt.as_bytes(), RdfFormat::NTriples).unwrap();
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_parse_malformed_turtle() {
        let result = parse_model(b"this is not turtle at all", RdfFormat::Turtle);
        assert!(matches!(result, Err(ParseError::Syntax(_))));
    }

    #[test]
    fn test_jsonld_unsupported() {
        let result = parse_model(b"{}", RdfFormat::JsonLd);
        assert!(matches!(
            result,
            Err(ParseError::UnsupportedFormat(RdfFormat::JsonLd))
        ));
    }

    #[test]
    fn test_format_lookup() {
        assert_eq!(RdfFormat::from_name("ttl"), Some(RdfFormat::Turtle));
        assert_eq!(RdfFormat::from_name("Turtle"), Some(RdfFormat::Turtle));
        assert_eq!(RdfFormat::from_name("nt"), Some(RdfFormat::NTriples));
        assert_eq!(RdfFormat::from_name("unknown"), None);
    }

    #[test]
    fn test_media_types() {
        assert_eq!(RdfFormat::Turtle.media_type(), "text/turtle");
        assert_eq!(RdfFormat::RdfXml.media_type(), "application/rdf+xml");
    }
}
