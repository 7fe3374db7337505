//! Result annotation extraction
//!
//! Splits the RDF description of one test outcome into the five mandatory
//! core fields plus a residual bag of arbitrary metadata. Statements already
//! represented by core fields are dropped, as are the structural type
//! markers; everything else survives into the annotation set.

use super::annotations::AnnotationSet;
use super::severity::Severity;
use crate::rdf::vocabulary::{check, dcterms, prov, rlog};
use crate::rdf::{Model, NamedNode, Predicate, Subject, Term};
use chrono::{DateTime, NaiveDateTime, Utc};
use oxrdf::vocab::rdf;
use thiserror::Error;

/// Extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The subject has no statements in the model
    #[error("Subject {0} is absent from the model")]
    MissingSubject(String),

    /// A mandatory field is missing
    #[error("Missing {field} on {subject}")]
    MissingField {
        field: &'static str,
        subject: String,
    },

    /// A mandatory field has an unusable value
    #[error("Invalid {field} on {subject}: {reason}")]
    InvalidField {
        field: &'static str,
        subject: String,
        reason: String,
    },
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Reads one entity out of an RDF description
pub trait ResultReader {
    type Output;

    fn read(&self, model: &Model, subject: &Subject) -> ExtractionResult<Self::Output>;
}

/// The five mandatory fields of a test outcome
#[derive(Debug, Clone)]
pub struct CoreResult {
    /// Violated test case
    pub test_case: NamedNode,
    /// Severity level
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// When the result was produced
    pub timestamp: DateTime<Utc>,
    /// Resource that failed the test
    pub failing_resource: Term,
}

/// Reads the mandatory core fields from a result description
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreResultReader;

impl CoreResultReader {
    pub fn new() -> Self {
        Self
    }
}

impl ResultReader for CoreResultReader {
    type Output = CoreResult;

    fn read(&self, model: &Model, subject: &Subject) -> ExtractionResult<CoreResult> {
        let test_case = require_named_node(model, subject, check::TEST_CASE.into(), "test case")?;
        let level = require_named_node(model, subject, rlog::LEVEL.into(), "severity")?;
        let severity =
            Severity::from_iri(level.as_str()).map_err(|e| ExtractionError::InvalidField {
                field: "severity",
                subject: subject.to_string(),
                reason: e.to_string(),
            })?;
        let message = require_literal(model, subject, rlog::MESSAGE.into(), "message")?;
        let date = require_literal(model, subject, dcterms::DATE.into(), "timestamp")?;
        let timestamp = parse_timestamp(&date).map_err(|reason| ExtractionError::InvalidField {
            field: "timestamp",
            subject: subject.to_string(),
            reason,
        })?;
        let failing_resource = require_object(model, subject, rlog::RESOURCE.into(), "failing resource")?;

        Ok(CoreResult {
            test_case,
            severity,
            message,
            timestamp,
            failing_resource,
        })
    }
}

/// A validation outcome: the mandatory fields plus residual annotations
#[derive(Debug, Clone)]
pub struct ExtendedResult {
    test_case: NamedNode,
    severity: Severity,
    message: String,
    timestamp: DateTime<Utc>,
    failing_resource: Term,
    annotations: AnnotationSet,
}

impl ExtendedResult {
    /// Violated test case
    pub fn test_case(&self) -> &NamedNode {
        &self.test_case
    }

    /// Severity level
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the result was produced
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Resource that failed the test
    pub fn failing_resource(&self) -> &Term {
        &self.failing_resource
    }

    /// Residual annotations beyond the core fields
    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }
}

/// Reads an extended result: core fields via a base reader, residual
/// metadata via statement filtering
#[derive(Debug, Clone, Default)]
pub struct ExtendedResultReader<R = CoreResultReader> {
    base: R,
}

impl ExtendedResultReader<CoreResultReader> {
    pub fn new() -> Self {
        Self {
            base: CoreResultReader::new(),
        }
    }
}

impl<R> ExtendedResultReader<R> {
    /// Use a custom base reader for the core fields
    pub fn with_base(base: R) -> Self {
        Self { base }
    }
}

impl<R> ResultReader for ExtendedResultReader<R>
where
    R: ResultReader<Output = CoreResult>,
{
    type Output = ExtendedResult;

    fn read(&self, model: &Model, subject: &Subject) -> ExtractionResult<ExtendedResult> {
        if model.list_properties(subject).next().is_none() {
            return Err(ExtractionError::MissingSubject(subject.to_string()));
        }

        let core = self.base.read(model, subject)?;

        let reserved_predicates: [Predicate; 6] = [
            rlog::LEVEL.into(),
            rlog::RESOURCE.into(),
            rlog::MESSAGE.into(),
            prov::WAS_GENERATED_BY.into(),
            dcterms::DATE.into(),
            check::TEST_CASE.into(),
        ];
        let reserved_types: [NamedNode; 3] = [
            check::LOG_TEST_CASE_RESULT.into(),
            check::TEST_CASE_RESULT.into(),
            rlog::ENTRY.into(),
        ];
        let rdf_type: Predicate = rdf::TYPE.into();

        let annotations = model
            .list_properties(subject)
            .filter(|(predicate, _)| !reserved_predicates.contains(*predicate))
            .filter(|(predicate, object)| {
                // Reserved classes are filtered only when asserted via rdf:type
                !(**predicate == rdf_type
                    && object
                        .as_named_node()
                        .is_some_and(|n| reserved_types.contains(n)))
            })
            .map(|(predicate, object)| (predicate.clone(), object.clone()))
            .fold(AnnotationSet::new(), |mut set, (predicate, object)| {
                set.insert(predicate, object);
                set
            });

        Ok(ExtendedResult {
            test_case: core.test_case,
            severity: core.severity,
            message: core.message,
            timestamp: core.timestamp,
            failing_resource: core.failing_resource,
            annotations,
        })
    }
}

fn require_object(
    model: &Model,
    subject: &Subject,
    predicate: Predicate,
    field: &'static str,
) -> ExtractionResult<Term> {
    model
        .first_object(subject, &predicate)
        .cloned()
        .ok_or_else(|| ExtractionError::MissingField {
            field,
            subject: subject.to_string(),
        })
}

fn require_named_node(
    model: &Model,
    subject: &Subject,
    predicate: Predicate,
    field: &'static str,
) -> ExtractionResult<NamedNode> {
    let object = require_object(model, subject, predicate, field)?;
    object
        .as_named_node()
        .cloned()
        .ok_or_else(|| ExtractionError::InvalidField {
            field,
            subject: subject.to_string(),
            reason: "expected an IRI".to_string(),
        })
}

fn require_literal(
    model: &Model,
    subject: &Subject,
    predicate: Predicate,
    field: &'static str,
) -> ExtractionResult<String> {
    let object = require_object(model, subject, predicate, field)?;
    object
        .as_literal()
        .map(|l| l.value().to_string())
        .ok_or_else(|| ExtractionError::InvalidField {
            field,
            subject: subject.to_string(),
            reason: "expected a literal".to_string(),
        })
}

/// Parse an xsd:dateTime lexical value, with or without an offset
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, Statement};

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    fn result_subject() -> Subject {
        node("http://example.org/results/1").into()
    }

    /// A complete result description with extra metadata
    fn result_model() -> Model {
        let subject = node("http://example.org/results/1");
        let mut model = Model::new();

        model.insert(Statement::new(
            subject.clone(),
            Predicate::from(rdf::TYPE),
            NamedNode::from(check::TEST_CASE_RESULT),
        ));
        model.insert(Statement::new(
            subject.clone(),
            Predicate::from(check::TEST_CASE),
            node("http://example.org/tests/range-check"),
        ));
        model.insert(Statement::new(
            subject.clone(),
            Predicate::from(rlog::LEVEL),
            NamedNode::from(rlog::ERROR),
        ));
        model.insert(Statement::new(
            subject.clone(),
            Predicate::from(rlog::MESSAGE),
            Literal::simple("Value out of range"),
        ));
        model.insert(Statement::new(
            subject.clone(),
            Predicate::from(dcterms::DATE),
            Literal::typed(
                "2024-05-01T10:30:00Z",
                node("http://www.w3.org/2001/XMLSchema#dateTime"),
            ),
        ));
        model.insert(Statement::new(
            subject.clone(),
            Predicate::from(rlog::RESOURCE),
            node("http://example.org/data/item42"),
        ));
        model
    }

    #[test]
    fn test_core_fields() {
        let model = result_model();
        let core = CoreResultReader::new()
            .read(&model, &result_subject())
            .unwrap();

        assert_eq!(core.severity, Severity::Error);
        assert_eq!(core.message, "Value out of range");
        assert_eq!(
            core.test_case.as_str(),
            "http://example.org/tests/range-check"
        );
        assert_eq!(core.timestamp.to_rfc3339(), "2024-05-01T10:30:00+00:00");
    }

    #[test]
    fn test_missing_field() {
        let subject = node("http://example.org/results/2");
        let mut model = Model::new();
        model.insert(Statement::new(
            subject.clone(),
            Predicate::from(rlog::LEVEL),
            NamedNode::from(rlog::WARN),
        ));

        let result = CoreResultReader::new().read(&model, &subject.into());
        assert!(matches!(result, Err(ExtractionError::MissingField { .. })));
    }

    #[test]
    fn test_absent_subject_fails_fast() {
        let model = result_model();
        let absent: Subject = node("http://example.org/results/none").into();

        let result = ExtendedResultReader::new().read(&model, &absent);
        assert!(matches!(result, Err(ExtractionError::MissingSubject(_))));
    }

    #[test]
    fn test_annotations_exclude_reserved() {
        let mut model = result_model();
        let subject = node("http://example.org/results/1");
        model.insert(Statement::new(
            subject.clone(),
            Predicate::new("http://example.org/tag1").unwrap(),
            Literal::simple("A"),
        ));
        model.insert(Statement::new(
            subject.clone(),
            Predicate::new("http://example.org/tag1").unwrap(),
            Literal::simple("B"),
        ));
        model.insert(Statement::new(
            subject.clone(),
            Predicate::new("http://example.org/tag2").unwrap(),
            Literal::simple("C"),
        ));

        let extended = ExtendedResultReader::new()
            .read(&model, &result_subject())
            .unwrap();
        let annotations = extended.annotations();

        assert_eq!(annotations.len(), 2);
        let tag1 = annotations
            .values(&Predicate::new("http://example.org/tag1").unwrap())
            .unwrap();
        assert_eq!(tag1.len(), 2);
        let tag2 = annotations
            .values(&Predicate::new("http://example.org/tag2").unwrap())
            .unwrap();
        assert_eq!(tag2.len(), 1);

        // Core fields and the reserved type assertion never leak through
        assert!(annotations.values(&Predicate::from(rlog::LEVEL)).is_none());
        assert!(annotations.values(&Predicate::from(rdf::TYPE)).is_none());
    }

    #[test]
    fn test_reserved_value_under_other_predicate_kept() {
        let mut model = result_model();
        let subject = node("http://example.org/results/1");
        // The reserved class IRI appears as an ordinary object value
        model.insert(Statement::new(
            subject.clone(),
            Predicate::new("http://example.org/relatedTo").unwrap(),
            NamedNode::from(check::TEST_CASE_RESULT),
        ));

        let extended = ExtendedResultReader::new()
            .read(&model, &result_subject())
            .unwrap();
        let related = extended
            .annotations()
            .values(&Predicate::new("http://example.org/relatedTo").unwrap());
        assert!(related.is_some());
    }

    #[test]
    fn test_timestamp_without_offset() {
        assert!(parse_timestamp("2024-05-01T10:30:00").is_ok());
        assert!(parse_timestamp("2024-05-01T10:30:00.250").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }
}
