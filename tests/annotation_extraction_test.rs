//! End-to-end tests for result annotation extraction

use rdfcheck::{
    parse_model, ExtendedResultReader, NamedNode, Predicate, RdfFormat, ResultReader, Severity,
    Subject,
};

const RESULT_DOC: &str = r#"
@prefix rlog:    <http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#> .
@prefix check:   <https://w3id.org/rdfcheck/ns/core#> .
@prefix dcterms: <http://purl.org/dc/terms/> .
@prefix prov:    <http://www.w3.org/ns/prov#> .
@prefix xsd:     <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:      <http://example.org/> .

ex:result1 a check:TestCaseResult, check:LogTestCaseResult, rlog:Entry ;
    check:testCase ex:maxCardinalityTest ;
    rlog:level rlog:ERROR ;
    rlog:message "Too many values for a functional property" ;
    rlog:resource ex:item42 ;
    dcterms:date "2024-05-01T10:30:00Z"^^xsd:dateTime ;
    prov:wasGeneratedBy ex:run7 ;
    ex:tag "A", "B" ;
    ex:note ex:seeAlso .
"#;

fn subject() -> Subject {
    NamedNode::new("http://example.org/result1").unwrap().into()
}

#[test]
fn extracts_core_fields_from_a_parsed_result() {
    let model = parse_model(RESULT_DOC.as_bytes(), RdfFormat::Turtle).unwrap();
    let result = ExtendedResultReader::new().read(&model, &subject()).unwrap();

    assert_eq!(result.severity(), Severity::Error);
    assert_eq!(result.message(), "Too many values for a functional property");
    assert_eq!(
        result.test_case().as_str(),
        "http://example.org/maxCardinalityTest"
    );
    assert_eq!(
        result.failing_resource().as_named_node().unwrap().as_str(),
        "http://example.org/item42"
    );
    assert_eq!(result.timestamp().to_rfc3339(), "2024-05-01T10:30:00+00:00");
}

#[test]
fn residual_annotations_keep_duplicates_and_drop_reserved() {
    let model = parse_model(RESULT_DOC.as_bytes(), RdfFormat::Turtle).unwrap();
    let result = ExtendedResultReader::new().read(&model, &subject()).unwrap();
    let annotations = result.annotations();

    // Only the two non-reserved predicates survive
    assert_eq!(annotations.len(), 2);

    let tag = Predicate::new("http://example.org/tag").unwrap();
    let tag_values: Vec<String> = annotations
        .values(&tag)
        .unwrap()
        .iter()
        .map(|v| v.as_literal().unwrap().value().to_string())
        .collect();
    assert_eq!(tag_values.len(), 2);
    assert!(tag_values.contains(&"A".to_string()));
    assert!(tag_values.contains(&"B".to_string()));

    let note = Predicate::new("http://example.org/note").unwrap();
    assert_eq!(annotations.values(&note).unwrap().len(), 1);

    // Core fields, provenance and the reserved type markers are all gone
    for reserved in [
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#level",
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#message",
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#resource",
        "http://www.w3.org/ns/prov#wasGeneratedBy",
        "http://purl.org/dc/terms/date",
        "https://w3id.org/rdfcheck/ns/core#testCase",
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
    ] {
        assert!(
            annotations.values(&Predicate::new(reserved).unwrap()).is_none(),
            "reserved predicate {} leaked into annotations",
            reserved
        );
    }
}

#[test]
fn non_reserved_type_assertion_survives_as_annotation() {
    let doc = format!(
        "{}\nex:result2 a check:TestCaseResult, ex:CustomKind ;\n    check:testCase ex:t ;\n    rlog:level rlog:WARN ;\n    rlog:message \"m\" ;\n    rlog:resource ex:item1 ;\n    dcterms:date \"2024-05-01T10:30:00Z\"^^xsd:dateTime .\n",
        RESULT_DOC
    );
    let model = parse_model(doc.as_bytes(), RdfFormat::Turtle).unwrap();
    let subject: Subject = NamedNode::new("http://example.org/result2").unwrap().into();

    let result = ExtendedResultReader::new().read(&model, &subject).unwrap();
    let rdf_type =
        Predicate::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#type").unwrap();

    // The reserved class is dropped, the custom class is kept
    let types = result.annotations().values(&rdf_type).unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(
        types.iter().next().unwrap().as_named_node().unwrap().as_str(),
        "http://example.org/CustomKind"
    );
}
