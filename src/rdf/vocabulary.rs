//! Vocabulary constants used by the validation toolkit
//!
//! Laid out the way oxrdf's own `vocab` module is: one submodule per
//! namespace, `NamedNodeRef` constants per term.

/// Resource logging vocabulary (result records are log entries)
pub mod rlog {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#";

    /// rlog:Entry class
    pub const ENTRY: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#Entry",
    );
    /// rlog:level property
    pub const LEVEL: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#level",
    );
    /// rlog:resource property
    pub const RESOURCE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#resource",
    );
    /// rlog:message property
    pub const MESSAGE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#message",
    );

    /// rlog:FATAL level individual
    pub const FATAL: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#FATAL",
    );
    /// rlog:ERROR level individual
    pub const ERROR: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#ERROR",
    );
    /// rlog:WARN level individual
    pub const WARN: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#WARN",
    );
    /// rlog:INFO level individual
    pub const INFO: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#INFO",
    );
    /// rlog:DEBUG level individual
    pub const DEBUG: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#DEBUG",
    );
    /// rlog:TRACE level individual
    pub const TRACE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://persistence.uni-leipzig.org/nlp2rdf/ontologies/rlog#TRACE",
    );
}

/// W3C provenance vocabulary
pub mod prov {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "http://www.w3.org/ns/prov#";

    /// prov:wasGeneratedBy property
    pub const WAS_GENERATED_BY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#wasGeneratedBy");
}

/// Dublin Core terms
pub mod dcterms {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "http://purl.org/dc/terms/";

    /// dcterms:date property
    pub const DATE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/date");
}

/// Toolkit core vocabulary: test cases and their result records
pub mod check {
    use oxrdf::NamedNodeRef;

    pub const NS: &str = "https://w3id.org/rdfcheck/ns/core#";

    /// check:testCase property, linking a result to the violated test case
    pub const TEST_CASE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("https://w3id.org/rdfcheck/ns/core#testCase");
    /// check:TestCaseResult class (generic result)
    pub const TEST_CASE_RESULT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("https://w3id.org/rdfcheck/ns/core#TestCaseResult");
    /// check:LogTestCaseResult class (log-shaped result)
    pub const LOG_TEST_CASE_RESULT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("https://w3id.org/rdfcheck/ns/core#LogTestCaseResult");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespace() {
        assert!(rlog::LEVEL.as_str().starts_with(rlog::NS));
        assert!(prov::WAS_GENERATED_BY.as_str().starts_with(prov::NS));
        assert!(dcterms::DATE.as_str().starts_with(dcterms::NS));
        assert!(check::TEST_CASE.as_str().starts_with(check::NS));
    }
}
