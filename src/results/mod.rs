//! Validation result records
//!
//! This module reads structured test outcomes out of RDF descriptions:
//! - The five mandatory core fields of a result
//! - Residual annotations beyond the core fields
//! - Severity levels

mod annotations;
mod extractor;
mod severity;

pub use annotations::AnnotationSet;
pub use extractor::{
    CoreResult, CoreResultReader, ExtendedResult, ExtendedResultReader, ExtractionError,
    ExtractionResult, ResultReader,
};
pub use severity::{Severity, SeverityError, SeverityResult};
