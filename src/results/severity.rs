//! Result severity levels
//!
//! Result records carry their severity as a log-level individual; this maps
//! those IRIs onto a closed enum.

use crate::rdf::vocabulary::rlog;
use oxrdf::NamedNodeRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Severity errors
#[derive(Error, Debug)]
pub enum SeverityError {
    /// IRI does not name a known level
    #[error("Unknown severity: {0}")]
    Unknown(String),
}

pub type SeverityResult<T> = Result<T, SeverityError>;

/// Severity of a single validation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Severity {
    /// The level individual's IRI
    pub fn iri(&self) -> NamedNodeRef<'static> {
        match self {
            Severity::Fatal => rlog::FATAL,
            Severity::Error => rlog::ERROR,
            Severity::Warn => rlog::WARN,
            Severity::Info => rlog::INFO,
            Severity::Debug => rlog::DEBUG,
            Severity::Trace => rlog::TRACE,
        }
    }

    /// Map a level individual's IRI back to the enum
    pub fn from_iri(iri: &str) -> SeverityResult<Self> {
        match iri {
            _ if iri == rlog::FATAL.as_str() => Ok(Severity::Fatal),
            _ if iri == rlog::ERROR.as_str() => Ok(Severity::Error),
            _ if iri == rlog::WARN.as_str() => Ok(Severity::Warn),
            _ if iri == rlog::INFO.as_str() => Ok(Severity::Info),
            _ if iri == rlog::DEBUG.as_str() => Ok(Severity::Debug),
            _ if iri == rlog::TRACE.as_str() => Ok(Severity::Trace),
            _ => Err(SeverityError::Unknown(iri.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        };
        write!(f, "{}", name)
    }
}
