//! Residual result annotations
//!
//! An annotation is a predicate/value pair on a result that is not one of
//! the fixed core fields. Duplicate predicates accumulate values instead of
//! overwriting, and the order predicates were first seen in is preserved.

use crate::rdf::{Predicate, Term};
use indexmap::{IndexMap, IndexSet};

/// Ordered predicate → value-set multimap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    entries: IndexMap<Predicate, IndexSet<Term>>,
}

impl AnnotationSet {
    /// Create an empty annotation set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value under a predicate; returns false if the pair was
    /// already present
    pub fn insert(&mut self, predicate: Predicate, value: Term) -> bool {
        self.entries.entry(predicate).or_default().insert(value)
    }

    /// Fold a statement sequence into an annotation set
    pub fn from_statements<I>(statements: I) -> Self
    where
        I: IntoIterator<Item = (Predicate, Term)>,
    {
        statements
            .into_iter()
            .fold(Self::new(), |mut set, (predicate, value)| {
                set.insert(predicate, value);
                set
            })
    }

    /// Values recorded under a predicate
    pub fn values(&self, predicate: &Predicate) -> Option<&IndexSet<Term>> {
        self.entries.get(predicate)
    }

    /// Predicates in first-seen order
    pub fn predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.entries.keys()
    }

    /// Iterate (predicate, value set) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&Predicate, &IndexSet<Term>)> {
        self.entries.iter()
    }

    /// Number of distinct predicates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no annotations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
