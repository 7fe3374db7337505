//! In-memory RDF model
//!
//! Statement store with set semantics. Enumeration order is the order in
//! which statements were first inserted, which downstream annotation
//! extraction relies on.

use super::types::{NamedNode, Predicate, Statement, Subject, Term};
use indexmap::IndexSet;
use oxrdf::vocab::rdf;

/// In-memory RDF model
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Statements, deduplicated, in first-insertion order
    statements: IndexSet<Statement>,
}

impl Model {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a statement; returns false if it was already present
    pub fn insert(&mut self, statement: Statement) -> bool {
        self.statements.insert(statement)
    }

    /// Check if a statement exists in the model
    pub fn contains(&self, statement: &Statement) -> bool {
        self.statements.contains(statement)
    }

    /// Get the total number of statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the model is empty
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over all statements in first-insertion order
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// Enumerate the (predicate, object) pairs attached to a subject,
    /// in first-insertion order
    pub fn list_properties<'a>(
        &'a self,
        subject: &'a Subject,
    ) -> impl Iterator<Item = (&'a Predicate, &'a Term)> {
        self.statements
            .iter()
            .filter(move |s| &s.subject == subject)
            .map(|s| (&s.predicate, &s.object))
    }

    /// Objects of all statements with the given subject and predicate
    pub fn objects_of<'a>(
        &'a self,
        subject: &'a Subject,
        predicate: &'a Predicate,
    ) -> impl Iterator<Item = &'a Term> {
        self.statements
            .iter()
            .filter(move |s| &s.subject == subject && &s.predicate == predicate)
            .map(|s| &s.object)
    }

    /// First object for the given subject and predicate, if any
    pub fn first_object(&self, subject: &Subject, predicate: &Predicate) -> Option<&Term> {
        self.statements
            .iter()
            .find(|s| &s.subject == subject && &s.predicate == predicate)
            .map(|s| &s.object)
    }

    /// Subjects asserted to be instances of the given class via rdf:type
    pub fn subjects_of_type(&self, class: &NamedNode) -> Vec<&Subject> {
        let rdf_type: Predicate = rdf::TYPE.into();
        self.statements
            .iter()
            .filter(|s| {
                s.predicate == rdf_type && s.object.as_named_node() == Some(class)
            })
            .map(|s| &s.subject)
            .collect()
    }
}

impl Extend<Statement> for Model {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        for statement in iter {
            self.insert(statement);
        }
    }
}

impl FromIterator<Statement> for Model {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        let mut model = Model::new();
        model.extend(iter);
        model
    }
}
