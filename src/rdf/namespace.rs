//! Namespace prefix derivation
//!
//! A prefix is a short, filesystem-safe handle for an ontology identifier.
//! When the caller does not supply one, it is derived here: deterministic,
//! stateless, no registry involved.

/// Derive a prefix from an ontology identifier.
///
/// Lowercased alphanumerics of the identifier without its scheme. The same
/// identifier always yields the same prefix.
pub fn auto_prefix(identifier: &str) -> String {
    let rest = identifier
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(identifier);

    let prefix: String = rest
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if prefix.is_empty() {
        "ns".to_string()
    } else {
        prefix
    }
}
