//! Cache artifact layout and write-back
//!
//! One file per (variant, prefix, identifier):
//! `<base>/<variant-segment>/<sanitized-prefix>-<identifier-digest>`.
//! The prefix keeps paths human-readable; the digest keeps them unique when
//! prefixes collide. Writes go through a temporary file and a rename so a
//! concurrent reader never observes a partial artifact.

use super::schema::SchemaVariant;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Cache write errors. Recoverable: the fetched bytes are still served.
#[derive(Error, Debug)]
pub enum CacheWriteError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Renaming the temporary file into place failed
    #[error("Persist error: {0}")]
    Persist(String),
}

pub type CacheWriteResult<T> = Result<T, CacheWriteError>;

/// Derive the cache file path for a source.
///
/// Deterministic: the same (base, variant, prefix, identifier) always maps
/// to the same path, and the two variants never share a path.
pub fn cache_path(
    base_folder: impl AsRef<Path>,
    variant: SchemaVariant,
    prefix: &str,
    identifier: &str,
) -> PathBuf {
    let file_name = format!(
        "{}-{}",
        sanitize_prefix(prefix),
        identifier_digest(identifier)
    );
    base_folder
        .as_ref()
        .join(variant.cache_segment())
        .join(file_name)
}

/// Keep the prefix legal as a file name component
fn sanitize_prefix(prefix: &str) -> String {
    prefix
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Truncated sha-256 hex of the full identifier
fn identifier_digest(identifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identifier.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest.chars().take(16).collect()
}

/// Atomically persist a fetched document to its cache path.
///
/// The temporary file lives in the destination directory so the final
/// rename stays on one filesystem.
pub fn write_atomic(path: &Path, data: &[u8]) -> CacheWriteResult<()> {
    let dir = path.parent().ok_or_else(|| {
        CacheWriteError::Persist(format!("cache path has no parent: {}", path.display()))
    })?;
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    std::io::Write::write_all(&mut tmp, data)?;
    tmp.persist(path)
        .map_err(|e| CacheWriteError::Persist(e.to_string()))?;

    debug!("Cached {} bytes at {}", data.len(), path.display());
    Ok(())
}
