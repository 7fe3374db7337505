//! Lazy schema readers
//!
//! A reader binds one acquisition strategy at construction time and touches
//! disk or network only on first read. This lets a run pre-register many
//! sources before any I/O happens.

use super::cache::write_atomic;
use super::config::{ConfigError, ConfigResult};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Retrieval errors, surfaced lazily at first read
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Fetching over the network failed
    #[error("Failed to fetch {location}: {reason}")]
    Http { location: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Retrieved content could not be parsed
    #[error("Malformed content: {0}")]
    Malformed(#[from] crate::rdf::ParseError),
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;

/// Network-fetch collaborator: resolve a location to its serialized bytes
#[async_trait]
pub trait Dereference: Send + Sync {
    async fn fetch(&self, location: &str) -> RetrievalResult<Bytes>;
}

/// HTTP dereferencer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DereferenceConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Accept header for RDF content negotiation
    pub accept: String,
    /// User agent
    pub user_agent: String,
}

impl Default for DereferenceConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            accept: "text/turtle, application/rdf+xml;q=0.8, application/n-triples;q=0.5"
                .to_string(),
            user_agent: format!("rdfcheck/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Reqwest-backed dereferencer
pub struct HttpDereferencer {
    client: Client,
    accept: String,
}

impl HttpDereferencer {
    /// Create a dereferencer with the given settings
    pub fn new(config: &DereferenceConfig) -> ConfigResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            accept: config.accept.clone(),
        })
    }
}

#[async_trait]
impl Dereference for HttpDereferencer {
    async fn fetch(&self, location: &str) -> RetrievalResult<Bytes> {
        debug!("Dereferencing {}", location);

        let response = self
            .client
            .get(location)
            .header(reqwest::header::ACCEPT, self.accept.as_str())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RetrievalError::Http {
                location: location.to_string(),
                reason: e.to_string(),
            })?;

        response.bytes().await.map_err(|e| RetrievalError::Http {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Acquisition strategy, fixed at construction
#[derive(Clone)]
enum ReadStrategy {
    /// Read the cache file if present and non-empty, otherwise fetch the
    /// fallback location and persist the result to the cache file
    FileOrDereference {
        path: PathBuf,
        fallback: String,
        fetcher: Arc<dyn Dereference>,
    },
    /// Always fetch over the network
    Dereference {
        location: String,
        fetcher: Arc<dyn Dereference>,
    },
    /// In-memory literal, no I/O ever
    Text { text: String },
}

/// Lazy byte source for a schema document.
///
/// The first `read` performs the bound strategy's I/O and memoizes the
/// result; later reads return the buffered bytes. `fresh` produces an
/// equivalent reader with its own empty buffer.
pub struct SchemaReader {
    strategy: ReadStrategy,
    buffer: OnceCell<Bytes>,
}

impl SchemaReader {
    /// Cache-file-first reader with network fallback and write-back
    pub fn file_or_dereference(
        path: PathBuf,
        fallback: impl Into<String>,
        fetcher: Arc<dyn Dereference>,
    ) -> Self {
        Self {
            strategy: ReadStrategy::FileOrDereference {
                path,
                fallback: fallback.into(),
                fetcher,
            },
            buffer: OnceCell::new(),
        }
    }

    /// Network-only reader, cache bypassed
    pub fn dereference(location: impl Into<String>, fetcher: Arc<dyn Dereference>) -> Self {
        Self {
            strategy: ReadStrategy::Dereference {
                location: location.into(),
                fetcher,
            },
            buffer: OnceCell::new(),
        }
    }

    /// In-memory literal reader
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            strategy: ReadStrategy::Text { text: text.into() },
            buffer: OnceCell::new(),
        }
    }

    /// An equivalent reader with independent buffering state
    pub fn fresh(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
            buffer: OnceCell::new(),
        }
    }

    /// Read the document bytes, performing the bound I/O on first call
    pub async fn read(&self) -> RetrievalResult<Bytes> {
        self.buffer
            .get_or_try_init(|| self.load())
            .await
            .map(Bytes::clone)
    }

    async fn load(&self) -> RetrievalResult<Bytes> {
        match &self.strategy {
            ReadStrategy::FileOrDereference {
                path,
                fallback,
                fetcher,
            } => {
                match tokio::fs::read(path).await {
                    Ok(data) if !data.is_empty() => {
                        debug!("Cache hit: {}", path.display());
                        return Ok(Bytes::from(data));
                    }
                    Ok(_) => debug!("Cache file empty: {}", path.display()),
                    Err(_) => debug!("Cache miss: {}", path.display()),
                }

                let data = fetcher.fetch(fallback).await?;
                // A failed cache write must not mask the successful fetch
                if let Err(e) = write_atomic(path, &data) {
                    warn!("Cache write failed for {}: {}", path.display(), e);
                }
                Ok(data)
            }
            ReadStrategy::Dereference { location, fetcher } => fetcher.fetch(location).await,
            ReadStrategy::Text { text } => Ok(Bytes::from(text.clone())),
        }
    }
}

impl fmt::Debug for SchemaReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match &self.strategy {
            ReadStrategy::FileOrDereference { path, fallback, .. } => {
                format!("FileOrDereference({}, {})", path.display(), fallback)
            }
            ReadStrategy::Dereference { location, .. } => format!("Dereference({})", location),
            ReadStrategy::Text { .. } => "Text".to_string(),
        };
        f.debug_struct("SchemaReader")
            .field("strategy", &strategy)
            .field("buffered", &self.buffer.initialized())
            .finish()
    }
}
