//! Document sources for chapter markdown and its assets.
//!
//! A [`DocSource`] resolves a path relative to the `/docs/` tree. Two
//! sources exist: a local directory and a remote HTTP origin that already
//! serves `/docs/`.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::DocsLocation;
use crate::error::ContentError;

/// Default timeout for the HTTP source.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Somewhere chapter markdown can be read from.
#[async_trait]
pub trait DocSource: Send + Sync + fmt::Debug {
    /// Fetches the raw bytes stored at `path` under `/docs/`.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] when the path is rejected, the document
    /// does not exist, or the underlying read fails.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError>;

    /// Fetches a document as text. Invalid UTF-8 is replaced.
    ///
    /// # Errors
    ///
    /// Same as [`DocSource::fetch`].
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError> {
        let bytes = self.fetch(path).await?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    /// Short description for logs, e.g. `dir:docs`.
    fn describe(&self) -> String;
}

/// Checks that `path` stays inside the docs tree.
///
/// Rejects empty paths, absolute paths, backslashes and any `..` or
/// root component.
///
/// # Errors
///
/// Returns [`ContentError::InvalidPath`] for rejected input.
pub fn validate_doc_path(path: &str) -> Result<&str, ContentError> {
    if path.is_empty() || path.contains('\\') || path.contains('\0') {
        return Err(ContentError::InvalidPath(path.to_string()));
    }
    let all_normal = Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if all_normal {
        Ok(path)
    } else {
        Err(ContentError::InvalidPath(path.to_string()))
    }
}

// ============================================================================
// Directory source
// ============================================================================

/// Reads documents from a local directory.
#[derive(Debug, Clone)]
pub struct DirDocSource {
    root: PathBuf,
}

impl DirDocSource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory documents are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocSource for DirDocSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        let relative = validate_doc_path(path)?;
        let full = self.root.join(relative);
        debug!(path = %full.display(), "reading document");
        match tokio::fs::read(&full).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ContentError::NotFound(path.to_string()))
            }
            Err(source) => Err(ContentError::Io { path: full, source }),
        }
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}

// ============================================================================
// HTTP source
// ============================================================================

/// Fetches documents from `<base_url>/docs/<path>`.
#[derive(Debug, Clone)]
pub struct HttpDocSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocSource {
    /// Creates a source for the origin at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for a docs path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/docs/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DocSource for HttpDocSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        let relative = validate_doc_path(path)?;
        let url = self.url_for(relative);
        debug!(%url, "fetching document");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        format!("http:{}", self.base_url)
    }
}

/// Opens the document source configured by `location`.
///
/// # Errors
///
/// Returns [`ContentError::Network`] if the HTTP client cannot be built.
pub fn open_source(
    location: &DocsLocation,
    timeout: Duration,
) -> Result<Arc<dyn DocSource>, ContentError> {
    Ok(match location {
        DocsLocation::Dir(dir) => Arc::new(DirDocSource::new(dir.clone())),
        DocsLocation::Url(url) => Arc::new(HttpDocSource::new(url, timeout)?),
    })
}
