use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::LoadError;

/// Where the raw question document comes from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the whole document as text.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the source is unreachable or answers with a failure.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

//
// ─── LOCATION ──────────────────────────────────────────────────────────────────
//

/// A parsed source location: an HTTP(S) URL or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Http(Url),
    File(PathBuf),
}

impl SourceLocation {
    /// Parse `raw` as a location.
    ///
    /// `http://` and `https://` URLs fetch over the network, `file://` URLs and bare
    /// paths read from disk.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidLocation` for blank input, unparsable URLs and
    /// unsupported schemes.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let trimmed = raw.trim();
        let invalid = |reason: &str| LoadError::InvalidLocation {
            raw: raw.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("location is empty"));
        }
        if !trimmed.contains("://") {
            return Ok(Self::File(PathBuf::from(trimmed)));
        }

        let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(Self::Http(url)),
            "file" => url
                .to_file_path()
                .map(Self::File)
                .map_err(|()| invalid("file URL does not name a local path")),
            other => Err(invalid(&format!("unsupported scheme `{other}`"))),
        }
    }

    /// Build the matching source adapter.
    #[must_use]
    pub fn into_source(self) -> Arc<dyn QuestionSource> {
        match self {
            Self::Http(url) => Arc::new(HttpSource::new(url)),
            Self::File(path) => Arc::new(FileSource::new(path)),
        }
    }
}

//
// ─── ADAPTERS ──────────────────────────────────────────────────────────────────
//

/// Fetches the document with a single GET request. No retry and no timeout.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        let transport = |source: reqwest::Error| LoadError::Transport {
            url: self.url.to_string(),
            source,
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus {
                url: self.url.to_string(),
                status: response.status(),
            });
        }

        response.text().await.map_err(transport)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a document held in memory; useful for tests and embedded question sets.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    document: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "<in-memory>".to_string()
    }
}
