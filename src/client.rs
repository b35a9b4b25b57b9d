//! HTTP transport against the upload service.
//!
//! [`Transport`] is the seam between the session and the network; the
//! reqwest-backed [`HttpTransport`] is the only code that speaks HTTP. No
//! timeouts, retries or cancellation: a failed call surfaces once and the
//! caller decides what to tell the user.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::media::preview;
use crate::media::schema::{Candidate, MediaRecord};

/// Multipart field name the server expects for every uploaded file.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered, but not with a success status.
    #[error("server returned HTTP {0}")]
    Status(StatusCode),
    /// The request never completed: connect, send or decode trouble.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// A selected file could not be read at send time.
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Network operations the session needs, as a port so the workflow can run
/// against an in-memory stub.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch all records, newest ordering decided by the server.
    async fn list(&self) -> Result<Vec<MediaRecord>, TransportError>;

    /// Send a validated batch as one multipart request.
    async fn upload(&self, batch: &[Candidate]) -> Result<(), TransportError>;

    /// Delete one record by id.
    async fn delete(&self, id: u64) -> Result<(), TransportError>;

    /// Fetch the stored bytes behind a record.
    async fn download(&self, record: &MediaRecord) -> Result<Vec<u8>, TransportError>;
}

/// reqwest adapter for a server at `origin` (scheme + host + port, no
/// trailing slash).
pub struct HttpTransport {
    http: reqwest::Client,
    origin: String,
}

impl HttpTransport {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    fn check(status: StatusCode) -> Result<(), TransportError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Status(status))
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn list(&self) -> Result<Vec<MediaRecord>, TransportError> {
        let response = self.http.get(self.endpoint("/api/upload/")).send().await?;
        Self::check(response.status())?;
        Ok(response.json().await?)
    }

    async fn upload(&self, batch: &[Candidate]) -> Result<(), TransportError> {
        let mut form = Form::new();
        for file in batch {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|source| TransportError::Read {
                    path: file.path.clone(),
                    source,
                })?;
            let part = Part::bytes(bytes)
                .file_name(file.name.clone())
                .mime_str(&file.mime)?;
            form = form.part(UPLOAD_FIELD, part);
        }

        debug!(files = batch.len(), "sending multipart upload");
        let response = self
            .http
            .post(self.endpoint("/api/upload/"))
            .multipart(form)
            .send()
            .await?;
        Self::check(response.status())
    }

    async fn delete(&self, id: u64) -> Result<(), TransportError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/api/delete/{id}/")))
            .send()
            .await?;
        Self::check(response.status())
    }

    async fn download(&self, record: &MediaRecord) -> Result<Vec<u8>, TransportError> {
        let url = preview::resolve_url(&self.origin, &record.file);
        let response = self.http.get(url).send().await?;
        Self::check(response.status())?;
        Ok(response.bytes().await?.to_vec())
    }
}
