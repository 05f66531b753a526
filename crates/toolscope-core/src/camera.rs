use std::path::PathBuf;

use crate::error::{Result, ToolscopeError};
use crate::snapshot::Snapshot;

/// Anything that can produce a fresh inspection frame.
pub trait SnapshotSource {
    /// A printable label for logs and summaries (URL or file path).
    fn label(&self) -> String;

    /// Grab one frame.
    fn fetch(&self) -> Result<Snapshot>;
}

/// Pulls stills from an MJPEG-streamer style snapshot endpoint.
pub struct HttpCamera {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpCamera {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl SnapshotSource for HttpCamera {
    fn label(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Snapshot> {
        tracing::debug!(url = %self.url, "Requesting camera snapshot");

        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolscopeError::CameraStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let bytes = response.bytes()?;
        tracing::debug!(bytes = bytes.len(), "Snapshot received");

        Snapshot::decode(&bytes)
    }
}

/// Reads a still image from disk. Stands in for a live camera in
/// tests and offline runs.
pub struct FileCamera {
    path: PathBuf,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileCamera {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Snapshot> {
        tracing::debug!(path = %self.path.display(), "Reading snapshot from file");
        let bytes = std::fs::read(&self.path)?;
        Snapshot::decode(&bytes)
    }
}
