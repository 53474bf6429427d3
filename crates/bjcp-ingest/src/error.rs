//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a dataset from loading at all.
///
/// Shape problems inside a well-formed document are not errors; they are
/// reported as [`crate::DatasetIssue`]s alongside the partial data.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to fetch dataset: {0}")]
    Network(#[source] reqwest::Error),

    #[error("dataset request to {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed guideline document: {0}")]
    Xml(#[from] quick_xml::DeError),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
