//! Where the guideline document comes from and how it is fetched.
//!
//! The document is fetched once per run. There is no retry and no cache:
//! every run re-reads the source.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::error::{IngestError, Result};

/// CDN copy of the BJCP 2015 guidelines in XML form.
pub const DEFAULT_DATASET_URL: &str =
    "https://cdn.jsdelivr.net/gh/gthmb/bjcp-2015-json/xml/styleguide-2015.xml";

/// Hosts that enable verbose diagnostics.
const DEBUG_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", ""];

/// Location of the guideline document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Remote document fetched with a single HTTP GET.
    Url(String),
    /// Local copy on disk.
    File(PathBuf),
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::Url(DEFAULT_DATASET_URL.to_string())
    }
}

impl From<&str> for DatasetSource {
    fn from(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DatasetSource {
    /// Whether the source is local, which turns on verbose diagnostics.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        match self {
            Self::File(_) => true,
            Self::Url(url) => Url::parse(url)
                .map(|parsed| is_debug_host(parsed.host_str().unwrap_or_default()))
                .unwrap_or(false),
        }
    }
}

/// Whether `host` is a local or loopback host.
#[must_use]
pub fn is_debug_host(host: &str) -> bool {
    DEBUG_HOSTS.contains(&host)
}

/// Read the raw guideline document from `source`.
pub fn fetch_document(source: &DatasetSource) -> Result<String> {
    match source {
        DatasetSource::File(path) => {
            debug!(path = %path.display(), "reading dataset file");
            fs::read_to_string(path).map_err(|err| IngestError::io(path, err))
        }
        DatasetSource::Url(url) => fetch_url(url),
    }
}

fn fetch_url(url: &str) -> Result<String> {
    debug!(%url, "fetching dataset");
    let client = Client::builder().build().map_err(IngestError::Network)?;
    let response = client
        .get(url)
        .header(
            USER_AGENT,
            format!("bjcp-explorer/{}", env!("CARGO_PKG_VERSION")),
        )
        .send()
        .map_err(IngestError::Network)?;

    if !response.status().is_success() {
        return Err(IngestError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    response.text().map_err(IngestError::Network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_sources() {
        assert_eq!(
            DatasetSource::from("https://example.com/guide.xml"),
            DatasetSource::Url("https://example.com/guide.xml".to_string())
        );
        assert_eq!(
            DatasetSource::from("data/guide.xml"),
            DatasetSource::File(PathBuf::from("data/guide.xml"))
        );
    }

    #[test]
    fn debug_only_for_local_sources() {
        assert!(is_debug_host("localhost"));
        assert!(is_debug_host("127.0.0.1"));
        assert!(is_debug_host(""));
        assert!(!is_debug_host("cdn.jsdelivr.net"));

        assert!(!DatasetSource::default().is_debug());
        assert!(DatasetSource::from("http://localhost:8000/guide.xml").is_debug());
        assert!(DatasetSource::from("guide.xml").is_debug());
    }
}
