//! Dataset loading for the BJCP style explorer.
//!
//! Fetches the guideline document (remote URL or local file), decodes it
//! against an explicit schema and returns the styles and tag vocabulary
//! together with any shape issues found along the way.

pub mod error;
pub mod loader;
pub mod schema;
pub mod source;

pub use error::{IngestError, Result};
pub use loader::{DatasetIssue, LoadedDataset, TAG_REFERENCE_TITLE, decode_document, load};
pub use source::{DEFAULT_DATASET_URL, DatasetSource, fetch_document, is_debug_host};
