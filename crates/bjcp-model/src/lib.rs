//! Data model for the BJCP 2015 style guidelines.

pub mod error;
pub mod ids;
pub mod stats;
pub mod style;

pub use error::{ModelError, Result};
pub use ids::{BJCP_BASE_URL, reference_segments, style_id, style_url, tag_text};
pub use stats::{StatRange, Statistic, VitalStats};
pub use style::{Dataset, StyleTagDescription, Subcategory, TagEntry};
