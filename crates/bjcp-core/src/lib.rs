//! Filtering and search over the BJCP styles.

pub mod error;
pub mod filter;
pub mod search;
pub mod state;

pub use error::{CoreError, Result};
pub use filter::{FilterSelection, FilterState, evaluate};
pub use search::{NEW_CONTEXT, NameMatcher, Navigation, SearchIndex, Suggestion};
pub use state::{AppState, Phase};
