//! HTML output for the style explorer.
//!
//! - **Results**: the ordered list of matching styles
//! - **Page**: a standalone page with filter groups, results and charts

mod common;
mod page;
mod results;

pub use page::{PageOptions, render_page, write_page};
pub use results::{ResultEntry, ResultList, render_results, results_html, write_results};
