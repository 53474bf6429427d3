//! CLI library components for the BJCP style explorer.

#![allow(missing_docs)]

pub mod logging;
pub mod session;
