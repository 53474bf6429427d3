//! Name search behind the style autocomplete.

use bjcp_model::Subcategory;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Browsing context reference links open in.
pub const NEW_CONTEXT: &str = "_blank";

/// Case-insensitive match anchored at a word boundary.
///
/// `"ipa"` finds `"Specialty IPA: Rye IPA"` but not `"Tipa"`.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    regex: Regex,
}

impl NameMatcher {
    pub fn new(query: &str) -> Result<Self> {
        let pattern = format!(r"\b{}", regex::escape(query));
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Search view over the loaded styles.
#[derive(Debug, Clone, Copy)]
pub struct SearchIndex<'a> {
    styles: &'a [Subcategory],
}

impl<'a> SearchIndex<'a> {
    #[must_use]
    pub fn new(styles: &'a [Subcategory]) -> Self {
        Self { styles }
    }

    /// Styles whose name matches `query`, in source order.
    pub fn matches(&self, query: &str) -> Result<Vec<&'a Subcategory>> {
        let matcher = NameMatcher::new(query)?;
        let found: Vec<&'a Subcategory> = self
            .styles
            .iter()
            .filter(|style| matcher.is_match(&style.name))
            .collect();
        debug!(query, matches = found.len(), "search");
        Ok(found)
    }

    /// Rendered autocomplete entries for `query`.
    pub fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>> {
        Ok(self
            .matches(query)?
            .into_iter()
            .map(Suggestion::from_style)
            .collect())
    }
}

/// One autocomplete entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    /// ABV/IBU/SRM line; absent for styles without full statistics.
    pub summary: Option<String>,
    pub url: String,
}

impl Suggestion {
    #[must_use]
    pub fn from_style(style: &Subcategory) -> Self {
        Self {
            name: style.name.clone(),
            summary: style.stats.as_ref().map(bjcp_model::VitalStats::summary),
            url: style.reference_link.clone(),
        }
    }

    /// Navigation triggered by choosing this entry.
    #[must_use]
    pub fn select(&self) -> Navigation {
        Navigation {
            url: self.url.clone(),
            target: NEW_CONTEXT,
            focus: true,
        }
    }
}

/// Request to open a reference page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub url: String,
    pub target: &'static str,
    /// Switch to the new context after opening it.
    pub focus: bool,
}
