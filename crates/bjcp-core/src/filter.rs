//! Filter selection and evaluation.
//!
//! A [`FilterState`] holds at most one selected tag per category. Evaluation
//! always starts again from the full style list; there is no incremental
//! update, which is fine for a list of a few hundred styles.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use bjcp_model::{StyleTagDescription, Subcategory, tag_text};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{CoreError, Result};

/// Current selection: tag category to selected tag value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    selected: BTreeMap<String, String>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for `category`, or clear the category when `value` is
    /// already its selection. Selecting a different value replaces the old one.
    pub fn toggle(&mut self, category: impl Into<String>, value: impl Into<String>) {
        let category = category.into();
        let value = value.into();
        if self.selected.get(&category) == Some(&value) {
            trace!(%category, %value, "filter cleared");
            self.selected.remove(&category);
        } else {
            trace!(%category, %value, "filter set");
            self.selected.insert(category, value);
        }
    }

    /// Selected value of `category`, if any.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&str> {
        self.selected.get(category).map(String::as_str)
    }

    /// `(category, value)` pairs, ordered by category.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected
            .iter()
            .map(|(category, value)| (category.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether `style` carries every selected value.
    ///
    /// Untagged styles never match, even with nothing selected.
    #[must_use]
    pub fn matches(&self, style: &Subcategory) -> bool {
        let Some(tags) = &style.tags else {
            return false;
        };
        self.selected.values().all(|value| tags.contains(value))
    }
}

/// Styles matching `filter`, in their original order.
#[must_use]
pub fn evaluate<'a>(subcategories: &'a [Subcategory], filter: &FilterState) -> Vec<&'a Subcategory> {
    subcategories
        .iter()
        .filter(|style| filter.matches(style))
        .collect()
}

/// One `CATEGORY=TAG` selection as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: String,
    pub tag: String,
}

impl FromStr for FilterSelection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (category, tag) = s
            .split_once('=')
            .ok_or_else(|| CoreError::InvalidFilter(s.to_string()))?;
        let (category, tag) = (category.trim(), tag.trim());
        if category.is_empty() || tag.is_empty() {
            return Err(CoreError::InvalidFilter(s.to_string()));
        }
        Ok(Self {
            category: category.to_string(),
            tag: tag.to_string(),
        })
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category, self.tag)
    }
}

impl FilterSelection {
    /// Match the selection against the tag vocabulary.
    ///
    /// Category names compare case-insensitively; the tag may be given either
    /// as its value (`pale-color`) or its display label (`Pale`).
    pub fn resolve(&self, descriptions: &[StyleTagDescription]) -> Result<Self> {
        let description = descriptions
            .iter()
            .find(|desc| desc.category.eq_ignore_ascii_case(&self.category))
            .ok_or_else(|| CoreError::UnknownCategory(self.category.clone()))?;
        let entry = description
            .tags
            .iter()
            .find(|entry| {
                entry.tag == self.tag
                    || tag_text(&description.category, &entry.tag).eq_ignore_ascii_case(&self.tag)
            })
            .ok_or_else(|| CoreError::UnknownTag {
                category: description.category.clone(),
                tag: self.tag.clone(),
            })?;
        Ok(Self {
            category: description.category.clone(),
            tag: entry.tag.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bjcp_model::TagEntry;

    fn color_tags() -> Vec<StyleTagDescription> {
        vec![StyleTagDescription {
            category: "Color".to_string(),
            tags: vec![
                TagEntry {
                    tag: "pale-color".to_string(),
                    meaning: "Straw to gold".to_string(),
                },
                TagEntry {
                    tag: "dark-color".to_string(),
                    meaning: "Brown to black".to_string(),
                },
            ],
        }]
    }

    #[test]
    fn toggle_replaces_then_clears() {
        let mut state = FilterState::new();
        state.toggle("Color", "pale-color");
        assert_eq!(state.get("Color"), Some("pale-color"));

        state.toggle("Color", "dark-color");
        assert_eq!(state.get("Color"), Some("dark-color"));
        assert_eq!(state.len(), 1);

        state.toggle("Color", "dark-color");
        assert!(state.is_empty());
    }

    #[test]
    fn parses_selection() {
        let selection: FilterSelection = "Style Family = ipa-family".parse().unwrap();
        assert_eq!(selection.category, "Style Family");
        assert_eq!(selection.tag, "ipa-family");
        assert!("Color".parse::<FilterSelection>().is_err());
        assert!("=pale-color".parse::<FilterSelection>().is_err());
    }

    #[test]
    fn resolves_labels_and_case() {
        let tags = color_tags();
        let by_label: FilterSelection = "color=Pale".parse().unwrap();
        assert_eq!(
            by_label.resolve(&tags).unwrap(),
            FilterSelection {
                category: "Color".to_string(),
                tag: "pale-color".to_string(),
            }
        );

        let unknown: FilterSelection = "Color=amber-color".parse().unwrap();
        assert!(matches!(
            unknown.resolve(&tags),
            Err(CoreError::UnknownTag { .. })
        ));
        let category: FilterSelection = "Era=craft-style".parse().unwrap();
        assert!(matches!(
            category.resolve(&tags),
            Err(CoreError::UnknownCategory(_))
        ));
    }
}
