//! Style records and tag vocabulary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::{style_id, style_url, tag_text};
use crate::stats::VitalStats;

/// A single tag value and its documented meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub tag: String,
    pub meaning: String,
}

/// A tag category (`Color`, `Strength`, ...) and its allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTagDescription {
    pub category: String,
    pub tags: Vec<TagEntry>,
}

impl StyleTagDescription {
    /// Whether `tag` is an allowed value of this category.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|entry| entry.tag == tag)
    }

    /// Tag values with their display labels, in document order.
    pub fn labelled_tags(&self) -> impl Iterator<Item = (&TagEntry, String)> {
        self.tags
            .iter()
            .map(|entry| (entry, tag_text(&self.category, &entry.tag)))
    }
}

/// A beer style (BJCP subcategory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Identifier as it appears in the guideline document (`"21B"`).
    pub source_id: String,
    /// Display name (`"Specialty IPA: Rye IPA"`).
    pub name: String,
    /// URL slug derived from the name.
    pub id: String,
    /// Classification tags; `None` when the entry carries no tag list.
    pub tags: Option<BTreeSet<String>>,
    /// Present only for detailed entries with full numeric ranges.
    pub stats: Option<VitalStats>,
    /// BJCP reference page for this style.
    pub reference_link: String,
}

impl Subcategory {
    /// Build a style record, deriving its slug and reference link.
    pub fn new(
        source_id: impl Into<String>,
        name: impl Into<String>,
        tags: Option<BTreeSet<String>>,
        stats: Option<VitalStats>,
    ) -> Result<Self> {
        let source_id = source_id.into();
        let name = name.into();
        let reference_link = style_url(&source_id, &name)?;
        Ok(Self {
            id: style_id(&name),
            source_id,
            name,
            tags,
            stats,
            reference_link,
        })
    }

    /// Whether the entry carries full numeric statistics.
    #[must_use]
    pub fn is_detailed(&self) -> bool {
        self.stats.is_some()
    }

    /// Whether the style is tagged with `value`. Untagged styles never are.
    #[must_use]
    pub fn has_tag(&self, value: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.contains(value))
    }

    /// Name without its family prefix (`"Rye IPA"` for
    /// `"Specialty IPA: Rye IPA"`), used for chart labels.
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self.name.rsplit_once(": ") {
            Some((_, rest)) => rest.trim_start(),
            None => &self.name,
        }
    }
}

/// Everything extracted from the guideline document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub tag_descriptions: Vec<StyleTagDescription>,
    pub subcategories: Vec<Subcategory>,
}

impl Dataset {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tag_descriptions.is_empty() && self.subcategories.is_empty()
    }

    /// Look up a tag category by name.
    #[must_use]
    pub fn tag_category(&self, category: &str) -> Option<&StyleTagDescription> {
        self.tag_descriptions
            .iter()
            .find(|desc| desc.category == category)
    }

    /// Look up a style by its slug.
    #[must_use]
    pub fn style(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|style| style.id == id)
    }
}
