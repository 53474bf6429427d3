//! Decode the guideline document into a [`Dataset`].
//!
//! Decoding never fails on shape drift. Anything missing or unexpected is
//! recorded as a [`DatasetIssue`] and the rest of the document is still used,
//! so the explorer works with whatever part of the data survived.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Instant;

use bjcp_model::{
    Dataset, StatRange, StyleTagDescription, Subcategory, TagEntry, VitalStats,
};
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::schema::{
    Cell, RawRange, RawStats, RawSubcategory, Row, StyleClass, StyleGuide, Table,
};
use crate::source::{DatasetSource, fetch_document};

/// Title of the introduction section holding the tag reference table.
pub const TAG_REFERENCE_TITLE: &str = "Style Tag Reference";

/// Paragraph of the tag reference section that holds the table.
const TAG_TABLE_PARAGRAPH: usize = 1;

/// A dataset-shape problem found while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    /// The document has no style class at all.
    MissingClass,
    /// The beer class has no introduction.
    MissingIntroduction,
    /// No introduction section is titled [`TAG_REFERENCE_TITLE`].
    MissingTagReference,
    /// The tag reference section contains no table.
    MissingTagTable,
    /// A tag table row that is neither a category heading nor a tag row.
    UnexpectedTagRow { row: usize },
    /// The beer class lists no categories.
    MissingCategories,
    /// A subcategory lacks its identifier or name.
    MissingField {
        category: String,
        field: &'static str,
    },
    /// A style identifier that cannot produce a reference link.
    InvalidReference { style: String, message: String },
    /// A stats block without exceptions whose ranges are missing or not numeric.
    InvalidStats { style: String, message: String },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClass => f.write_str("document has no style class"),
            Self::MissingIntroduction => f.write_str("beer class has no introduction"),
            Self::MissingTagReference => {
                write!(f, "introduction has no '{TAG_REFERENCE_TITLE}' section")
            }
            Self::MissingTagTable => f.write_str("tag reference section has no table"),
            Self::UnexpectedTagRow { row } => write!(f, "unexpected tag table row {row}"),
            Self::MissingCategories => f.write_str("beer class has no categories"),
            Self::MissingField { category, field } => {
                write!(f, "subcategory in category {category} has no {field}")
            }
            Self::InvalidReference { style, message } => {
                write!(f, "style {style}: {message}")
            }
            Self::InvalidStats { style, message } => {
                write!(f, "style {style}: {message}")
            }
        }
    }
}

/// Decoded data plus every shape issue met on the way.
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub issues: Vec<DatasetIssue>,
}

impl LoadedDataset {
    /// Whether the document decoded without any shape issue.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Fetch and decode the guideline document.
///
/// Shape issues are logged at `warn` for local sources and at `debug`
/// otherwise.
pub fn load(source: &DatasetSource) -> Result<LoadedDataset> {
    let span = info_span!("load", source = %source);
    let _guard = span.enter();
    let start = Instant::now();

    let xml = fetch_document(source)?;
    let loaded = decode_document(&xml)?;

    let verbose = source.is_debug();
    for issue in &loaded.issues {
        if verbose {
            warn!(%issue, "dataset shape issue");
        } else {
            debug!(%issue, "dataset shape issue");
        }
    }
    info!(
        styles = loaded.dataset.subcategories.len(),
        tag_categories = loaded.dataset.tag_descriptions.len(),
        issues = loaded.issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(loaded)
}

/// Decode an XML guideline document.
///
/// Returns an error only when the text is not well-formed XML.
pub fn decode_document(xml: &str) -> Result<LoadedDataset> {
    let guide: StyleGuide = quick_xml::de::from_str(xml)?;
    let mut issues = Vec::new();

    let Some(class) = guide.beer_class() else {
        issues.push(DatasetIssue::MissingClass);
        return Ok(LoadedDataset {
            dataset: Dataset::default(),
            issues,
        });
    };

    let tag_descriptions = extract_tag_descriptions(class, &mut issues);
    let subcategories = extract_subcategories(class, &mut issues);

    Ok(LoadedDataset {
        dataset: Dataset {
            tag_descriptions,
            subcategories,
        },
        issues,
    })
}

fn extract_tag_descriptions(
    class: &StyleClass,
    issues: &mut Vec<DatasetIssue>,
) -> Vec<StyleTagDescription> {
    let Some(introduction) = &class.introduction else {
        issues.push(DatasetIssue::MissingIntroduction);
        return Vec::new();
    };
    let Some(section) = introduction
        .sections
        .iter()
        .find(|section| section.sectiontitle.as_deref().map(str::trim) == Some(TAG_REFERENCE_TITLE))
    else {
        issues.push(DatasetIssue::MissingTagReference);
        return Vec::new();
    };

    let table = section
        .paragraphs
        .get(TAG_TABLE_PARAGRAPH)
        .and_then(|paragraph| paragraph.table.as_ref())
        .or_else(|| {
            debug!("tag table not in its usual paragraph, searching the section");
            section
                .paragraphs
                .iter()
                .find_map(|paragraph| paragraph.table.as_ref())
        });
    match table {
        Some(table) => parse_tag_table(table, issues),
        None => {
            issues.push(DatasetIssue::MissingTagTable);
            Vec::new()
        }
    }
}

/// Walk the tag table: a `th` row opens a category named by its first header
/// cell, the `td` rows after it are `(_, tag, meaning)` triples. The first row
/// is the table heading.
fn parse_tag_table(table: &Table, issues: &mut Vec<DatasetIssue>) -> Vec<StyleTagDescription> {
    let mut descriptions = Vec::new();
    let mut rows = table.rows.iter().enumerate().skip(1).peekable();

    while let Some((index, row)) = rows.next() {
        let Some(heading) = row.th.first() else {
            issues.push(DatasetIssue::UnexpectedTagRow { row: index });
            continue;
        };
        let mut tags = Vec::new();
        while let Some((_, tag_row)) = rows.next_if(|(_, next)| is_tag_row(next)) {
            tags.push(TagEntry {
                tag: cell_text(tag_row, 1),
                meaning: cell_text(tag_row, 2),
            });
        }
        descriptions.push(StyleTagDescription {
            category: heading.text(),
            tags,
        });
    }
    debug!(categories = descriptions.len(), "tag reference decoded");
    descriptions
}

fn is_tag_row(row: &Row) -> bool {
    row.th.is_empty() && !row.td.is_empty()
}

fn cell_text(row: &Row, index: usize) -> String {
    row.td
        .get(index)
        .map(Cell::text)
        .unwrap_or_default()
}

fn extract_subcategories(class: &StyleClass, issues: &mut Vec<DatasetIssue>) -> Vec<Subcategory> {
    if class.categories.is_empty() {
        issues.push(DatasetIssue::MissingCategories);
        return Vec::new();
    }

    let mut styles = Vec::new();
    for category in &class.categories {
        let category_label = category
            .id
            .clone()
            .or_else(|| category.name.clone())
            .unwrap_or_else(|| "?".to_string());
        for raw in &category.subcategories {
            if let Some(style) = decode_subcategory(raw, &category_label, issues) {
                styles.push(style);
            }
        }
    }
    debug!(styles = styles.len(), "subcategories decoded");
    styles
}

fn decode_subcategory(
    raw: &RawSubcategory,
    category: &str,
    issues: &mut Vec<DatasetIssue>,
) -> Option<Subcategory> {
    let Some(source_id) = non_empty(raw.id.as_deref()) else {
        issues.push(DatasetIssue::MissingField {
            category: category.to_string(),
            field: "id",
        });
        return None;
    };
    let Some(name) = non_empty(raw.name.as_deref()) else {
        issues.push(DatasetIssue::MissingField {
            category: category.to_string(),
            field: "name",
        });
        return None;
    };

    let tags = raw.tags.as_deref().and_then(parse_tags);
    let stats = match raw.stats.as_ref() {
        Some(stats) => match decode_stats(stats) {
            Ok(stats) => stats,
            Err(message) => {
                issues.push(DatasetIssue::InvalidStats {
                    style: source_id.to_string(),
                    message,
                });
                None
            }
        },
        None => None,
    };

    match Subcategory::new(source_id, name, tags, stats) {
        Ok(style) => Some(style),
        Err(err) => {
            issues.push(DatasetIssue::InvalidReference {
                style: source_id.to_string(),
                message: err.to_string(),
            });
            None
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Split the comma-separated tag list; an empty list counts as no tags.
fn parse_tags(text: &str) -> Option<BTreeSet<String>> {
    let tags: BTreeSet<String> = text
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    (!tags.is_empty()).then_some(tags)
}

/// Summary entries carry an exceptions field instead of full ranges; they
/// decode to `Ok(None)` and are left out of charts.
fn decode_stats(stats: &RawStats) -> std::result::Result<Option<VitalStats>, String> {
    if stats.exceptions.is_some() {
        return Ok(None);
    }
    Ok(Some(VitalStats {
        og: decode_range("og", stats.og.as_ref())?,
        fg: decode_range("fg", stats.fg.as_ref())?,
        ibu: decode_range("ibu", stats.ibu.as_ref())?,
        srm: decode_range("srm", stats.srm.as_ref())?,
        abv: decode_range("abv", stats.abv.as_ref())?,
    }))
}

fn decode_range(field: &str, range: Option<&RawRange>) -> std::result::Result<StatRange, String> {
    let range = range.ok_or_else(|| format!("missing {field} range"))?;
    let (Some(low), Some(high)) = (range.low.as_deref(), range.high.as_deref()) else {
        return Err(format!("incomplete {field} range"));
    };
    StatRange::parse(field, low, high).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_trims_and_drops_empties() {
        let tags = parse_tags(" pale-color, ,standard-strength ").unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("pale-color"));
        assert!(parse_tags("  ").is_none());
    }

    #[test]
    fn summary_stats_are_not_detailed() {
        let xml = r#"<styleguide><class type="beer">
            <category id="21"><name>IPA</name>
              <subcategory id="21B">
                <name>Specialty IPA</name>
                <tags>high-strength, ipa-family</tags>
                <stats><exceptions>See individual types.</exceptions></stats>
              </subcategory>
            </category>
        </class></styleguide>"#;
        let loaded = decode_document(xml).unwrap();
        let style = &loaded.dataset.subcategories[0];
        assert!(style.stats.is_none());
        assert!(style.has_tag("ipa-family"));
    }

    #[test]
    fn malformed_stats_become_an_issue() {
        let xml = r#"<styleguide><class type="beer">
            <category id="1"><name>Standard American Beer</name>
              <subcategory id="1A">
                <name>American Light Lager</name>
                <stats>
                  <og><low>1.028</low><high>1.040</high></og>
                  <fg><low>0.998</low><high>1.008</high></fg>
                  <ibu><low>8</low><high>12</high></ibu>
                  <srm><low>2</low><high>3</high></srm>
                  <abv><low>2.8</low></abv>
                </stats>
              </subcategory>
            </category>
        </class></styleguide>"#;
        let loaded = decode_document(xml).unwrap();
        assert_eq!(loaded.dataset.subcategories.len(), 1);
        assert!(loaded.dataset.subcategories[0].stats.is_none());
        assert!(matches!(
            loaded.issues.as_slice(),
            [DatasetIssue::InvalidStats { style, .. }] if style == "1A"
        ));
    }

    #[test]
    fn missing_class_yields_empty_dataset() {
        let loaded = decode_document("<styleguide></styleguide>").unwrap();
        assert!(loaded.dataset.is_empty());
        assert_eq!(loaded.issues, vec![DatasetIssue::MissingClass]);
    }
}
