//! Serde schema of the guideline document.
//!
//! Only the parts the explorer reads are modelled. Every field is optional or
//! defaulted so that a document that drifted from this shape still decodes;
//! the loader turns missing pieces into [`crate::DatasetIssue`]s.
//!
//! ```text
//! styleguide
//! └── class @type
//!     ├── introduction
//!     │   └── section
//!     │       ├── sectiontitle
//!     │       └── paragraph
//!     │           └── table
//!     │               └── tr ── th* | td*
//!     └── category @id
//!         ├── name
//!         └── subcategory @id
//!             ├── name
//!             ├── tags            (comma separated)
//!             └── stats
//!                 ├── exceptions  (summary entries only)
//!                 └── og | fg | ibu | srm | abv ── low, high
//! ```

use serde::Deserialize;
use serde::de::IgnoredAny;

#[derive(Debug, Default, Deserialize)]
pub struct StyleGuide {
    #[serde(rename = "class", default)]
    pub classes: Vec<StyleClass>,
}

impl StyleGuide {
    /// The beer class, or the first class when none is labelled as beer.
    pub fn beer_class(&self) -> Option<&StyleClass> {
        self.classes
            .iter()
            .find(|class| class.kind.as_deref() == Some("beer"))
            .or_else(|| self.classes.first())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StyleClass {
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    pub introduction: Option<Introduction>,
    #[serde(rename = "category", default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Introduction {
    #[serde(rename = "section", default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Section {
    pub sectiontitle: Option<String>,
    #[serde(rename = "paragraph", default)]
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Paragraph {
    pub table: Option<Table>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Table {
    #[serde(rename = "tr", default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub th: Vec<Cell>,
    #[serde(default)]
    pub td: Vec<Cell>,
}

/// Table cell; attributes such as `colspan` are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Cell {
    #[serde(rename = "$value", default)]
    pub content: Vec<Inline>,
}

impl Cell {
    /// Text of the cell and its inline markup, with whitespace collapsed.
    pub fn text(&self) -> String {
        let mut words = Vec::new();
        self.collect_words(&mut words);
        words.join(" ")
    }

    fn collect_words<'a>(&'a self, words: &mut Vec<&'a str>) {
        for part in &self.content {
            match part {
                Inline::Text(text) => words.extend(text.split_whitespace()),
                Inline::Italic(cell)
                | Inline::Bold(cell)
                | Inline::Emphasis(cell)
                | Inline::Strong(cell)
                | Inline::Span(cell)
                | Inline::Link(cell) => cell.collect_words(words),
                Inline::Other => {}
            }
        }
    }
}

/// Mixed content of a cell. Unknown elements are skipped with their subtree.
#[derive(Debug, Deserialize)]
pub enum Inline {
    #[serde(rename = "$text")]
    Text(String),
    #[serde(rename = "i")]
    Italic(Cell),
    #[serde(rename = "b")]
    Bold(Cell),
    #[serde(rename = "em")]
    Emphasis(Cell),
    #[serde(rename = "strong")]
    Strong(Cell),
    #[serde(rename = "span")]
    Span(Cell),
    #[serde(rename = "a")]
    Link(Cell),
    #[serde(other)]
    Other,
}

#[derive(Debug, Default, Deserialize)]
pub struct Category {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "subcategory", default)]
    pub subcategories: Vec<RawSubcategory>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSubcategory {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub tags: Option<String>,
    pub stats: Option<RawStats>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStats {
    pub exceptions: Option<IgnoredAny>,
    pub og: Option<RawRange>,
    pub fg: Option<RawRange>,
    pub ibu: Option<RawRange>,
    pub srm: Option<RawRange>,
    pub abv: Option<RawRange>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRange {
    pub low: Option<String>,
    pub high: Option<String>,
}
