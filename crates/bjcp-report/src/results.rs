//! Ordered list of styles matching the current filters.

use std::io::Write;

use anyhow::{Context, Result};
use bjcp_core::NEW_CONTEXT;
use bjcp_model::Subcategory;
use quick_xml::Writer;
use serde::Serialize;

use crate::common::{close, open, write_text_element};

/// Id of the results container.
pub const RESULTS_ID: &str = "filter-results";

/// One line of the results list: a style name linking to its reference page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub name: String,
    pub url: String,
    pub target: &'static str,
}

/// Rendered results. A new list replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultList {
    entries: Vec<ResultEntry>,
}

impl ResultList {
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One entry per matching style, in filtered order.
pub fn render_results(matches: &[&Subcategory]) -> ResultList {
    ResultList {
        entries: matches
            .iter()
            .map(|style| ResultEntry {
                name: style.name.clone(),
                url: style.reference_link.clone(),
                target: NEW_CONTEXT,
            })
            .collect(),
    }
}

/// Write the list as `<ul id="filter-results">`.
pub fn write_results<W: Write>(writer: &mut Writer<W>, results: &ResultList) -> Result<()> {
    open(writer, "ul", &[("id", RESULTS_ID)])?;
    for entry in results.iter() {
        open(writer, "li", &[])?;
        write_text_element(
            writer,
            "a",
            &[("href", entry.url.as_str()), ("target", entry.target)],
            &entry.name,
        )?;
        close(writer, "li")?;
    }
    close(writer, "ul")?;
    Ok(())
}

/// The results list as a standalone HTML fragment.
pub fn results_html(results: &ResultList) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_results(&mut writer, results)?;
    String::from_utf8(writer.into_inner()).context("results html is not utf-8")
}
