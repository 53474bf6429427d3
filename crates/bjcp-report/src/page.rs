//! Standalone HTML page: filter groups, results and charts.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bjcp_chart::{ChartSet, write_svg};
use bjcp_core::AppState;
use bjcp_model::StyleTagDescription;
use quick_xml::Writer;
use quick_xml::events::{BytesText, Event};
use tracing::info;

use crate::common::{close, empty, open, write_text_element};
use crate::results::{render_results, write_results};

const FILTER_GROUP_ID: &str = "filter-group";
const CHARTS_ID: &str = "charts";
const SEARCH_LIST_ID: &str = "style-names";
/// Opens the chosen suggestion's reference page and switches to it.
const SEARCH_HANDLER: &str = "for (const option of this.list.options) { \
if (option.value === this.value) { \
const opened = window.open(option.dataset.url, option.dataset.target); \
if (opened) opened.focus(); break; } }";

const PAGE_CSS: &str = "\
body { font-family: sans-serif; margin: 2em; }
fieldset.filter-group { display: inline-block; vertical-align: top; }
.filter-option { display: block; }
.filter-option.selected { font-weight: bold; }
#charts svg { display: block; margin-bottom: 2em; }";

/// Options for page output.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
}

impl PageOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::new("BJCP 2015 Style Explorer")
    }
}

/// Render the page for the current application state and charts.
pub fn render_page(state: &AppState, charts: &ChartSet, options: &PageOptions) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_document(&mut writer, state, charts, options)?;
    String::from_utf8(writer.into_inner()).context("page html is not utf-8")
}

/// Write the page to `output_path`, replacing any previous page.
pub fn write_page(
    output_path: &Path,
    state: &AppState,
    charts: &ChartSet,
    options: &PageOptions,
) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 2);
    write_document(&mut writer, state, charts, options)?;
    writer
        .into_inner()
        .flush()
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        path = %output_path.display(),
        charts = charts.len(),
        "page written"
    );
    Ok(())
}

fn write_document<W: Write>(
    writer: &mut Writer<W>,
    state: &AppState,
    charts: &ChartSet,
    options: &PageOptions,
) -> Result<()> {
    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    open(writer, "html", &[("lang", "en")])?;

    open(writer, "head", &[])?;
    empty(writer, "meta", &[("charset", "utf-8")])?;
    write_text_element(writer, "title", &[], &options.title)?;
    write_text_element(writer, "style", &[], PAGE_CSS)?;
    close(writer, "head")?;

    open(writer, "body", &[])?;
    write_text_element(writer, "h1", &[], &options.title)?;
    write_search(writer, state)?;

    open(writer, "div", &[("id", FILTER_GROUP_ID)])?;
    for description in state.tag_descriptions() {
        write_filter_group(writer, description, state.filters().get(&description.category))?;
    }
    close(writer, "div")?;

    let matches = state.matching();
    write_results(writer, &render_results(&matches))?;

    open(writer, "div", &[("id", CHARTS_ID)])?;
    for scene in charts.iter() {
        write_svg(writer, scene)?;
    }
    close(writer, "div")?;

    close(writer, "body")?;
    close(writer, "html")?;
    Ok(())
}

/// Search box with every style name as a suggestion. Choosing one navigates
/// to its reference page.
fn write_search<W: Write>(writer: &mut Writer<W>, state: &AppState) -> Result<()> {
    empty(
        writer,
        "input",
        &[
            ("id", "style-search"),
            ("type", "search"),
            ("list", SEARCH_LIST_ID),
            ("placeholder", "Search styles"),
            ("onchange", SEARCH_HANDLER),
        ],
    )?;
    open(writer, "datalist", &[("id", SEARCH_LIST_ID)])?;
    // An empty query matches every style.
    let suggestions = state.search_index().suggestions("")?;
    for suggestion in &suggestions {
        let navigation = suggestion.select();
        let mut attrs = vec![
            ("value", suggestion.name.as_str()),
            ("data-url", navigation.url.as_str()),
            ("data-target", navigation.target),
        ];
        if let Some(summary) = &suggestion.summary {
            attrs.push(("label", summary.as_str()));
        }
        empty(writer, "option", &attrs)?;
    }
    close(writer, "datalist")?;
    Ok(())
}

fn write_filter_group<W: Write>(
    writer: &mut Writer<W>,
    description: &StyleTagDescription,
    selected: Option<&str>,
) -> Result<()> {
    open(
        writer,
        "fieldset",
        &[
            ("class", "filter-group"),
            ("data-category", description.category.as_str()),
        ],
    )?;
    write_text_element(writer, "legend", &[], &description.category)?;
    for (entry, label) in description.labelled_tags() {
        let class = if selected == Some(entry.tag.as_str()) {
            "filter-option selected"
        } else {
            "filter-option"
        };
        write_text_element(
            writer,
            "span",
            &[
                ("class", class),
                ("data-tag", entry.tag.as_str()),
                ("title", entry.meaning.as_str()),
            ],
            &label,
        )?;
    }
    close(writer, "fieldset")?;
    Ok(())
}
