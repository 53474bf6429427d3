#![allow(missing_docs)]

use std::collections::BTreeSet;

use bjcp_chart::{ChartRequest, ChartSet, chartable, redraw};
use bjcp_core::AppState;
use bjcp_model::{Dataset, StatRange, StyleTagDescription, Subcategory, TagEntry, VitalStats};
use bjcp_report::{PageOptions, render_page, render_results, results_html, write_page};

fn stats() -> VitalStats {
    VitalStats {
        og: StatRange::new(1.028, 1.040),
        fg: StatRange::new(0.998, 1.008),
        ibu: StatRange::new(8.0, 12.0),
        srm: StatRange::new(2.0, 3.0),
        abv: StatRange::new(2.8, 4.2),
    }
}

fn tags(values: &[&str]) -> Option<BTreeSet<String>> {
    Some(values.iter().map(|value| (*value).to_string()).collect())
}

fn dataset() -> Dataset {
    Dataset {
        tag_descriptions: vec![StyleTagDescription {
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
        }],
        subcategories: vec![
            Subcategory::new("1A", "American Light Lager", tags(&["pale-color"]), Some(stats()))
                .unwrap(),
            Subcategory::new("20C", "Imperial Stout", tags(&["dark-color"]), None).unwrap(),
        ],
    }
}

#[test]
fn test_results_keep_filtered_order_and_open_new_context() {
    let data = dataset();
    let refs: Vec<&Subcategory> = data.subcategories.iter().collect();
    let results = render_results(&refs);
    assert_eq!(results.len(), 2);
    assert_eq!(results.entries()[0].name, "American Light Lager");
    assert_eq!(
        results.entries()[1].url,
        "http://www.bjcp.org/style/2015/20/20C/imperial-stout/"
    );
    assert!(results.iter().all(|entry| entry.target == "_blank"));
}

#[test]
fn test_empty_results_render_an_empty_list() {
    let results = render_results(&[]);
    assert!(results.is_empty());
    insta::assert_snapshot!(results_html(&results).unwrap(), @r#"
    <ul id="filter-results">
    </ul>
    "#);
}

#[test]
fn test_results_html_links_each_style() {
    let data = dataset();
    let refs: Vec<&Subcategory> = data.subcategories.iter().take(1).collect();
    let html = results_html(&render_results(&refs)).unwrap();
    insta::assert_snapshot!(html, @r#"
    <ul id="filter-results">
      <li>
        <a href="http://www.bjcp.org/style/2015/1/1A/american-light-lager/" target="_blank">American Light Lager</a>
      </li>
    </ul>
    "#);
}

#[test]
fn test_page_has_named_containers_and_marks_selection() {
    let mut state = AppState::new();
    state.populate(dataset());
    state.toggle("Color", "pale-color");

    let matching = state.matching();
    let mut charts = ChartSet::new();
    redraw(&mut charts, &chartable(&matching), &ChartRequest::default());

    let html = render_page(&state, &charts, &PageOptions::default()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div id=\"filter-group\">"));
    assert!(html.contains("<ul id=\"filter-results\">"));
    assert!(html.contains("<div id=\"charts\">"));
    assert!(html.contains(
        "<span class=\"filter-option selected\" data-tag=\"pale-color\" title=\"Straw to gold\">Pale</span>"
    ));
    assert!(html.contains(
        "<span class=\"filter-option\" data-tag=\"dark-color\" title=\"Brown to black\">Dark</span>"
    ));
    assert!(html.contains(">American Light Lager</a>"));
    assert!(!html.contains(">Imperial Stout</a>"));
    assert!(html.contains("class=\"name-abv\""));
    assert!(html.contains("class=\"ibu-abv\""));
    assert!(html.contains("label=\"2.8-4.2% ABV; 8-12 IBU; 2-3L\u{b0} SRM\""));
}

#[test]
fn test_search_suggestions_open_reference_pages() {
    let mut state = AppState::new();
    state.populate(dataset());

    let html = render_page(&state, &ChartSet::new(), &PageOptions::default()).unwrap();
    assert!(html.contains(
        "<option value=\"American Light Lager\" \
         data-url=\"http://www.bjcp.org/style/2015/1/1A/american-light-lager/\" \
         data-target=\"_blank\" label=\"2.8-4.2% ABV; 8-12 IBU; 2-3L\u{b0} SRM\"/>"
    ));
    assert!(html.contains(
        "<option value=\"Imperial Stout\" \
         data-url=\"http://www.bjcp.org/style/2015/20/20C/imperial-stout/\" \
         data-target=\"_blank\"/>"
    ));

    let input = html
        .lines()
        .find(|line| line.contains("id=\"style-search\""))
        .unwrap();
    assert!(input.contains("onchange=\""));
    assert!(input.contains("window.open(option.dataset.url, option.dataset.target)"));
    assert!(input.contains("opened.focus()"));
}

#[test]
fn test_page_before_load_is_empty_but_complete() {
    let state = AppState::new();
    let html = render_page(&state, &ChartSet::new(), &PageOptions::new("Styles")).unwrap();
    assert!(html.contains("<title>Styles</title>"));
    assert!(html.contains("<ul id=\"filter-results\">"));
    assert!(!html.contains("<svg"));
}

#[test]
fn test_write_page_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("index.html");
    let mut state = AppState::new();
    state.populate(dataset());

    write_page(&path, &state, &ChartSet::new(), &PageOptions::default()).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Imperial Stout"));
}
