//! Integration tests for loading a session from a local guideline document.

use std::path::PathBuf;

use bjcp_chart::ChartRequest;
use bjcp_cli::session::Session;
use bjcp_core::FilterSelection;
use bjcp_ingest::DatasetSource;
use bjcp_report::render_results;

fn fixture() -> DatasetSource {
    DatasetSource::File(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../bjcp-ingest/tests/fixtures/styleguide.xml"),
    )
}

fn names(session: &Session) -> Vec<String> {
    session
        .state
        .matching()
        .iter()
        .map(|style| style.name.clone())
        .collect()
}

#[test]
fn test_open_local_source_populates_state() {
    let session = Session::open(fixture()).unwrap();
    assert!(session.source.is_debug());
    assert!(session.state.is_loaded());
    assert_eq!(session.state.tag_descriptions().len(), 3);
    // Untagged 27 never matches.
    assert_eq!(names(&session).len(), 6);
    assert!(!names(&session).contains(&"Historical Beer".to_string()));
}

#[test]
fn test_filters_by_label_and_value() {
    let mut session = Session::open(fixture()).unwrap();
    let selections: Vec<FilterSelection> = vec![
        "color=Pale".parse().unwrap(),
        "Strength=standard-strength".parse().unwrap(),
    ];
    session.apply_filters(&selections).unwrap();
    assert_eq!(
        names(&session),
        vec!["American Lager", "Historical Beer: Gose"]
    );
}

#[test]
fn test_filtered_results_json() {
    let mut session = Session::open(fixture()).unwrap();
    let selections: Vec<FilterSelection> = vec![
        "Color=Pale".parse().unwrap(),
        "Strength=Standard".parse().unwrap(),
    ];
    session.apply_filters(&selections).unwrap();

    insta::assert_json_snapshot!(render_results(&session.state.matching()), @r#"
    {
      "entries": [
        {
          "name": "American Lager",
          "url": "http://www.bjcp.org/style/2015/1/1B/american-lager/",
          "target": "_blank"
        },
        {
          "name": "Historical Beer: Gose",
          "url": "http://www.bjcp.org/style/2015/27/27A/historical-beer-gose/",
          "target": "_blank"
        }
      ]
    }
    "#);
}

#[test]
fn test_repeated_filter_cancels_out() {
    let mut session = Session::open(fixture()).unwrap();
    let pale: FilterSelection = "Color=pale-color".parse().unwrap();
    session.apply_filters(&[pale.clone(), pale]).unwrap();
    assert!(session.state.filters().is_empty());
    assert_eq!(names(&session).len(), 6);
}

#[test]
fn test_unknown_filter_is_an_error() {
    let mut session = Session::open(fixture()).unwrap();
    let bogus: FilterSelection = "Color=purple".parse().unwrap();
    let error = session.apply_filters(&[bogus]).unwrap_err();
    assert!(format!("{error:#}").contains("Color=purple"));
}

#[test]
fn test_charts_skip_summary_styles() {
    let mut session = Session::open(fixture()).unwrap();
    session
        .apply_filters(&["Style Family=IPA".parse::<FilterSelection>().unwrap()])
        .unwrap();
    assert_eq!(
        names(&session),
        vec!["American IPA", "Specialty IPA", "Specialty IPA: Rye IPA"]
    );

    let charts = session.charts(&ChartRequest::default());
    let single = charts.get("name-abv").unwrap();
    let labels: Vec<&str> = single.items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["American IPA", "Rye IPA"]);
    assert!(charts.get("ibu-abv").is_some());
}

#[test]
fn test_no_detailed_match_draws_nothing() {
    let mut session = Session::open(fixture()).unwrap();
    // No fixture style is dark.
    session
        .apply_filters(&["Color=dark-color".parse::<FilterSelection>().unwrap()])
        .unwrap();
    assert!(names(&session).is_empty());
    assert!(session.charts(&ChartRequest::default()).is_empty());
}

#[test]
fn test_missing_source_reports_path() {
    let source = DatasetSource::File(PathBuf::from("/nonexistent/styleguide.xml"));
    let error = Session::open(source).unwrap_err();
    assert!(format!("{error:#}").contains("/nonexistent/styleguide.xml"));
}
