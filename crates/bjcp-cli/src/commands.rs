use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bjcp_chart::{ChartRequest, ChartSet, render_svg};
use bjcp_cli::session::Session;
use bjcp_ingest::DatasetSource;
use bjcp_report::{PageOptions, render_results, write_page};

use crate::cli::{ChartArgs, ChartOptions, OutputFormatArg, PageArgs, SearchArgs, StylesArgs};
use crate::summary::{print_issues, print_styles, print_suggestions, print_tags, print_written};

pub fn run_tags(source: DatasetSource) -> Result<()> {
    let session = open(source)?;
    print_tags(session.state.tag_descriptions());
    Ok(())
}

pub fn run_styles(source: DatasetSource, args: &StylesArgs) -> Result<()> {
    let mut session = open(source)?;
    session.apply_filters(&args.filter.filters)?;
    let matching = session.state.matching();
    match args.format {
        OutputFormatArg::Table => {
            print_styles(&matching, session.state.subcategories().len());
        }
        OutputFormatArg::Json => {
            let results = render_results(&matching);
            let json = serde_json::to_string_pretty(&results).context("serialize results")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_search(source: DatasetSource, args: &SearchArgs) -> Result<()> {
    let session = open(source)?;
    let suggestions = session
        .state
        .search_index()
        .suggestions(&args.query)
        .with_context(|| format!("search for {:?}", args.query))?;
    match args.format {
        OutputFormatArg::Table => print_suggestions(&args.query, &suggestions),
        OutputFormatArg::Json => {
            let json =
                serde_json::to_string_pretty(&suggestions).context("serialize suggestions")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_chart(source: DatasetSource, args: &ChartArgs) -> Result<Vec<PathBuf>> {
    let mut session = open(source)?;
    session.apply_filters(&args.filter.filters)?;
    let charts = session.charts(&chart_request(&args.chart));

    let span = info_span!("write_charts", dir = %args.output_dir.display());
    let _guard = span.enter();
    let written = write_charts(&charts, &args.output_dir)?;
    info!(files = written.len(), "charts written");
    print_written("Chart", &written);
    Ok(written)
}

pub fn run_page(source: DatasetSource, args: &PageArgs) -> Result<PathBuf> {
    let mut session = open(source)?;
    session.apply_filters(&args.filter.filters)?;
    let charts = session.charts(&chart_request(&args.chart));
    let options = match &args.title {
        Some(title) => PageOptions::new(title.clone()),
        None => PageOptions::default(),
    };
    write_page(&args.output, &session.state, &charts, &options)
        .with_context(|| format!("write page {}", args.output.display()))?;
    print_written("Page", std::slice::from_ref(&args.output));
    Ok(args.output.clone())
}

fn open(source: DatasetSource) -> Result<Session> {
    let session = Session::open(source)?;
    if session.source.is_debug() {
        print_issues(&session.issues);
    }
    Ok(session)
}

fn chart_request(options: &ChartOptions) -> ChartRequest {
    ChartRequest {
        single: options.single.clone(),
        double: options.double.iter().map(|pair| (pair.x, pair.y)).collect(),
        fill: options.fill.into(),
        container_width: options.width,
    }
}

/// One `<class>.svg` per chart. Files of charts no longer drawn are left
/// alone.
fn write_charts(charts: &ChartSet, output_dir: &std::path::Path) -> Result<Vec<PathBuf>> {
    if charts.is_empty() {
        return Ok(Vec::new());
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let mut written = Vec::with_capacity(charts.len());
    for scene in charts.iter() {
        let path = output_dir.join(format!("{}.svg", scene.class));
        let svg = render_svg(scene).with_context(|| format!("render {}", scene.class))?;
        fs::write(&path, svg).with_context(|| format!("write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
