#![allow(missing_docs)]

use bjcp_chart::{
    ChartRequest, ChartSet, FillMode, Hover, MIN_WIDTH, chartable, double_range, redraw,
    render_svg, single_range,
};
use bjcp_model::{StatRange, Statistic, Subcategory, VitalStats};

fn stats(abv: (f64, f64), ibu: (f64, f64), srm: (f64, f64)) -> VitalStats {
    VitalStats {
        og: StatRange::new(1.040, 1.060),
        fg: StatRange::new(1.008, 1.014),
        ibu: StatRange::new(ibu.0, ibu.1),
        srm: StatRange::new(srm.0, srm.1),
        abv: StatRange::new(abv.0, abv.1),
    }
}

fn styles() -> Vec<Subcategory> {
    vec![
        Subcategory::new(
            "21B",
            "Specialty IPA: Rye IPA",
            None,
            Some(stats((5.5, 8.0), (50.0, 75.0), (6.0, 14.0))),
        )
        .unwrap(),
        Subcategory::new(
            "1A",
            "American Light Lager",
            None,
            Some(stats((2.8, 4.2), (8.0, 12.0), (2.0, 3.0))),
        )
        .unwrap(),
        Subcategory::new("21B", "Specialty IPA", None, None).unwrap(),
    ]
}

#[test]
fn test_summary_styles_are_not_charted() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let labels: Vec<&str> = charted.iter().map(|style| style.label).collect();
    assert_eq!(labels, vec!["Rye IPA", "American Light Lager"]);
    assert_eq!(
        charted[0].link,
        "http://www.bjcp.org/style/2015/21/21B/specialty-ipa-rye-ipa/"
    );
}

#[test]
fn test_single_range_rows_follow_input_order() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let scene = single_range(&charted, Statistic::Abv, 960.0, FillMode::SrmGradient).unwrap();

    assert_eq!(scene.class, "name-abv");
    assert_eq!(scene.title.text, "ABV Ranges of Selected Styles");
    assert_eq!(scene.dimensions.chart_width, 760.0);
    assert_eq!(scene.dimensions.chart_height, 40.0);
    assert_eq!(scene.items.len(), 2);

    let first = &scene.items[0];
    assert_eq!(first.label, "Rye IPA");
    assert_eq!(first.rect.x, 522.5);
    assert_eq!(first.rect.width, 237.5);
    assert_eq!(first.rect.y, 0.0);
    assert!(scene.items[1].rect.y > first.rect.y);
    assert_eq!(first.hover, Hover::Fade { opacity: 0.5 });
    assert_eq!(first.tooltip.x, 150.0 + 522.5);
    assert_eq!(first.tooltip.y, 40.0);

    let ticks: Vec<&str> = scene.y_axis.ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(ticks, vec!["Rye IPA", "American Light Lager"]);
}

#[test]
fn test_single_range_legend_spans_the_srm_values_in_view() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let scene = single_range(&charted, Statistic::Abv, 960.0, FillMode::SrmGradient).unwrap();

    let legend = scene.legend.as_ref().unwrap();
    assert_eq!(legend.swatches.len(), 13);
    assert_eq!(legend.swatches[0].label, "2");
    assert_eq!(legend.swatches[12].label, "14");
    assert_eq!(scene.total_height(), scene.dimensions.svg_height + legend.height);

    let ids: Vec<&str> = scene.gradients.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["gradient-F8A600-C35900", "gradient-FFD878-FFCA5A"]);
}

#[test]
fn test_ordinal_fill_has_no_legend_or_gradients() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let scene = single_range(&charted, Statistic::Ibu, 960.0, FillMode::Ordinal).unwrap();
    assert!(scene.legend.is_none());
    assert!(scene.gradients.is_empty());
    assert_eq!(scene.class, "name-ibu");
}

#[test]
fn test_double_range_boxes_grow_upwards() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let scene = double_range(&charted, Statistic::Abv, Statistic::Ibu, 960.0).unwrap();

    assert_eq!(scene.class, "ibu-abv");
    assert_eq!(scene.title.text, "ABV (x) & IBU (y) Ranges of Selected Styles");
    assert_eq!(scene.dimensions.chart_width, 860.0);
    assert_eq!(scene.dimensions.chart_height, 537.5);

    let rye = &scene.items[0];
    // ibu 75 is the top of the domain
    assert_eq!(rye.rect.y, 0.0);
    assert!((rye.rect.height - 537.5 / 3.0).abs() < 1e-9);
    assert_eq!(rye.stroke.unwrap().width, 2.0);
    assert_eq!(rye.hover, Hover::RaiseAndFill { fill: "white" });
    assert_eq!(rye.tooltip.x, 50.0 + rye.rect.x + 3.0);
    assert!(scene.legend.is_none());
}

#[test]
fn test_narrow_containers_use_minimum_width() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let scene = double_range(&charted, Statistic::Abv, Statistic::Ibu, 120.0).unwrap();
    assert_eq!(scene.dimensions.svg_width, MIN_WIDTH);
}

#[test]
fn test_redraw_replaces_and_clears() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let request = ChartRequest::default();

    let mut charts = ChartSet::new();
    redraw(&mut charts, &charted, &request);
    redraw(&mut charts, &charted, &request);
    let classes: Vec<&str> = charts.iter().map(|scene| scene.class.as_str()).collect();
    assert_eq!(classes, vec!["name-abv", "ibu-abv"]);

    redraw(&mut charts, &[], &request);
    assert!(charts.is_empty());
}

#[test]
fn test_chart_set_insert_replaces_same_marker() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);

    let mut charts = ChartSet::new();
    charts.insert(single_range(&charted, Statistic::Abv, 960.0, FillMode::SrmGradient).unwrap());
    charts.insert(single_range(&charted[..1], Statistic::Abv, 960.0, FillMode::SrmGradient).unwrap());
    assert_eq!(charts.len(), 1);
    assert_eq!(charts.get("name-abv").unwrap().items.len(), 1);
    assert!(charts.remove("name-abv").is_some());
    assert!(charts.get("name-abv").is_none());
}

#[test]
fn test_svg_carries_links_tooltips_and_gradients() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let scene = single_range(&charted, Statistic::Abv, 960.0, FillMode::SrmGradient).unwrap();
    let svg = render_svg(&scene).unwrap();

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"name-abv\""));
    assert!(svg.contains("width=\"960\" height=\"156\""));
    assert!(svg.contains(
        "<a href=\"http://www.bjcp.org/style/2015/1/1A/american-light-lager/\" target=\"_blank\">"
    ));
    assert!(svg.contains("<title>Rye IPA</title>"));
    assert!(svg.contains("<linearGradient id=\"gradient-F8A600-C35900\""));
    assert!(svg.contains("fill=\"url(#gradient-F8A600-C35900)\""));
    assert!(svg.contains("svg.name-abv a:hover rect { opacity: 0.5; }"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_double_range_svg_raises_on_hover() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let scene = double_range(&charted, Statistic::Abv, Statistic::Ibu, 960.0).unwrap();
    let svg = render_svg(&scene).unwrap();

    assert!(svg.contains("onmouseover=\"this.parentNode.appendChild(this)\""));
    assert!(svg.contains("stroke=\"black\" stroke-width=\"2\""));
    assert!(svg.contains("svg.ibu-abv a:hover rect { fill: white; }"));
}

#[test]
fn test_chart_title_snapshot() {
    let all = styles();
    let refs: Vec<&Subcategory> = all.iter().collect();
    let charted = chartable(&refs);
    let scene = single_range(&charted, Statistic::Srm, 960.0, FillMode::Ordinal).unwrap();
    insta::assert_snapshot!(scene.title.text, @"SRM Ranges of Selected Styles");
}
