//! Range charts of style statistics.
//!
//! Only detailed styles (those with full numeric statistics) are charted;
//! summary entries are skipped.

use bjcp_model::{Statistic, Subcategory, VitalStats};
use serde::Serialize;
use tracing::debug;

use crate::color::{Gradient, SRM_COLORS, ramp_color, srm_high_index, srm_low_index};
use crate::layout::{Dimensions, Margins, ROW_HEIGHT};
use crate::scale::{BandScale, DEFAULT_TICK_COUNT, LinearScale};
use crate::scene::{
    Axis, AxisOrient, ChartItem, ChartKind, ChartScene, ChartSet, Fill, Hover, Legend, Rect,
    Stroke, Swatch, TICK_SIZE, Tick, Title, TooltipAnchor,
};

const SINGLE_MARGINS: Margins = Margins::new(150.0, 50.0, 40.0, 40.0);
const DOUBLE_MARGINS: Margins = Margins::new(50.0, 50.0, 40.0, 40.0);
const BAND_PADDING: f64 = 0.1;
const FADE_OPACITY: f64 = 0.5;
const HIGHLIGHT_FILL: &str = "white";
const BOX_STROKE: Stroke = Stroke {
    color: "black",
    width: 2.0,
};
/// Horizontal nudge of double-range tooltips off the box border.
const TOOLTIP_OFFSET: f64 = 3.0;
const LEGEND_HEIGHT: f64 = 36.0;

/// A style reduced to what charts need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle<'a> {
    pub label: &'a str,
    pub link: &'a str,
    pub stats: &'a VitalStats,
}

/// Detailed styles among `styles`, in order.
#[must_use]
pub fn chartable<'a>(styles: &[&'a Subcategory]) -> Vec<ChartStyle<'a>> {
    styles
        .iter()
        .filter_map(|style| {
            style.stats.as_ref().map(|stats| ChartStyle {
                label: style.short_name(),
                link: &style.reference_link,
                stats,
            })
        })
        .collect()
}

/// How bars of a single-statistic chart are colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Gradient between the colors of the style's SRM range, with a legend.
    #[default]
    SrmGradient,
    /// Flat color picked by the bar's position in the list.
    Ordinal,
}

/// Charts to draw for each redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRequest {
    pub single: Vec<Statistic>,
    pub double: Vec<(Statistic, Statistic)>,
    pub fill: FillMode,
    pub container_width: f64,
}

impl Default for ChartRequest {
    fn default() -> Self {
        Self {
            single: vec![Statistic::Abv],
            double: vec![(Statistic::Abv, Statistic::Ibu)],
            fill: FillMode::default(),
            container_width: 960.0,
        }
    }
}

/// Throw away every chart in `charts` and draw the requested ones again.
///
/// Called after each filter change and each resize. With no detailed style
/// to show, the set ends up empty.
pub fn redraw(charts: &mut ChartSet, styles: &[ChartStyle<'_>], request: &ChartRequest) {
    charts.clear();
    for &stat in &request.single {
        if let Some(scene) = single_range(styles, stat, request.container_width, request.fill) {
            charts.insert(scene);
        }
    }
    for &(x, y) in &request.double {
        if let Some(scene) = double_range(styles, x, y, request.container_width) {
            charts.insert(scene);
        }
    }
    debug!(charts = charts.len(), styles = styles.len(), "charts redrawn");
}

/// One horizontal bar per style over `[low, high]` of `stat`, rows in input
/// order. Returns `None` when there is nothing to draw.
#[must_use]
pub fn single_range(
    styles: &[ChartStyle<'_>],
    stat: Statistic,
    container_width: f64,
    fill: FillMode,
) -> Option<ChartScene> {
    if styles.is_empty() {
        return None;
    }
    let margins = SINGLE_MARGINS;
    let dims = Dimensions::new(
        container_width,
        margins,
        Some(styles.len() as f64 * ROW_HEIGHT),
    );
    let kind = ChartKind::SingleRange { stat };

    let x = LinearScale::new((0.0, max_high(styles, stat)), (0.0, dims.chart_width));
    let y = BandScale::new(styles.len(), (0.0, dims.chart_height), BAND_PADDING);

    let items = styles
        .iter()
        .enumerate()
        .map(|(index, style)| {
            let range = style.stats.range(stat);
            let fill = match fill {
                FillMode::SrmGradient => Fill::Gradient(Gradient::for_srm(style.stats.srm).id),
                FillMode::Ordinal => Fill::Solid(ramp_color(index, styles.len())),
            };
            ChartItem {
                label: style.label.to_string(),
                link: style.link.to_string(),
                rect: Rect {
                    x: x.map(range.low),
                    y: y.position(index),
                    width: x.map(range.high) - x.map(range.low),
                    height: y.bandwidth(),
                },
                fill,
                stroke: None,
                hover: Hover::Fade {
                    opacity: FADE_OPACITY,
                },
                tooltip: TooltipAnchor {
                    x: margins.left + x.map(range.low),
                    y: margins.top + y.position(index),
                },
            }
        })
        .collect();

    let band_ticks = styles
        .iter()
        .enumerate()
        .map(|(index, style)| Tick {
            position: y.center(index),
            label: style.label.to_string(),
        })
        .collect();

    let legend = match fill {
        FillMode::SrmGradient => Some(srm_legend(styles, &margins, &dims)),
        FillMode::Ordinal => None,
    };

    Some(ChartScene {
        class: kind.class(),
        kind,
        title: title(
            format!("{} Ranges of Selected Styles", stat.label()),
            &margins,
            &dims,
        ),
        margins,
        dimensions: dims,
        gradients: match fill {
            FillMode::SrmGradient => gradients(styles),
            FillMode::Ordinal => Vec::new(),
        },
        items,
        x_axis: linear_axis(&x, AxisOrient::Bottom, TICK_SIZE),
        y_axis: Axis {
            orient: AxisOrient::Left,
            range: (0.0, dims.chart_height),
            ticks: band_ticks,
            inner_tick_size: TICK_SIZE,
            outer_tick_size: 0.0,
        },
        legend,
    })
}

/// One box per style spanning `x_stat` horizontally and `y_stat` vertically,
/// larger values higher up. Returns `None` when there is nothing to draw.
#[must_use]
pub fn double_range(
    styles: &[ChartStyle<'_>],
    x_stat: Statistic,
    y_stat: Statistic,
    container_width: f64,
) -> Option<ChartScene> {
    if styles.is_empty() {
        return None;
    }
    let margins = DOUBLE_MARGINS;
    let dims = Dimensions::new(container_width, margins, None);
    let kind = ChartKind::DoubleRange {
        x: x_stat,
        y: y_stat,
    };

    let x = LinearScale::new((0.0, max_high(styles, x_stat)), (0.0, dims.chart_width));
    let y = LinearScale::new((0.0, max_high(styles, y_stat)), (dims.chart_height, 0.0));

    let items = styles
        .iter()
        .map(|style| {
            let xr = style.stats.range(x_stat);
            let yr = style.stats.range(y_stat);
            ChartItem {
                label: style.label.to_string(),
                link: style.link.to_string(),
                rect: Rect {
                    x: x.map(xr.low),
                    y: y.map(yr.high),
                    width: x.map(xr.high) - x.map(xr.low),
                    height: y.map(yr.low) - y.map(yr.high),
                },
                fill: Fill::Gradient(Gradient::for_srm(style.stats.srm).id),
                stroke: Some(BOX_STROKE),
                hover: Hover::RaiseAndFill {
                    fill: HIGHLIGHT_FILL,
                },
                tooltip: TooltipAnchor {
                    x: margins.left + x.map(xr.low) + TOOLTIP_OFFSET,
                    y: margins.top + y.map(yr.high),
                },
            }
        })
        .collect();

    Some(ChartScene {
        class: kind.class(),
        kind,
        title: title(
            format!(
                "{} (x) & {} (y) Ranges of Selected Styles",
                x_stat.label(),
                y_stat.label()
            ),
            &margins,
            &dims,
        ),
        margins,
        dimensions: dims,
        gradients: gradients(styles),
        items,
        x_axis: linear_axis(&x, AxisOrient::Bottom, 0.0),
        y_axis: linear_axis(&y, AxisOrient::Left, 0.0),
        legend: None,
    })
}

fn max_high(styles: &[ChartStyle<'_>], stat: Statistic) -> f64 {
    styles
        .iter()
        .map(|style| style.stats.range(stat).high)
        .fold(0.0, f64::max)
}

fn title(text: String, margins: &Margins, dims: &Dimensions) -> Title {
    Title {
        text,
        x: margins.left + dims.chart_width / 2.0,
        y: margins.top / 2.0,
    }
}

/// One gradient per distinct SRM color pair, in first-use order.
fn gradients(styles: &[ChartStyle<'_>]) -> Vec<Gradient> {
    let mut out: Vec<Gradient> = Vec::new();
    for style in styles {
        let gradient = Gradient::for_srm(style.stats.srm);
        if !out.iter().any(|existing| existing.id == gradient.id) {
            out.push(gradient);
        }
    }
    out
}

fn linear_axis(scale: &LinearScale, orient: AxisOrient, outer_tick_size: f64) -> Axis {
    let precision = scale.tick_precision(DEFAULT_TICK_COUNT);
    let ticks = scale
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|value| Tick {
            position: scale.map(value),
            label: format!("{value:.precision$}"),
        })
        .collect();
    let (r0, r1) = scale.range();
    Axis {
        orient,
        range: (r0.min(r1), r0.max(r1)),
        ticks,
        inner_tick_size: TICK_SIZE,
        outer_tick_size,
    }
}

/// Swatches for every SRM value spanned by the charted styles.
fn srm_legend(styles: &[ChartStyle<'_>], margins: &Margins, dims: &Dimensions) -> Legend {
    let first = styles
        .iter()
        .map(|style| srm_low_index(style.stats.srm))
        .min()
        .unwrap_or(1);
    let last = styles
        .iter()
        .map(|style| srm_high_index(style.stats.srm))
        .max()
        .unwrap_or(first);
    let swatches = (first..=last)
        .map(|index| Swatch {
            label: index.to_string(),
            color: SRM_COLORS[index],
        })
        .collect();
    Legend {
        title: "SRM".to_string(),
        swatches,
        x: margins.left,
        y: dims.svg_height,
        width: dims.chart_width,
        height: LEGEND_HEIGHT,
    }
}
