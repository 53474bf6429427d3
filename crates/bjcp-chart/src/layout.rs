//! Chart sizing.

use serde::Serialize;

/// Narrowest chart drawn, whatever the container width.
pub const MIN_WIDTH: f64 = 300.0;

/// Width-to-height ratio of charts whose height follows their width.
pub const WIDTH_TO_HEIGHT: f64 = 1.6;

/// Height of one style row in single-statistic charts.
pub const ROW_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Outer (SVG) and inner (plot area) size of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub svg_width: f64,
    pub svg_height: f64,
    pub chart_width: f64,
    pub chart_height: f64,
}

impl Dimensions {
    /// Size a chart for a container `container_width` pixels wide.
    ///
    /// With no `chart_height`, the plot area keeps [`WIDTH_TO_HEIGHT`].
    #[must_use]
    pub fn new(container_width: f64, margins: Margins, chart_height: Option<f64>) -> Self {
        let svg_width = container_width.max(MIN_WIDTH);
        let chart_width = svg_width - margins.left - margins.right;
        let chart_height = chart_height.unwrap_or(chart_width / WIDTH_TO_HEIGHT);
        Self {
            svg_width,
            svg_height: chart_height + margins.top + margins.bottom,
            chart_width,
            chart_height,
        }
    }
}
