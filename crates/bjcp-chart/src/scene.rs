//! Drawable scene description.
//!
//! A scene is plain data: rectangles, axes, gradients and interaction hints in
//! pixel coordinates. Building one needs no drawing surface, and any backend
//! (see [`crate::svg`]) can render it.

use bjcp_model::Statistic;
use serde::Serialize;

use crate::color::Gradient;
use crate::layout::{Dimensions, Margins};

/// Which chart a scene draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    /// One horizontal bar per style.
    SingleRange { stat: Statistic },
    /// One box per style spanning two statistics.
    DoubleRange { x: Statistic, y: Statistic },
}

impl ChartKind {
    /// Marker class unique to the statistic combination. Redrawing a chart
    /// with the same marker replaces the previous drawing.
    #[must_use]
    pub fn class(&self) -> String {
        match self {
            Self::SingleRange { stat } => format!("name-{}", stat.key()),
            Self::DoubleRange { x, y } => format!("{}-{}", y.key(), x.key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Solid(&'static str),
    /// Reference to one of the scene's gradients by id.
    Gradient(String),
}

impl Fill {
    /// Paint value as written in a `fill` attribute.
    #[must_use]
    pub fn paint(&self) -> String {
        match self {
            Self::Solid(color) => (*color).to_string(),
            Self::Gradient(id) => format!("url(#{id})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

/// What happens while the pointer is over an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hover {
    /// Fade the item to `opacity`.
    Fade { opacity: f64 },
    /// Draw the item above all others and paint it flat `fill`; both are
    /// undone when the pointer leaves.
    RaiseAndFill { fill: &'static str },
}

/// Where the tooltip's top-left corner goes, relative to the chart origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipAnchor {
    pub x: f64,
    pub y: f64,
}

/// One style drawn in a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartItem {
    pub label: String,
    /// Reference page opened in a new browsing context on click.
    pub link: String,
    /// Position inside the plot area.
    pub rect: Rect,
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    pub hover: Hover,
    pub tooltip: TooltipAnchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Extent of the axis line along its direction.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub inner_tick_size: f64,
    pub outer_tick_size: f64,
}

/// Default tick length of an axis.
pub const TICK_SIZE: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub label: String,
    pub color: &'static str,
}

/// Color key for the SRM ramp, drawn below the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub swatches: Vec<Swatch>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScene {
    pub kind: ChartKind,
    pub class: String,
    pub title: Title,
    pub margins: Margins,
    pub dimensions: Dimensions,
    pub gradients: Vec<Gradient>,
    pub items: Vec<ChartItem>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
}

impl ChartScene {
    /// Total drawing height including the legend, if any.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.dimensions.svg_height + self.legend.as_ref().map_or(0.0, |legend| legend.height)
    }
}

/// The charts currently on display, in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSet {
    scenes: Vec<ChartScene>,
}

impl ChartSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `scene`, replacing any scene with the same marker class in place.
    pub fn insert(&mut self, scene: ChartScene) {
        match self.scenes.iter_mut().find(|current| current.class == scene.class) {
            Some(current) => *current = scene,
            None => self.scenes.push(scene),
        }
    }

    /// Drop the scene with marker `class`.
    pub fn remove(&mut self, class: &str) -> Option<ChartScene> {
        let index = self.scenes.iter().position(|scene| scene.class == class)?;
        Some(self.scenes.remove(index))
    }

    pub fn clear(&mut self) {
        self.scenes.clear();
    }

    #[must_use]
    pub fn get(&self, class: &str) -> Option<&ChartScene> {
        self.scenes.iter().find(|scene| scene.class == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChartScene> {
        self.scenes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
