//! Range charts for BJCP style statistics.
//!
//! [`range`] turns matching styles into [`ChartScene`]s, plain data in pixel
//! coordinates, and [`svg`] writes those scenes out as SVG.

pub mod color;
pub mod layout;
pub mod range;
pub mod scale;
pub mod scene;
pub mod svg;

pub use color::{Gradient, SRM_COLORS};
pub use layout::{Dimensions, MIN_WIDTH, Margins};
pub use range::{ChartRequest, ChartStyle, FillMode, chartable, double_range, redraw, single_range};
pub use scene::{ChartItem, ChartKind, ChartScene, ChartSet, Hover};
pub use svg::{render_svg, write_svg};
