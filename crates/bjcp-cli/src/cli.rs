//! CLI argument definitions for the style explorer.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bjcp_chart::FillMode;
use bjcp_core::FilterSelection;
use bjcp_model::{ModelError, Statistic};

#[derive(Parser)]
#[command(
    name = "bjcp-explorer",
    version,
    about = "Explore the BJCP 2015 beer style guidelines",
    long_about = "Browse, filter and chart the BJCP 2015 beer styles.\n\n\
                  Styles are filtered by tag (one value per tag category), searched by\n\
                  name, and charted by their vital statistics as SVG or a static page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Guideline document URL or local path.
    #[arg(long = "source", value_name = "URL|PATH", global = true)]
    pub source: Option<String>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the tag categories and their values.
    Tags,

    /// List the styles matching the given filters.
    Styles(StylesArgs),

    /// Find styles by name.
    Search(SearchArgs),

    /// Draw range charts of the matching styles as SVG files.
    Chart(ChartArgs),

    /// Write a static HTML page with filters, results and charts.
    Page(PageArgs),
}

#[derive(Args, Clone, Default)]
pub struct FilterArgs {
    /// Tag filter as CATEGORY=TAG (e.g. Color=pale-color or Color=Pale).
    ///
    /// Repeat for several categories. Selecting the same tag twice clears it.
    #[arg(long = "filter", short = 'f', value_name = "CATEGORY=TAG")]
    pub filters: Vec<FilterSelection>,
}

#[derive(Args)]
pub struct StylesArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text matched at the start of any word in the style name.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args, Clone)]
pub struct ChartOptions {
    /// Width of the chart container in pixels (at least 300 is used).
    #[arg(long = "width", default_value_t = 960.0)]
    pub width: f64,

    /// Statistic drawn as one bar per style.
    #[arg(long = "single", value_name = "STAT", default_values_t = [Statistic::Abv])]
    pub single: Vec<Statistic>,

    /// Statistic pair drawn as one box per style, as X:Y.
    #[arg(long = "double", value_name = "X:Y", default_values_t = [StatPair::default()])]
    pub double: Vec<StatPair>,

    /// Bar coloring of single-statistic charts.
    #[arg(long = "fill", value_enum, default_value = "srm")]
    pub fill: FillArg,
}

#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub chart: ChartOptions,

    /// Directory receiving one SVG file per chart.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "charts")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct PageArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub chart: ChartOptions,

    /// Page output path.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = "bjcp-styles.html")]
    pub output: PathBuf,

    /// Page title.
    #[arg(long = "title")]
    pub title: Option<String>,
}

/// Two statistics charted against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatPair {
    pub x: Statistic,
    pub y: Statistic,
}

impl Default for StatPair {
    fn default() -> Self {
        Self {
            x: Statistic::Abv,
            y: Statistic::Ibu,
        }
    }
}

impl FromStr for StatPair {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(':')
            .ok_or_else(|| ModelError::Message(format!("expected X:Y, got {s}")))?;
        Ok(Self {
            x: x.parse()?,
            y: y.parse()?,
        })
    }
}

impl fmt::Display for StatPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FillArg {
    /// Gradient over each style's SRM color range.
    Srm,
    /// One color per row, spread over the SRM ramp.
    Ordinal,
}

impl From<FillArg> for FillMode {
    fn from(value: FillArg) -> Self {
        match value {
            FillArg::Srm => FillMode::SrmGradient,
            FillArg::Ordinal => FillMode::Ordinal,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn command_name_matches_binary() {
        assert_eq!(Cli::command().get_name(), env!("CARGO_BIN_NAME"));
    }

    #[test]
    fn stat_pair_parses_x_then_y() {
        let pair: StatPair = "srm:og".parse().unwrap();
        assert_eq!(pair.x, Statistic::Srm);
        assert_eq!(pair.y, Statistic::Og);
        assert_eq!(pair.to_string(), "srm:og");
        assert!("abv".parse::<StatPair>().is_err());
        assert!("abv:color".parse::<StatPair>().is_err());
    }

    #[test]
    fn chart_defaults_match_the_explorer() {
        let cli = Cli::try_parse_from(["bjcp-explorer", "chart"]).unwrap();
        let Command::Chart(args) = cli.command else {
            panic!("expected chart command");
        };
        assert_eq!(args.chart.single, vec![Statistic::Abv]);
        assert_eq!(args.chart.double, vec![StatPair::default()]);
        assert_eq!(args.chart.width, 960.0);
    }

    #[test]
    fn filters_repeat() {
        let cli = Cli::try_parse_from([
            "bjcp-explorer",
            "styles",
            "--filter",
            "Color=pale-color",
            "-f",
            "Strength=High",
        ])
        .unwrap();
        let Command::Styles(args) = cli.command else {
            panic!("expected styles command");
        };
        assert_eq!(args.filter.filters.len(), 2);
        assert_eq!(args.filter.filters[1].tag, "High");
    }
}
