//! Vital statistics of a beer style.
//!
//! The guideline document stores every statistic as a pair of decimal strings.
//! They are parsed into numbers once at load time: comparing the raw strings
//! orders `"9.5"` after `"14.0"`, which breaks every scale built on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One of the five vital statistics carried by detailed styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    /// Original gravity.
    Og,
    /// Final gravity.
    Fg,
    /// International bitterness units.
    Ibu,
    /// Standard reference method color.
    Srm,
    /// Alcohol by volume.
    Abv,
}

impl Statistic {
    /// All statistics, in document order.
    pub const ALL: [Statistic; 5] = [
        Statistic::Og,
        Statistic::Fg,
        Statistic::Ibu,
        Statistic::Srm,
        Statistic::Abv,
    ];

    /// Lowercase key as used in the guideline document (`"abv"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Og => "og",
            Self::Fg => "fg",
            Self::Ibu => "ibu",
            Self::Srm => "srm",
            Self::Abv => "abv",
        }
    }

    /// Uppercase label for titles and axes (`"ABV"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Og => "OG",
            Self::Fg => "FG",
            Self::Ibu => "IBU",
            Self::Srm => "SRM",
            Self::Abv => "ABV",
        }
    }

    /// Decimal places the guideline document writes this statistic with
    /// (`"1.040"`, `"4.0"`, `"12"`).
    #[must_use]
    pub const fn decimals(self) -> usize {
        match self {
            Self::Og | Self::Fg => 3,
            Self::Abv => 1,
            Self::Ibu | Self::Srm => 0,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Statistic {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|stat| stat.key() == key)
            .ok_or_else(|| ModelError::UnknownStatistic(s.to_string()))
    }
}

/// Numeric `[low, high]` range of a statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    pub low: f64,
    pub high: f64,
}

impl StatRange {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Parse the textual `low`/`high` pair of `field`.
    pub fn parse(field: &str, low: &str, high: &str) -> Result<Self> {
        Ok(Self {
            low: parse_number(field, low)?,
            high: parse_number(field, high)?,
        })
    }

    /// Width of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// `"low-high"` written the way the document writes `stat`.
    #[must_use]
    pub fn display(&self, stat: Statistic) -> String {
        let decimals = stat.decimals();
        format!(
            "{}-{}",
            format_number(self.low, decimals),
            format_number(self.high, decimals)
        )
    }
}

/// Fixed-point text, unless that would drop digits the value carries.
fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    if fixed.parse::<f64>().ok() == Some(value) {
        fixed
    } else {
        value.to_string()
    }
}

fn parse_number(field: &str, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| ModelError::InvalidStat {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Full vital statistics of a detailed style entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalStats {
    pub og: StatRange,
    pub fg: StatRange,
    pub ibu: StatRange,
    pub srm: StatRange,
    pub abv: StatRange,
}

impl VitalStats {
    /// Range of the requested statistic.
    #[must_use]
    pub const fn range(&self, stat: Statistic) -> StatRange {
        match stat {
            Statistic::Og => self.og,
            Statistic::Fg => self.fg,
            Statistic::Ibu => self.ibu,
            Statistic::Srm => self.srm,
            Statistic::Abv => self.abv,
        }
    }

    /// Compact one-line summary: `"4.5-6.2% ABV; 40-70 IBU; 6-14L° SRM"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}% ABV; {} IBU; {}L\u{b0} SRM",
            self.abv.display(Statistic::Abv),
            self.ibu.display(Statistic::Ibu),
            self.srm.display(Statistic::Srm)
        )
    }
}
