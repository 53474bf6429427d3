//! SRM color ramp and per-style gradients.

use bjcp_model::StatRange;
use serde::Serialize;

/// Display color for each integer SRM value. Entry 0 is never used.
pub const SRM_COLORS: [&str; 41] = [
    "#FFFFFF", // 0 (unused)
    "#FFE699", "#FFD878", "#FFCA5A", "#FFBF42", "#FBB123", //
    "#F8A600", "#F39C00", "#EA8F00", "#E58500", "#DE7C00", //
    "#D77200", "#CF6900", "#CB6200", "#C35900", "#BB5100", //
    "#B54C00", "#B04500", "#A63E00", "#A13700", "#9B3200", //
    "#952D00", "#8E2900", "#882300", "#821E00", "#7B1A00", //
    "#771900", "#701400", "#6A0E00", "#660D00", "#5E0B00", //
    "#5A0A02", "#560A05", "#520907", "#4C0505", "#470606", //
    "#440607", "#3F0708", "#3B0607", "#3A070B", "#36080A", //
];

const MAX_SRM: usize = SRM_COLORS.len() - 1;

/// Ramp index of an SRM value; SRM values are not always integers.
fn srm_index(value: f64, round: fn(f64) -> f64) -> usize {
    let index = round(value);
    if index.is_nan() || index < 1.0 {
        1
    } else if index > MAX_SRM as f64 {
        MAX_SRM
    } else {
        index as usize
    }
}

/// Ramp index of the low end of an SRM range (rounded down).
#[must_use]
pub fn srm_low_index(srm: StatRange) -> usize {
    srm_index(srm.low, f64::floor)
}

/// Ramp index of the high end of an SRM range (rounded up).
#[must_use]
pub fn srm_high_index(srm: StatRange) -> usize {
    srm_index(srm.high, f64::ceil)
}

#[must_use]
pub fn srm_low_color(srm: StatRange) -> &'static str {
    SRM_COLORS[srm_low_index(srm)]
}

#[must_use]
pub fn srm_high_color(srm: StatRange) -> &'static str {
    SRM_COLORS[srm_high_index(srm)]
}

/// Color for the item at `position` of `count`, spread evenly over the ramp.
#[must_use]
pub fn ramp_color(position: usize, count: usize) -> &'static str {
    if count <= 1 {
        return SRM_COLORS[1];
    }
    let t = position.min(count - 1) as f64 / (count - 1) as f64;
    SRM_COLORS[1 + (t * (MAX_SRM - 1) as f64).round() as usize]
}

/// Two-stop linear gradient from an SRM range, drawn bottom-left to top-right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub id: String,
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    #[must_use]
    pub fn for_srm(srm: StatRange) -> Self {
        let from = srm_low_color(srm);
        let to = srm_high_color(srm);
        Self {
            id: format!(
                "gradient-{}-{}",
                from.trim_start_matches('#'),
                to.trim_start_matches('#')
            ),
            from,
            to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_forty_colors_after_unused_zero() {
        assert_eq!(SRM_COLORS.len(), 41);
        assert_eq!(SRM_COLORS[0], "#FFFFFF");
        assert_eq!(SRM_COLORS[40], "#36080A");
    }

    #[test]
    fn gradient_floors_low_and_ceils_high() {
        let gradient = Gradient::for_srm(StatRange::new(2.5, 3.5));
        assert_eq!(gradient.from, SRM_COLORS[2]);
        assert_eq!(gradient.to, SRM_COLORS[4]);
        assert_eq!(gradient.id, "gradient-FFD878-FFBF42");
    }

    #[test]
    fn gradient_clamps_out_of_range_values() {
        let gradient = Gradient::for_srm(StatRange::new(0.0, 50.0));
        assert_eq!(gradient.from, SRM_COLORS[1]);
        assert_eq!(gradient.to, SRM_COLORS[40]);
    }

    #[test]
    fn ordinal_ramp_spans_the_table() {
        assert_eq!(ramp_color(0, 1), SRM_COLORS[1]);
        assert_eq!(ramp_color(0, 3), SRM_COLORS[1]);
        assert_eq!(ramp_color(2, 3), SRM_COLORS[40]);
    }
}
