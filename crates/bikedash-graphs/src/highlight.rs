//! Max/min highlighting of bar charts.

use crate::types::ChartStyle;
use plotters::style::RGBColor;

/// Colour role of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    /// Equal to the largest value.
    Max,
    /// Equal to the smallest value.
    Min,
    /// Anything else, including buckets without rows.
    Neutral,
}

impl BarTone {
    /// The configured colour for this role.
    pub const fn color(self, style: &ChartStyle) -> RGBColor {
        match self {
            Self::Max => style.highlight_max,
            Self::Min => style.highlight_min,
            Self::Neutral => style.neutral,
        }
    }
}

/// Classifies bars by value. `None` marks a bucket with no rows, which is
/// never highlighted and does not take part in the max/min search.
///
/// Every bar equal to the maximum is `Max` and every bar equal to the minimum
/// is `Min`; when all values are equal they are all `Max`.
#[allow(clippy::float_cmp)]
pub fn bar_tones(values: &[Option<f64>]) -> Vec<BarTone> {
    let max = values.iter().flatten().copied().reduce(f64::max);
    let min = values.iter().flatten().copied().reduce(f64::min);

    values
        .iter()
        .map(|value| match (*value, max, min) {
            (Some(v), Some(max), _) if v == max => BarTone::Max,
            (Some(v), _, Some(min)) if v == min => BarTone::Min,
            _ => BarTone::Neutral,
        })
        .collect()
}
