//! Total rentals by season bar chart.

use crate::traits::GraphRenderer;
use crate::types::{ChartStyle, ChartText};
use crate::utils::render_bar_chart;
use async_trait::async_trait;
use bikedash_common::{BucketKind, DashError, Result};
use bikedash_data::BucketSums;
use plotters::style::RGBColor;

/// Four bars, Spring to Winter, all in the neutral colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct RentalsBySeasonGraph;

const TEXT: ChartText = ChartText {
    title: "Total Rental Amount by Season",
    x_desc: None,
    y_desc: "Total Rental Amount",
};

#[async_trait]
impl GraphRenderer for RentalsBySeasonGraph {
    type Data = [BucketSums];

    #[allow(clippy::cast_precision_loss)]
    async fn render(&self, data: &[BucketSums], style: &ChartStyle) -> Result<String> {
        if data.len() != BucketKind::Season.len() {
            return Err(DashError::graph(format!(
                "expected {} season buckets, got {}",
                BucketKind::Season.len(),
                data.len()
            )));
        }

        let bars: Vec<(f64, RGBColor)> = data
            .iter()
            .map(|season| (season.total as f64, style.neutral))
            .collect();
        render_bar_chart(
            &TEXT,
            &BucketKind::Season.labels(),
            &bars,
            style,
        )
    }

    fn name(&self) -> &'static str {
        "rentals_by_season"
    }

    fn description(&self) -> &'static str {
        "Total rentals for each season"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikedash_common::test_utils::sample_records;
    use bikedash_config::GraphsConfig;
    use bikedash_data::{DataAggregator, SeasonalRentalsAggregator};

    #[tokio::test]
    async fn test_render_uses_uniform_color() {
        let style = ChartStyle::from_config(&GraphsConfig::default()).unwrap();
        let sums = SeasonalRentalsAggregator::new().aggregate(&sample_records());
        let svg = RentalsBySeasonGraph.render(&sums, &style).await.unwrap();

        assert!(svg.contains("Total Rental Amount by Season"));
        assert!(svg.contains("#90CAF9"));
        assert!(!svg.contains("#EF5350"));
        assert!(!svg.contains("#66BB6A"));
    }

    #[tokio::test]
    async fn test_rejects_wrong_bucket_count() {
        let style = ChartStyle::from_config(&GraphsConfig::default()).unwrap();
        let sums = SeasonalRentalsAggregator::new().aggregate(&[]);
        assert!(RentalsBySeasonGraph.render(&sums[..2], &style).await.is_err());
    }
}
