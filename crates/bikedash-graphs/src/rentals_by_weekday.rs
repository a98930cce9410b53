//! Average rentals by day of week bar chart.

use crate::traits::GraphRenderer;
use crate::types::{ChartStyle, ChartText};
use crate::utils::render_bucket_means;
use async_trait::async_trait;
use bikedash_common::{BucketKind, Result};
use bikedash_data::BucketMeans;

/// Seven bars, Sunday to Saturday, with the busiest and quietest highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RentalsByWeekdayGraph;

const TEXT: ChartText = ChartText {
    title: "Average Total Rental Amount by Day",
    x_desc: None,
    y_desc: "Average Total Rental Amount",
};

#[async_trait]
impl GraphRenderer for RentalsByWeekdayGraph {
    type Data = [BucketMeans];

    async fn render(&self, data: &[BucketMeans], style: &ChartStyle) -> Result<String> {
        render_bucket_means(
            BucketKind::Weekday,
            &TEXT,
            data,
            style,
        )
    }

    fn name(&self) -> &'static str {
        "rentals_by_weekday"
    }

    fn description(&self) -> &'static str {
        "Mean total rentals per hourly row for each day of the week"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikedash_common::test_utils::{date, record, sample_records};
    use bikedash_config::GraphsConfig;
    use bikedash_data::{BucketMeansAggregator, DataAggregator};

    fn style() -> ChartStyle {
        ChartStyle::from_config(&GraphsConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_render_highlights_max_and_min() {
        let means = BucketMeansAggregator::weekday().aggregate(&sample_records());
        let svg = RentalsByWeekdayGraph.render(&means, &style()).await.unwrap();

        assert!(svg.contains("Average Total Rental Amount by Day"));
        assert!(svg.contains("#EF5350"));
        assert!(svg.contains("#66BB6A"));
    }

    #[tokio::test]
    async fn test_single_weekday_is_max_only() {
        let records = vec![record(1, date(2011, 1, 1), 0, 6, 1, 3, 10)];
        let means = BucketMeansAggregator::weekday().aggregate(&records);
        let svg = RentalsByWeekdayGraph.render(&means, &style()).await.unwrap();

        assert!(svg.contains("#EF5350"));
        assert!(!svg.contains("#66BB6A"));
    }

    #[tokio::test]
    async fn test_empty_selection_renders() {
        let means = BucketMeansAggregator::weekday().aggregate(&[]);
        let svg = RentalsByWeekdayGraph.render(&means, &style()).await.unwrap();
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("#EF5350"));
    }

    #[tokio::test]
    async fn test_rejects_wrong_bucket_count() {
        let means = BucketMeansAggregator::hour().aggregate(&sample_records());
        assert!(RentalsByWeekdayGraph.render(&means, &style()).await.is_err());
    }
}
