//! Average rentals by hour of day bar chart.

use crate::traits::GraphRenderer;
use crate::types::{ChartStyle, ChartText};
use crate::utils::render_bucket_means;
use async_trait::async_trait;
use bikedash_common::{BucketKind, Result};
use bikedash_data::BucketMeans;

/// Twenty-four bars, `00.00` to `23.00`, highlighted like the weekday chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct RentalsByHourGraph;

const TEXT: ChartText = ChartText {
    title: "Average Total Rental Amount by Hour",
    x_desc: None,
    y_desc: "Average Total Rental Amount",
};

#[async_trait]
impl GraphRenderer for RentalsByHourGraph {
    type Data = [BucketMeans];

    async fn render(&self, data: &[BucketMeans], style: &ChartStyle) -> Result<String> {
        render_bucket_means(
            BucketKind::Hour,
            &TEXT,
            data,
            style,
        )
    }

    fn name(&self) -> &'static str {
        "rentals_by_hour"
    }

    fn description(&self) -> &'static str {
        "Mean total rentals per hourly row for each hour of the day"
    }
}
