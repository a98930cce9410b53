//! Daily rentals line charts.

use crate::traits::GraphRenderer;
use crate::types::{ChartStyle, ChartText};
use crate::utils::render_line_chart;
use async_trait::async_trait;
use bikedash_common::Result;
use bikedash_data::DailySummary;
use chrono::NaiveDate;

/// Which rider column a daily chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiderSeries {
    /// All rentals.
    Total,
    /// Registered riders only.
    Registered,
    /// Casual riders only.
    Casual,
}

impl RiderSeries {
    /// Reads this series' value from a day.
    pub const fn value(self, day: &DailySummary) -> u64 {
        match self {
            Self::Total => day.total,
            Self::Registered => day.registered,
            Self::Casual => day.casual,
        }
    }

    /// Chart caption.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Total => "Daily Rentals Over Time",
            Self::Registered => "Daily Registered User Rentals Over Time",
            Self::Casual => "Daily Casual User Rentals Over Time",
        }
    }

    /// Caption and axis descriptions.
    pub const fn text(self) -> ChartText {
        ChartText {
            title: self.title(),
            x_desc: Some("Date"),
            y_desc: match self {
                Self::Total => "Total Rentals",
                Self::Registered => "Total Registered User Rentals",
                Self::Casual => "Total Casual User Rentals",
            },
        }
    }
}

/// Line chart of one rider column per day.
#[derive(Debug, Clone, Copy)]
pub struct DailyRentalsGraph {
    series: RiderSeries,
}

impl DailyRentalsGraph {
    /// Chart for `series`.
    pub const fn new(series: RiderSeries) -> Self {
        Self { series }
    }

    /// The plotted column.
    pub const fn series(&self) -> RiderSeries {
        self.series
    }
}

#[async_trait]
impl GraphRenderer for DailyRentalsGraph {
    type Data = [DailySummary];

    async fn render(&self, data: &[DailySummary], style: &ChartStyle) -> Result<String> {
        let points: Vec<(NaiveDate, u64)> = data
            .iter()
            .map(|day| (day.date, self.series.value(day)))
            .collect();
        render_line_chart(&self.series.text(), &points, style)
    }

    fn name(&self) -> &'static str {
        match self.series {
            RiderSeries::Total => "daily_rentals",
            RiderSeries::Registered => "daily_registered_rentals",
            RiderSeries::Casual => "daily_casual_rentals",
        }
    }

    fn description(&self) -> &'static str {
        match self.series {
            RiderSeries::Total => "Total rentals per day",
            RiderSeries::Registered => "Registered user rentals per day",
            RiderSeries::Casual => "Casual user rentals per day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikedash_common::test_utils::{sample_records, two_row_records};
    use bikedash_config::GraphsConfig;
    use bikedash_data::{DailyRentalsAggregator, DataAggregator};

    fn style() -> ChartStyle {
        ChartStyle::from_config(&GraphsConfig::default()).unwrap()
    }

    #[test]
    fn test_series_values() {
        let day = DailyRentalsAggregator::new().aggregate(&two_row_records())[0];
        assert_eq!(RiderSeries::Total.value(&day), 20);
        assert_eq!(RiderSeries::Registered.value(&day), 15);
        assert_eq!(RiderSeries::Casual.value(&day), 5);
    }

    #[tokio::test]
    async fn test_render_each_series() {
        let daily = DailyRentalsAggregator::new().aggregate(&sample_records());
        for series in [RiderSeries::Total, RiderSeries::Registered, RiderSeries::Casual] {
            let graph = DailyRentalsGraph::new(series);
            let svg = graph.render(&daily, &style()).await.unwrap();
            assert!(svg.contains("<svg"), "{}", graph.name());
            assert!(svg.contains(series.title()));
        }
    }

    #[tokio::test]
    async fn test_render_empty_selection() {
        let graph = DailyRentalsGraph::new(RiderSeries::Total);
        let svg = graph.render(&[], &style()).await.unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_names_are_distinct() {
        let names: Vec<&str> = [RiderSeries::Total, RiderSeries::Registered, RiderSeries::Casual]
            .into_iter()
            .map(|series| DailyRentalsGraph::new(series).name())
            .collect();
        assert_eq!(
            names,
            vec!["daily_rentals", "daily_registered_rentals", "daily_casual_rentals"]
        );
    }
}
