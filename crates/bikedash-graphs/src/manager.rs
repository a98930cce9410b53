//! Graph manager for rendering every dashboard chart in one pass.

use crate::daily_rentals::{DailyRentalsGraph, RiderSeries};
use crate::rentals_by_hour::RentalsByHourGraph;
use crate::rentals_by_season::RentalsBySeasonGraph;
use crate::rentals_by_weekday::RentalsByWeekdayGraph;
use crate::traits::GraphRenderer;
use crate::types::ChartStyle;
use bikedash_common::Result;
use bikedash_config::GraphsConfig;
use bikedash_data::DashboardData;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, instrument};

/// The six SVG documents of one page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCharts {
    /// Daily total rentals.
    pub daily_total: String,
    /// Daily registered rentals, drawn at half width.
    pub daily_registered: String,
    /// Daily casual rentals, drawn at half width.
    pub daily_casual: String,
    /// Mean rentals by weekday.
    pub by_weekday: String,
    /// Mean rentals by hour.
    pub by_hour: String,
    /// Total rentals by season.
    pub by_season: String,
}

/// Renders all dashboard charts with a shared style.
#[derive(Debug, Clone)]
pub struct GraphManager {
    style: ChartStyle,
}

impl GraphManager {
    /// Creates a new graph manager.
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Creates a manager from the `graphs` configuration section.
    pub fn from_config(config: &GraphsConfig) -> Result<Self> {
        Ok(Self::new(ChartStyle::from_config(config)?))
    }

    /// The full-size chart style.
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Renders every chart for `data`, one after another.
    #[instrument(skip_all, fields(start = %data.range.start, end = %data.range.end))]
    pub async fn render_all(&self, data: &DashboardData) -> Result<RenderedCharts> {
        let started = Instant::now();
        let full = self.style;
        let half = full.with_size(full.width / 2, full.height);

        let charts = RenderedCharts {
            daily_total: DailyRentalsGraph::new(RiderSeries::Total)
                .render(&data.daily, &full)
                .await?,
            daily_registered: DailyRentalsGraph::new(RiderSeries::Registered)
                .render(&data.daily, &half)
                .await?,
            daily_casual: DailyRentalsGraph::new(RiderSeries::Casual)
                .render(&data.daily, &half)
                .await?,
            by_weekday: RentalsByWeekdayGraph.render(&data.weekday, &full).await?,
            by_hour: RentalsByHourGraph.render(&data.hourly, &full).await?,
            by_season: RentalsBySeasonGraph.render(&data.seasonal, &full).await?,
        };

        debug!(elapsed_ms = started.elapsed().as_millis(), "rendered dashboard charts");
        Ok(charts)
    }
}
