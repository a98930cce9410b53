//! Aggregation of filtered rental rows into the tables the charts plot.
//!
//! Every aggregator is total: an empty selection yields an empty daily table
//! and zero-filled bucket tables, never an error. Bucket tables always cover
//! the full code domain in code order, so they line up with
//! [`BucketKind::labels`].

use crate::dataset::DateRange;
use bikedash_common::{BucketKind, RentalRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, instrument};

/// Trait for aggregating rental rows into a specific summary table
pub trait DataAggregator<T> {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Summarise `records`, which may be empty.
    fn aggregate(&self, records: &[RentalRecord]) -> Vec<T>;
}

/// Rentals of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    /// The day.
    pub date: NaiveDate,
    /// Distinct record ids on that day.
    pub day_count: usize,
    /// Casual rentals.
    pub casual: u64,
    /// Registered rentals.
    pub registered: u64,
    /// All rentals.
    pub total: u64,
}

impl DailySummary {
    const fn zero(date: NaiveDate) -> Self {
        Self {
            date,
            day_count: 0,
            casual: 0,
            registered: 0,
            total: 0,
        }
    }
}

/// Mean rentals per row for one weekday or hour code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketMeans {
    /// Bucket code.
    pub code: u8,
    /// Rows that fell into the bucket; zero means the means are fill values.
    pub rows: usize,
    /// Mean casual rentals.
    pub casual_mean: f64,
    /// Mean registered rentals.
    pub registered_mean: f64,
    /// Mean total rentals.
    pub total_mean: f64,
}

/// Summed rentals for one season code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketSums {
    /// Bucket code.
    pub code: u8,
    /// Rows that fell into the bucket.
    pub rows: usize,
    /// Casual rentals.
    pub casual: u64,
    /// Registered rentals.
    pub registered: u64,
    /// All rentals.
    pub total: u64,
}

impl BucketSums {
    const fn empty(code: u8) -> Self {
        Self {
            code,
            rows: 0,
            casual: 0,
            registered: 0,
            total: 0,
        }
    }

    fn add(&mut self, record: &RentalRecord) {
        self.rows += 1;
        self.casual += record.casual;
        self.registered += record.registered;
        self.total += record.total;
    }

    #[allow(clippy::cast_precision_loss)]
    fn means(&self) -> BucketMeans {
        let mean = |sum: u64| {
            if self.rows == 0 {
                0.0
            } else {
                sum as f64 / self.rows as f64
            }
        };
        BucketMeans {
            code: self.code,
            rows: self.rows,
            casual_mean: mean(self.casual),
            registered_mean: mean(self.registered),
            total_mean: mean(self.total),
        }
    }
}

/// Sums every record into one bucket per code of `kind`, in code order.
fn bucket_sums(kind: BucketKind, records: &[RentalRecord]) -> Vec<BucketSums> {
    let mut buckets: Vec<BucketSums> = kind.codes().map(BucketSums::empty).collect();
    for record in records {
        if let Some(position) = kind.position(kind.code_of(record)) {
            buckets[position].add(record);
        }
    }
    buckets
}

/// Per-day totals, gap-filled between the first and last selected day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyRentalsAggregator;

impl DailyRentalsAggregator {
    /// Create a new daily aggregator
    pub const fn new() -> Self {
        Self
    }
}

impl DataAggregator<DailySummary> for DailyRentalsAggregator {
    fn name(&self) -> &'static str {
        "daily_rentals"
    }

    #[instrument(skip_all, fields(rows = records.len()))]
    fn aggregate(&self, records: &[RentalRecord]) -> Vec<DailySummary> {
        let mut days: BTreeMap<NaiveDate, (HashSet<u64>, DailySummary)> = BTreeMap::new();
        for record in records {
            let (ids, summary) = days
                .entry(record.date)
                .or_insert_with(|| (HashSet::new(), DailySummary::zero(record.date)));
            ids.insert(record.id);
            summary.casual += record.casual;
            summary.registered += record.registered;
            summary.total += record.total;
        }

        let (Some(&first), Some(&last)) = (days.keys().next(), days.keys().next_back()) else {
            debug!("no rows selected, daily table is empty");
            return Vec::new();
        };

        let result: Vec<DailySummary> = first
            .iter_days()
            .take_while(|day| *day <= last)
            .map(|day| {
                days.get(&day).map_or_else(
                    || DailySummary::zero(day),
                    |(ids, summary)| DailySummary {
                        day_count: ids.len(),
                        ..*summary
                    },
                )
            })
            .collect();

        debug!("Aggregated {} daily rental data points", result.len());
        result
    }
}

/// Mean rentals per row, grouped by weekday or hour.
#[derive(Debug, Clone, Copy)]
pub struct BucketMeansAggregator {
    kind: BucketKind,
}

impl BucketMeansAggregator {
    /// Means grouped by `kind`.
    pub const fn new(kind: BucketKind) -> Self {
        Self { kind }
    }

    /// Means for weekday codes 0-6.
    pub const fn weekday() -> Self {
        Self::new(BucketKind::Weekday)
    }

    /// Means for hour codes 0-23.
    pub const fn hour() -> Self {
        Self::new(BucketKind::Hour)
    }

    /// The grouping key.
    pub const fn kind(&self) -> BucketKind {
        self.kind
    }
}

impl DataAggregator<BucketMeans> for BucketMeansAggregator {
    fn name(&self) -> &'static str {
        match self.kind {
            BucketKind::Weekday => "weekday_means",
            BucketKind::Hour => "hour_means",
            BucketKind::Season => "season_means",
        }
    }

    #[instrument(skip_all, fields(kind = %self.kind, rows = records.len()))]
    fn aggregate(&self, records: &[RentalRecord]) -> Vec<BucketMeans> {
        let result: Vec<BucketMeans> = bucket_sums(self.kind, records)
            .iter()
            .map(BucketSums::means)
            .collect();

        debug!("Aggregated {} {} mean data points", result.len(), self.kind);
        result
    }
}

/// Summed rentals per season.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalRentalsAggregator;

impl SeasonalRentalsAggregator {
    /// Create a new seasonal aggregator
    pub const fn new() -> Self {
        Self
    }
}

impl DataAggregator<BucketSums> for SeasonalRentalsAggregator {
    fn name(&self) -> &'static str {
        "seasonal_rentals"
    }

    #[instrument(skip_all, fields(rows = records.len()))]
    fn aggregate(&self, records: &[RentalRecord]) -> Vec<BucketSums> {
        let result = bucket_sums(BucketKind::Season, records);
        debug!("Aggregated {} seasonal data points", result.len());
        result
    }
}

/// The three headline metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RentalTotals {
    /// All rentals.
    pub total: u64,
    /// Registered rentals.
    pub registered: u64,
    /// Casual rentals.
    pub casual: u64,
}

impl RentalTotals {
    /// Column sums of a daily table.
    pub fn from_daily(daily: &[DailySummary]) -> Self {
        daily.iter().fold(Self::default(), |acc, day| Self {
            total: acc.total + day.total,
            registered: acc.registered + day.registered,
            casual: acc.casual + day.casual,
        })
    }
}

/// Everything one render pass needs, computed from a single selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    /// The selection the tables were computed for.
    pub range: DateRange,
    /// Rows inside the selection.
    pub rows: usize,
    /// Headline metrics.
    pub totals: RentalTotals,
    /// Per-day table.
    pub daily: Vec<DailySummary>,
    /// Weekday means, codes 0-6.
    pub weekday: Vec<BucketMeans>,
    /// Hour means, codes 0-23.
    pub hourly: Vec<BucketMeans>,
    /// Season sums, codes 1-4.
    pub seasonal: Vec<BucketSums>,
}

impl DashboardData {
    /// Runs the four aggregators over `records`.
    #[instrument(skip(records), fields(rows = records.len()))]
    pub fn compute(range: DateRange, records: &[RentalRecord]) -> Self {
        let daily = DailyRentalsAggregator::new().aggregate(records);
        let totals = RentalTotals::from_daily(&daily);

        Self {
            range,
            rows: records.len(),
            totals,
            daily,
            weekday: BucketMeansAggregator::weekday().aggregate(records),
            hourly: BucketMeansAggregator::hour().aggregate(records),
            seasonal: SeasonalRentalsAggregator::new().aggregate(records),
        }
    }
}
