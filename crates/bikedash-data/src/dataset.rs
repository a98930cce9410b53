//! The loaded rental table and the inclusive date-range filter over it.

use crate::aggregator::DashboardData;
use crate::loader::{self, LoadError};
use bikedash_common::RentalRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// How many offending record ids a quality report keeps.
const QUALITY_SAMPLE_LIMIT: usize = 5;

/// An inclusive `[start, end]` interval of calendar days.
///
/// A range with `start > end` is valid and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First selected day.
    pub start: NaiveDate,
    /// Last selected day.
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the range selects no day at all.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Pulls both ends inside `bounds`. An inverted range stays inverted.
    #[must_use]
    pub fn clamp_to(&self, bounds: &Self) -> Self {
        Self {
            start: self.start.max(bounds.start).min(bounds.end),
            end: self.end.min(bounds.end).max(bounds.start),
        }
    }
}

/// Result of the `casual + registered == total` check made at load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    /// Rows inspected.
    pub rows: usize,
    /// Rows whose rider counts do not add up to the total.
    pub inconsistent_rows: usize,
    /// Ids of the first offending rows.
    pub sample_ids: Vec<u64>,
}

impl QualityReport {
    /// Inspects every record.
    pub fn inspect(records: &[RentalRecord]) -> Self {
        let mut report = Self {
            rows: records.len(),
            ..Self::default()
        };
        for record in records.iter().filter(|r| !r.is_consistent()) {
            report.inconsistent_rows += 1;
            if report.sample_ids.len() < QUALITY_SAMPLE_LIMIT {
                report.sample_ids.push(record.id);
            }
        }
        report
    }

    /// True when every row satisfied the invariant.
    pub const fn is_clean(&self) -> bool {
        self.inconsistent_rows == 0
    }
}

/// The rental table, sorted by date and read-only after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<RentalRecord>,
    span: DateRange,
    quality: QualityReport,
}

impl Dataset {
    /// Loads and prepares the CSV file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::from_records(loader::load_records(path)?)
    }

    /// Builds a dataset from already parsed rows.
    ///
    /// Rows are stably sorted by date and re-indexed; an empty input is a
    /// [`LoadError::Empty`].
    #[instrument(skip_all, fields(rows = records.len()))]
    pub fn from_records(mut records: Vec<RentalRecord>) -> Result<Self, LoadError> {
        records.sort_by_key(|record| record.date);
        for (index, record) in records.iter_mut().enumerate() {
            record.index = index;
        }

        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Err(LoadError::Empty);
        };
        let span = DateRange::new(first.date, last.date);

        let quality = QualityReport::inspect(&records);
        if !quality.is_clean() {
            warn!(
                inconsistent_rows = quality.inconsistent_rows,
                sample_ids = ?quality.sample_ids,
                "casual + registered does not equal cnt for some rows"
            );
        }

        info!(start = %span.start, end = %span.end, "dataset ready");
        Ok(Self {
            records,
            span,
            quality,
        })
    }

    /// All rows in date order.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; an empty table cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date in the table.
    pub const fn min_date(&self) -> NaiveDate {
        self.span.start
    }

    /// Latest date in the table.
    pub const fn max_date(&self) -> NaiveDate {
        self.span.end
    }

    /// The observed `[min_date, max_date]` span.
    pub const fn full_range(&self) -> DateRange {
        self.span
    }

    /// Outcome of the load-time consistency check.
    pub const fn quality(&self) -> &QualityReport {
        &self.quality
    }

    /// Every row whose date lies within `range`, as a borrowed slice.
    pub fn filter(&self, range: &DateRange) -> &[RentalRecord] {
        if range.is_empty() {
            return &[];
        }
        let lo = self.records.partition_point(|r| r.date < range.start);
        let hi = self.records.partition_point(|r| r.date <= range.end);
        debug!(start = %range.start, end = %range.end, rows = hi - lo, "filtered dataset");
        &self.records[lo..hi]
    }

    /// Filters to `range` and runs every aggregator over the selection.
    pub fn dashboard(&self, range: DateRange) -> DashboardData {
        DashboardData::compute(range, self.filter(&range))
    }
}
