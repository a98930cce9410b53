//! Domain types shared by the loader, the aggregators and the renderers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Day labels in weekday-code order (code 0 is Sunday).
pub const WEEKDAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Season labels in season-code order (code 1 is Spring).
pub const SEASON_LABELS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];

/// One hourly row of the rental dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Record id from the source file.
    pub id: u64,
    /// Position of the row after the chronological sort.
    pub index: usize,
    /// Calendar day the row belongs to.
    pub date: NaiveDate,
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Weekday code, 0 (Sunday) to 6 (Saturday).
    pub weekday: u8,
    /// Season code, 1 (Spring) to 4 (Winter).
    pub season: u8,
    /// Rentals by casual riders.
    pub casual: u64,
    /// Rentals by registered riders.
    pub registered: u64,
    /// All rentals.
    pub total: u64,
}

impl RentalRecord {
    /// Whether `casual + registered == total` holds for this row.
    pub const fn is_consistent(&self) -> bool {
        self.casual + self.registered == self.total
    }
}

/// The categorical keys the dashboard groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    /// Weekday code 0-6.
    Weekday,
    /// Hour code 0-23.
    Hour,
    /// Season code 1-4.
    Season,
}

impl BucketKind {
    /// Every code of this bucket kind, in display order.
    pub const fn codes(self) -> RangeInclusive<u8> {
        match self {
            Self::Weekday => 0..=6,
            Self::Hour => 0..=23,
            Self::Season => 1..=4,
        }
    }

    /// Number of buckets in the domain.
    pub const fn len(self) -> usize {
        match self {
            Self::Weekday => 7,
            Self::Hour => 24,
            Self::Season => 4,
        }
    }

    /// Position of `code` within the domain, if it belongs to it.
    pub fn position(self, code: u8) -> Option<usize> {
        let codes = self.codes();
        codes
            .contains(&code)
            .then(|| usize::from(code - codes.start()))
    }

    /// Reads this bucket's code from a record.
    pub const fn code_of(self, record: &RentalRecord) -> u8 {
        match self {
            Self::Weekday => record.weekday,
            Self::Hour => record.hour,
            Self::Season => record.season,
        }
    }

    /// Display labels, positionally aligned with [`BucketKind::codes`].
    pub fn labels(self) -> Vec<String> {
        match self {
            Self::Weekday => WEEKDAY_LABELS.iter().map(ToString::to_string).collect(),
            Self::Hour => self.codes().map(|hour| format!("{hour:02}.00")).collect(),
            Self::Season => SEASON_LABELS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekday => write!(f, "weekday"),
            Self::Hour => write!(f, "hour"),
            Self::Season => write!(f, "season"),
        }
    }
}
