//! Test utilities and shared fixtures for the dashboard workspace.
//!
//! Available to other crates' tests through the `testing` feature.

use crate::RentalRecord;
use chrono::NaiveDate;
use std::sync::Once;

static INIT: Once = Once::new();

/// Header of the hourly bike sharing CSV, in file order.
pub const CSV_HEADER: &str = "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Shorthand for a calendar date in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Builds a consistent record; `total` is derived from the two rider counts.
#[allow(clippy::too_many_arguments)]
pub fn record(
    id: u64,
    date: NaiveDate,
    hour: u8,
    weekday: u8,
    season: u8,
    casual: u64,
    registered: u64,
) -> RentalRecord {
    RentalRecord {
        id,
        index: 0,
        date,
        hour,
        weekday,
        season,
        casual,
        registered,
        total: casual + registered,
    }
}

/// The two-row dataset from the end-to-end scenario: both rows on
/// Saturday 2011-01-01 in spring, totalling 20 rentals.
pub fn two_row_records() -> Vec<RentalRecord> {
    let day = date(2011, 1, 1);
    vec![record(1, day, 0, 6, 1, 3, 10), record(2, day, 1, 6, 1, 2, 5)]
}

/// A small multi-day sample spanning two seasons.
///
/// Three days (2011-01-01 Sat, 2011-01-02 Sun, 2011-03-21 Mon), two hours per
/// day, deterministic counts.
pub fn sample_records() -> Vec<RentalRecord> {
    let days = [
        (date(2011, 1, 1), 6u8, 1u8),
        (date(2011, 1, 2), 0, 1),
        (date(2011, 3, 21), 1, 2),
    ];
    let mut records = Vec::new();
    let mut id = 1;
    for (day_no, (day, weekday, season)) in days.into_iter().enumerate() {
        for hour in [8u8, 17] {
            let casual = (day_no as u64 + 1) * u64::from(hour);
            let registered = casual * 3 + 1;
            records.push(record(id, day, hour, weekday, season, casual, registered));
            id += 1;
        }
    }
    records
}

/// Renders records as CSV text with the full source header.
pub fn records_to_csv(records: &[RentalRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},{},{},0,1,{},0,{},0,1,0.24,0.2879,0.81,0.0,{},{},{}\n",
            r.id,
            r.date.format("%Y-%m-%d"),
            r.season,
            r.hour,
            r.weekday,
            r.casual,
            r.registered,
            r.total
        ));
    }
    out
}

/// Writes `contents` to a fresh temporary CSV file.
#[cfg(feature = "testing")]
pub fn write_csv_fixture(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write CSV fixture");
    file.flush().expect("Failed to flush CSV fixture");
    file
}
