//! CSV loading of the hourly rental table.
//!
//! Columns are matched by header name; anything the dashboard does not use is
//! ignored. Every failure is fatal: either the whole file loads or nothing
//! does.

use bikedash_common::{parse_iso_date, BucketKind, DashError, RentalRecord};
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "instant",
    "dteday",
    "season",
    "hr",
    "weekday",
    "casual",
    "registered",
    "cnt",
];

/// Reasons a dataset can fail to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("Failed to open dataset '{}': {source}", path.display())]
    Open {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row.
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    /// The CSV reader rejected a row or the header.
    #[error("Malformed CSV at line {line}: {source}")]
    Csv {
        /// 1-based line number.
        line: usize,
        /// Underlying parser failure.
        #[source]
        source: csv::Error,
    },

    /// A date cell could not be parsed.
    #[error("Line {line}: '{value}' is not a valid date")]
    InvalidDate {
        /// 1-based line number.
        line: usize,
        /// Cell contents.
        value: String,
    },

    /// A numeric cell could not be parsed.
    #[error("Line {line}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Column name.
        column: &'static str,
        /// Cell contents.
        value: String,
    },

    /// A categorical code lies outside its domain.
    #[error("Line {line}: {column} code {value} is out of range")]
    OutOfRange {
        /// 1-based line number.
        line: usize,
        /// Column name.
        column: &'static str,
        /// Parsed value.
        value: u64,
    },

    /// The file has a header but no data rows.
    #[error("Dataset contains no rows")]
    Empty,
}

impl From<LoadError> for DashError {
    fn from(err: LoadError) -> Self {
        Self::load_with_source("Failed to load dataset", err)
    }
}

/// Header positions of the required columns.
struct Columns {
    instant: usize,
    dteday: usize,
    season: usize,
    hr: usize,
    weekday: usize,
    casual: usize,
    registered: usize,
    cnt: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let header_map: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name, idx))
            .collect();

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|name| !header_map.contains_key(*name))
        {
            return Err(LoadError::MissingColumn((*missing).to_string()));
        }

        let position = |name: &str| header_map.get(name).copied().unwrap_or_default();
        Ok(Self {
            instant: position("instant"),
            dteday: position("dteday"),
            season: position("season"),
            hr: position("hr"),
            weekday: position("weekday"),
            casual: position("casual"),
            registered: position("registered"),
            cnt: position("cnt"),
        })
    }
}

/// Loads every row of the CSV file at `path`, in file order.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RentalRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(file)?;
    info!(rows = records.len(), "loaded rental dataset");
    Ok(records)
}

/// Parses rental rows from any CSV source, in source order.
///
/// The returned rows carry their source position in `index`; the dataset
/// reassigns it after sorting.
pub fn read_records<R: Read>(source: R) -> Result<Vec<RentalRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv { line: 1, source })?
        .clone();
    let columns = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, lines are 1-based
        let line = idx + 2;
        let row = result.map_err(|source| LoadError::Csv { line, source })?;
        records.push(parse_row(&row, &columns, line, idx)?);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    debug!(rows = records.len(), "parsed CSV rows");
    Ok(records)
}

fn parse_row(
    row: &StringRecord,
    columns: &Columns,
    line: usize,
    index: usize,
) -> Result<RentalRecord, LoadError> {
    let raw_date = row.get(columns.dteday).unwrap_or_default();
    let date = parse_iso_date(raw_date).ok_or_else(|| LoadError::InvalidDate {
        line,
        value: raw_date.to_string(),
    })?;

    Ok(RentalRecord {
        id: parse_count(row, columns.instant, "instant", line)?,
        index,
        date,
        hour: parse_code(row, columns.hr, "hr", BucketKind::Hour, line)?,
        weekday: parse_code(row, columns.weekday, "weekday", BucketKind::Weekday, line)?,
        season: parse_code(row, columns.season, "season", BucketKind::Season, line)?,
        casual: parse_count(row, columns.casual, "casual", line)?,
        registered: parse_count(row, columns.registered, "registered", line)?,
        total: parse_count(row, columns.cnt, "cnt", line)?,
    })
}

fn parse_count(
    row: &StringRecord,
    idx: usize,
    column: &'static str,
    line: usize,
) -> Result<u64, LoadError> {
    let value = row.get(idx).unwrap_or_default();
    value.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        column,
        value: value.to_string(),
    })
}

fn parse_code(
    row: &StringRecord,
    idx: usize,
    column: &'static str,
    kind: BucketKind,
    line: usize,
) -> Result<u8, LoadError> {
    let value = parse_count(row, idx, column, line)?;
    u8::try_from(value)
        .ok()
        .filter(|code| kind.codes().contains(code))
        .ok_or(LoadError::OutOfRange {
            line,
            column,
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikedash_common::test_utils::CSV_HEADER;

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut content = format!("{CSV_HEADER}\n");
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        content
    }

    const ROW_A: &str = "1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16";
    const ROW_B: &str = "2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40";

    #[test]
    fn test_reads_rows_by_header_name() {
        let records = read_records(csv_with_rows(&[ROW_A, ROW_B]).as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        let first = records[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.index, 0);
        assert_eq!(first.date.to_string(), "2011-01-01");
        assert_eq!(first.hour, 0);
        assert_eq!(first.weekday, 6);
        assert_eq!(first.season, 1);
        assert_eq!((first.casual, first.registered, first.total), (3, 13, 16));
        assert_eq!(records[1].hour, 1);
        assert_eq!(records[1].index, 1);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let content = "cnt,registered,casual,weekday,hr,season,dteday,instant\n16,13,3,6,0,1,2011-01-01,7\n";
        let records = read_records(content.as_bytes()).unwrap();
        assert_eq!(records[0].id, 7);
        assert_eq!(records[0].total, 16);
    }

    #[test]
    fn test_timestamp_dates_keep_the_day() {
        let content = "instant,dteday,season,hr,weekday,casual,registered,cnt\n1,2011-01-01T05:00:00,1,5,6,1,2,3\n2,2011-01-02 06:00:00,1,6,0,1,2,3\n";
        let records = read_records(content.as_bytes()).unwrap();
        assert_eq!(records[0].date.to_string(), "2011-01-01");
        assert_eq!(records[1].date.to_string(), "2011-01-02");
    }

    #[test]
    fn test_missing_column() {
        let content = "instant,dteday,season,hr,weekday,casual,registered\n1,2011-01-01,1,0,6,3,13\n";
        let err = read_records(content.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref name) if name == "cnt"));
    }

    #[test]
    fn test_invalid_date() {
        let row = "1,01/01/2011,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16";
        let err = read_records(csv_with_rows(&[row]).as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { line: 2, .. }));
    }

    #[test]
    fn test_date_with_trailing_text_is_invalid() {
        let content = "instant,dteday,season,hr,weekday,casual,registered,cnt\n1,2011-01-01,1,0,6,1,2,3\n2,2011-01-02Tgarbage,1,0,0,1,2,3\n";
        let err = read_records(content.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { line: 3, ref value } if value == "2011-01-02Tgarbage"));

        let content = "instant,dteday,season,hr,weekday,casual,registered,cnt\n1,2011-01-01 not-a-time,1,0,6,1,2,3\n";
        let err = read_records(content.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { line: 2, .. }));
    }

    #[test]
    fn test_invalid_number() {
        let row = "1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,three,13,16";
        let err = read_records(csv_with_rows(&[ROW_A, row]).as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidNumber { line: 3, column: "casual", .. }
        ));
    }

    #[test]
    fn test_out_of_range_codes() {
        let bad_season = "1,2011-01-01,5,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16";
        let err = read_records(csv_with_rows(&[bad_season]).as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::OutOfRange { column: "season", value: 5, .. }
        ));

        let bad_hour = "1,2011-01-01,1,0,1,24,0,6,0,1,0.24,0.2879,0.81,0,3,13,16";
        let err = read_records(csv_with_rows(&[bad_hour]).as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::OutOfRange { column: "hr", .. }));

        let bad_weekday = "1,2011-01-01,1,0,1,0,0,300,0,1,0.24,0.2879,0.81,0,3,13,16";
        let err = read_records(csv_with_rows(&[bad_weekday]).as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::OutOfRange { column: "weekday", value: 300, .. }
        ));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let err = read_records(csv_with_rows(&[ROW_A, "2,2011-01-01,1"]).as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv { line: 3, .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = read_records(csv_with_rows(&[]).as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_missing_file() {
        let err = load_records("/nonexistent/hour.csv").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/hour.csv"));
    }

    #[test]
    fn test_converts_to_dash_error() {
        let err: DashError = LoadError::Empty.into();
        assert!(err.to_string().starts_with("Dataset load error"));
    }
}
