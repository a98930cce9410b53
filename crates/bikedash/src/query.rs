//! Date-range query parameters shared by the page and the JSON endpoint.

use crate::error::AppError;
use bikedash_common::parse_iso_date;
use bikedash_data::DateRange;
use chrono::NaiveDate;
use serde::Deserialize;

/// `?start=YYYY-MM-DD&end=YYYY-MM-DD`, both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RangeQuery {
    /// First selected day.
    pub start: Option<String>,
    /// Last selected day.
    pub end: Option<String>,
}

impl RangeQuery {
    /// The requested range clamped to `bounds`. Missing or blank ends default
    /// to the bounds; an unparseable end is a bad request.
    pub fn resolve(&self, bounds: &DateRange) -> Result<DateRange, AppError> {
        let start = parse_bound("start", self.start.as_deref())?.unwrap_or(bounds.start);
        let end = parse_bound("end", self.end.as_deref())?.unwrap_or(bounds.end);
        Ok(DateRange::new(start, end).clamp_to(bounds))
    }
}

fn parse_bound(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_iso_date(raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest {
                field,
                message: format!("'{raw}' is not a YYYY-MM-DD date"),
            }),
    }
}
