use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used in water level CSV files: "2024-11-07 14:02:35"
pub const WATER_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used in rain level CSV files: "2024-11-02"
pub const RAIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single time-series sample: a UTC instant and a measured value.
///
/// The value is depth-to-water in feet for water level series and rainfall
/// in inches for rain series. Samples belong to sequences ordered ascending
/// by timestamp; duplicate timestamps are permitted and unordered among
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellSample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Sort a series ascending by timestamp.
///
/// The sort is stable, so samples sharing a timestamp keep their file order.
pub fn sort_ascending(samples: &mut [WellSample]) {
    samples.sort_by_key(|s| s.timestamp);
}

/// Parse a water level timestamp ("2024-11-07 14:02:35"). The source files
/// carry no zone designator; instants are taken as UTC.
pub fn parse_water_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), WATER_DATETIME_FORMAT).map(|dt| dt.and_utc())
}

/// Parse a rain level date. Rain files append a weekday annotation
/// ("2024-11-02 (Sat)"); only the part before the first space is
/// significant. Normalizes to midnight UTC.
pub fn parse_rain_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let date_part = text.split_whitespace().next().unwrap_or(text);
    NaiveDate::parse_from_str(date_part, RAIN_DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}
