//! CSV parsing for the two per-well time-series sources.
//!
//! Water level files carry a `Date and Time` / `ft (below ground)` pair,
//! rain level files a `Date` / `Rain (in)` pair. Both normalize into
//! [`WellSample`] sequences with UTC timestamps. Malformed rows are skipped
//! with a logged warning rather than failing the whole file.

use crate::sample::{parse_rain_timestamp, parse_water_timestamp, WellSample};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use std::fmt;

/// The two per-well time-series sources and their CSV schemas.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SeriesKind {
    WaterLevel,
    RainLevel,
}

impl SeriesKind {
    /// Header name of the timestamp column for this source.
    pub fn timestamp_column(&self) -> &'static str {
        match self {
            SeriesKind::WaterLevel => "Date and Time",
            SeriesKind::RainLevel => "Date",
        }
    }

    /// Header name of the value column for this source.
    pub fn value_column(&self) -> &'static str {
        match self {
            SeriesKind::WaterLevel => "ft (below ground)",
            SeriesKind::RainLevel => "Rain (in)",
        }
    }

    /// Conventional file name for this source for a given well.
    pub fn file_name(&self, well_id: &str) -> String {
        match self {
            SeriesKind::WaterLevel => format!("{well_id}_water_level.csv"),
            SeriesKind::RainLevel => format!("{well_id}_rain_level.csv"),
        }
    }

    fn parse_timestamp(&self, text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match self {
            SeriesKind::WaterLevel => parse_water_timestamp(text),
            SeriesKind::RainLevel => parse_rain_timestamp(text),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::WaterLevel => write!(f, "water level"),
            SeriesKind::RainLevel => write!(f, "rain level"),
        }
    }
}

/// Errors that fail a whole series file, as opposed to a single row.
#[derive(Debug, PartialEq, Clone)]
pub enum SeriesParseError {
    HeaderReadError,
    MissingColumn(&'static str),
}

impl fmt::Display for SeriesParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesParseError::HeaderReadError => write!(f, "could not read CSV header row"),
            SeriesParseError::MissingColumn(name) => {
                write!(f, "CSV header is missing the \"{name}\" column")
            }
        }
    }
}

impl std::error::Error for SeriesParseError {}

/// Parse a series CSV body into samples, in file order.
///
/// Rows with the wrong shape, an unparseable timestamp, or a non-numeric
/// value are skipped with a warning; the parse succeeds with whatever rows
/// survive. A missing expected column fails the whole file.
pub fn parse_series(csv_text: &str, kind: SeriesKind) -> Result<Vec<WellSample>, SeriesParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| SeriesParseError::HeaderReadError)?
        .clone();
    let timestamp_idx = headers
        .iter()
        .position(|h| h.trim() == kind.timestamp_column())
        .ok_or(SeriesParseError::MissingColumn(kind.timestamp_column()))?;
    let value_idx = headers
        .iter()
        .position(|h| h.trim() == kind.value_column())
        .ok_or(SeriesParseError::MissingColumn(kind.value_column()))?;

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("skipping unreadable {kind} row: {e}");
                continue;
            }
        };
        match parse_row(&record, kind, timestamp_idx, value_idx) {
            Some(sample) => samples.push(sample),
            None => log::warn!("skipping malformed {kind} row: {record:?}"),
        }
    }
    Ok(samples)
}

fn parse_row(
    record: &StringRecord,
    kind: SeriesKind,
    timestamp_idx: usize,
    value_idx: usize,
) -> Option<WellSample> {
    let timestamp = kind.parse_timestamp(record.get(timestamp_idx)?).ok()?;
    let value = record.get(value_idx)?.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(WellSample { timestamp, value })
}

#[cfg(test)]
mod test {
    use super::*;

    const WATER_CSV: &str = "\
Date and Time,ft (below ground)
2024-11-07 14:02:35,25.31
2024-11-07 15:02:35,25.28
2024-11-07 16:02:35,25.30
";

    const RAIN_CSV: &str = "\
Date,Rain (in)
2024-11-01 (Fri),0.00
2024-11-02 (Sat),0.12
2024-11-03 (Sun),0.05
";

    const WATER_CSV_WITH_BAD_ROWS: &str = "\
Date and Time,ft (below ground)
2024-11-07 14:02:35,25.31
not a date,25.28
2024-11-07 16:02:35,not a number
2024-11-07 17:02:35
2024-11-07 18:02:35,25.27
";

    #[test]
    fn test_parse_water_series() {
        let samples = parse_series(WATER_CSV, SeriesKind::WaterLevel).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].value, 25.31);
        assert_eq!(samples[0].timestamp.to_rfc3339(), "2024-11-07T14:02:35+00:00");
    }

    #[test]
    fn test_parse_rain_series() {
        let samples = parse_series(RAIN_CSV, SeriesKind::RainLevel).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].value, 0.12);
        assert_eq!(samples[1].timestamp.to_rfc3339(), "2024-11-02T00:00:00+00:00");
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let samples = parse_series(WATER_CSV_WITH_BAD_ROWS, SeriesKind::WaterLevel).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].value, 25.31);
        assert_eq!(samples[1].value, 25.27);
    }

    #[test]
    fn test_missing_column_fails_file() {
        let result = parse_series("Timestamp,Depth\n2024-11-07 14:02:35,25.31\n", SeriesKind::WaterLevel);
        assert_eq!(
            result,
            Err(SeriesParseError::MissingColumn("Date and Time"))
        );
    }

    #[test]
    fn test_empty_body_parses_to_empty_series() {
        let samples = parse_series("Date,Rain (in)\n", SeriesKind::RainLevel).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_file_names_follow_well_convention() {
        assert_eq!(
            SeriesKind::WaterLevel.file_name("Escondido_5"),
            "Escondido_5_water_level.csv"
        );
        assert_eq!(
            SeriesKind::RainLevel.file_name("Escondido_5"),
            "Escondido_5_rain_level.csv"
        );
    }
}
