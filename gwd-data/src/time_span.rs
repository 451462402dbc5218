//! Trailing-window filtering of time series for display.

use chrono::{DateTime, Months, TimeDelta, Utc};
use gwd_well::sample::WellSample;

/// Named trailing-window lengths selectable in the dashboard. Every window
/// ends at the series' last sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSpan {
    OneDay,
    OneWeek,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    ThreeYears,
    All,
}

impl TimeSpan {
    /// Spans offered by the picker row, in display order.
    pub const PICKER: [TimeSpan; 7] = [
        TimeSpan::OneDay,
        TimeSpan::OneWeek,
        TimeSpan::ThreeMonths,
        TimeSpan::SixMonths,
        TimeSpan::OneYear,
        TimeSpan::TwoYears,
        TimeSpan::ThreeYears,
    ];

    /// Short label shown on the picker buttons.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSpan::OneDay => "1D",
            TimeSpan::OneWeek => "1W",
            TimeSpan::ThreeMonths => "3M",
            TimeSpan::SixMonths => "6M",
            TimeSpan::OneYear => "1Y",
            TimeSpan::TwoYears => "2Y",
            TimeSpan::ThreeYears => "3Y",
            TimeSpan::All => "ALL",
        }
    }

    /// Start of a window ending at `end`, or `None` when the span does not
    /// bound the window (`All`). Month and year subtraction follow calendar
    /// rollover: stepping back from a month-end date clamps to the nearest
    /// valid day.
    pub fn window_start(&self, end: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeSpan::OneDay => Some(end - TimeDelta::days(1)),
            TimeSpan::OneWeek => Some(end - TimeDelta::days(7)),
            TimeSpan::ThreeMonths => end.checked_sub_months(Months::new(3)),
            TimeSpan::SixMonths => end.checked_sub_months(Months::new(6)),
            TimeSpan::OneYear => end.checked_sub_months(Months::new(12)),
            TimeSpan::TwoYears => end.checked_sub_months(Months::new(24)),
            TimeSpan::ThreeYears => end.checked_sub_months(Months::new(36)),
            TimeSpan::All => None,
        }
    }
}

/// Narrow a timestamp-ascending series to the trailing window selected by
/// `span`, inclusive on both ends.
///
/// `All` returns the series unchanged, and so does an empty input: there is
/// no last sample to anchor the window, so the contract is "empty in, empty
/// out" rather than a panic. The result is a subslice, so relative order is
/// preserved by construction.
pub fn filter_time_span(samples: &[WellSample], span: TimeSpan) -> &[WellSample] {
    let Some(last) = samples.last() else {
        return samples;
    };
    // window_start is also None if calendar subtraction left the supported
    // date range entirely; the whole series is the right answer there too.
    let Some(start) = span.window_start(last.timestamp) else {
        return samples;
    };
    let from = samples.partition_point(|s| s.timestamp < start);
    &samples[from..]
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn sample(date: (i32, u32, u32), time: (u32, u32), value: f64) -> WellSample {
        let timestamp = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap())
            .and_utc();
        WellSample { timestamp, value }
    }

    #[test]
    fn test_one_day_window_keeps_short_series() {
        // Three hourly samples all sit inside the trailing day.
        let samples = vec![
            sample((2024, 8, 3), (10, 0), 120.0),
            sample((2024, 8, 3), (11, 0), 122.0),
            sample((2024, 8, 3), (12, 0), 121.0),
        ];
        let filtered = filter_time_span(&samples, TimeSpan::OneDay);
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered, &samples[..]);
    }

    #[test]
    fn test_all_is_identity() {
        let samples = vec![
            sample((2020, 1, 1), (0, 0), 1.0),
            sample((2024, 8, 3), (12, 0), 2.0),
        ];
        assert_eq!(filter_time_span(&samples, TimeSpan::All), &samples[..]);
    }

    #[test]
    fn test_week_window_drops_older_samples() {
        let samples = vec![
            sample((2024, 7, 20), (12, 0), 1.0),
            sample((2024, 7, 27), (12, 0), 2.0),
            sample((2024, 8, 1), (12, 0), 3.0),
            sample((2024, 8, 3), (12, 0), 4.0),
        ];
        let filtered = filter_time_span(&samples, TimeSpan::OneWeek);
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].value, 2.0);
    }

    #[test]
    fn test_window_start_is_inclusive() {
        let samples = vec![
            sample((2024, 8, 2), (12, 0), 1.0),
            sample((2024, 8, 3), (12, 0), 2.0),
        ];
        // First sample lies exactly on the window boundary.
        let filtered = filter_time_span(&samples, TimeSpan::OneDay);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_month_subtraction_clamps_at_month_end() {
        // May 31 minus three months clamps to the leap-year Feb 29.
        let samples = vec![
            sample((2024, 2, 28), (0, 0), 1.0),
            sample((2024, 2, 29), (0, 0), 2.0),
            sample((2024, 5, 31), (0, 0), 3.0),
        ];
        let filtered = filter_time_span(&samples, TimeSpan::ThreeMonths);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].value, 2.0);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let filtered = filter_time_span(&[], TimeSpan::OneYear);
        assert!(filtered.is_empty());
        assert!(filter_time_span(&[], TimeSpan::All).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeSpan::OneDay.label(), "1D");
        assert_eq!(TimeSpan::All.label(), "ALL");
        assert_eq!(TimeSpan::PICKER.len(), 7);
    }
}
