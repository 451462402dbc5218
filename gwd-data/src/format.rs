//! Display formatting for axis labels, hovered timestamps, and coordinates.

use crate::time_span::TimeSpan;
use chrono::{DateTime, Utc};
use gwd_well::lithology::WellCoordinates;

/// X-axis label for a timestamp under the active time span: hours for a
/// day, day-of-month while weeks and months fit, month-year and bare years
/// as the window widens.
pub fn timestamp_label(timestamp: DateTime<Utc>, span: TimeSpan) -> String {
    let fmt = match span {
        TimeSpan::OneDay => "%H:00",
        TimeSpan::OneWeek | TimeSpan::ThreeMonths => "%b %-d",
        TimeSpan::SixMonths | TimeSpan::OneYear => "%b '%y",
        TimeSpan::TwoYears | TimeSpan::ThreeYears | TimeSpan::All => "%Y",
    };
    timestamp.format(fmt).to_string()
}

/// Full timestamp for the hovered-sample readout under the chart title.
pub fn hover_label(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Decimal degrees to a degrees-minutes-seconds pair for the well summary
/// card, e.g. `34°30'0.00" N, 120°15'0.00" W`.
pub fn format_dms(coordinates: &WellCoordinates) -> String {
    format!(
        "{}, {}",
        dms_component(coordinates.latitude, 'N', 'S'),
        dms_component(coordinates.longitude, 'E', 'W')
    )
}

fn dms_component(decimal_degrees: f64, positive: char, negative: char) -> String {
    let hemisphere = if decimal_degrees < 0.0 { negative } else { positive };
    let value = decimal_degrees.abs();
    let degrees = value.trunc();
    let minutes_full = (value - degrees) * 60.0;
    let minutes = minutes_full.trunc();
    let seconds = (minutes_full - minutes) * 60.0;
    format!("{degrees:.0}°{minutes:.0}'{seconds:.2}\" {hemisphere}")
}
