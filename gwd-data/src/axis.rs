//! Y-axis bounds and tick helpers for the chart widgets.

use gwd_well::sample::WellSample;

/// Value range padded by 10% of the span on each side, so the line does not
/// touch the chart frame. A flat or single-sample series gets a unit span
/// to keep the axis drawable.
pub fn padded_bounds(samples: &[WellSample]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 1.0);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        min = min.min(sample.value);
        max = max.max(sample.value);
    }
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let padding = range * 0.2 * 0.5;
    (min - padding, max + padding)
}

/// Stepped tick interval for a value range.
pub fn tick_interval(min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 12.0 {
        2.0
    } else if range <= 50.0 {
        5.0
    } else if range <= 100.0 {
        10.0
    } else if range <= 500.0 {
        50.0
    } else {
        100.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeDelta, Utc};

    fn series(values: &[f64]) -> Vec<WellSample> {
        let base = Utc::now();
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| WellSample {
                timestamp: base + TimeDelta::hours(i as i64),
                value,
            })
            .collect()
    }

    #[test]
    fn test_padded_bounds() {
        let (min, max) = padded_bounds(&series(&[120.0, 130.0, 125.0]));
        assert_eq!(min, 119.0);
        assert_eq!(max, 131.0);
    }

    #[test]
    fn test_flat_series_gets_unit_span() {
        let (min, max) = padded_bounds(&series(&[25.0, 25.0]));
        assert_eq!(min, 24.9);
        assert_eq!(max, 25.1);
    }

    #[test]
    fn test_empty_series_defaults() {
        assert_eq!(padded_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_tick_interval_steps() {
        assert_eq!(tick_interval(0.0, 10.0), 2.0);
        assert_eq!(tick_interval(0.0, 40.0), 5.0);
        assert_eq!(tick_interval(0.0, 80.0), 10.0);
        assert_eq!(tick_interval(0.0, 400.0), 50.0);
        assert_eq!(tick_interval(0.0, 2000.0), 100.0);
    }
}
