//! Nearest-timestamp matching across series with different sampling rates.

use chrono::{DateTime, TimeDelta, Utc};
use gwd_well::sample::WellSample;

/// Index of the sample whose timestamp is closest to `reference`.
///
/// Ties go to the earliest index: the scan keeps a running minimum and only
/// replaces it on a strictly smaller difference. References outside the
/// covered range resolve to the nearest endpoint. Returns `None` only for
/// an empty series.
pub fn nearest_sample(samples: &[WellSample], reference: DateTime<Utc>) -> Option<usize> {
    let mut best: Option<(usize, TimeDelta)> = None;
    for (idx, sample) in samples.iter().enumerate() {
        let diff = (sample.timestamp - reference).abs();
        match best {
            Some((_, min)) if diff >= min => {}
            _ => best = Some((idx, diff)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Map an index in `from` to the nearest index in `to`, using the source
/// sample's timestamp. `None` when the index is out of bounds or the target
/// series is empty.
pub fn translate_index(from: &[WellSample], to: &[WellSample], idx: usize) -> Option<usize> {
    let sample = from.get(idx)?;
    nearest_sample(to, sample.timestamp)
}
