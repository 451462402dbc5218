//! The combined per-well dataset consumed by the dashboard.

use crate::lithology::{self, LithologyLayer, WellCoordinates};
use crate::sample::{self, WellSample};
use crate::series::{self, SeriesKind};
use anyhow::Context;

/// Everything the dashboard needs for one well: both time series sorted
/// ascending by timestamp, the well coordinates, and the lithology column.
///
/// Immutable once assembled; selecting a different well replaces the whole
/// dataset rather than mutating it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedWellDataset {
    pub well_id: String,
    pub water_level: Vec<WellSample>,
    pub rain_level: Vec<WellSample>,
    pub coordinates: WellCoordinates,
    pub layers: Vec<LithologyLayer>,
}

impl CombinedWellDataset {
    /// Assemble a dataset from the three raw per-well resources.
    ///
    /// Series rows that fail to parse are skipped (with a warning) by the
    /// series parsers; a structurally invalid lithology file fails the whole
    /// assembly.
    pub fn assemble(
        well_id: &str,
        water_csv: &str,
        rain_csv: &str,
        lithology_json: &str,
    ) -> anyhow::Result<Self> {
        let mut water_level = series::parse_series(water_csv, SeriesKind::WaterLevel)
            .with_context(|| format!("reading {}", SeriesKind::WaterLevel.file_name(well_id)))?;
        let mut rain_level = series::parse_series(rain_csv, SeriesKind::RainLevel)
            .with_context(|| format!("reading {}", SeriesKind::RainLevel.file_name(well_id)))?;
        let record = lithology::parse_record(lithology_json)
            .with_context(|| format!("reading {}", lithology::file_name(well_id)))?;

        sample::sort_ascending(&mut water_level);
        sample::sort_ascending(&mut rain_level);

        Ok(Self {
            well_id: well_id.to_string(),
            water_level,
            rain_level,
            coordinates: record.coordinates,
            layers: record.layers,
        })
    }

    /// Depth of the bottom of the deepest layer, in feet.
    pub fn max_depth(&self) -> f64 {
        self.layers.last().map(|l| l.end_depth).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WATER_CSV: &str = "\
Date and Time,ft (below ground)
2024-11-07 16:02:35,25.30
2024-11-07 14:02:35,25.31
2024-11-07 15:02:35,25.28
";

    const RAIN_CSV: &str = "\
Date,Rain (in)
2024-11-02 (Sat),0.12
2024-11-01 (Fri),0.00
";

    const LITHOLOGY_JSON: &str = r#"{
        "coordinates": { "latitude": 34.5399, "longitude": -120.4531 },
        "layers": [
            { "startDepth": 0, "endDepth": 100, "type": "unconsolidated-coarse-grained" },
            { "startDepth": 100, "endDepth": 300, "type": "sedimentary-coarse-and-fine-grained" }
        ]
    }"#;

    #[test]
    fn test_assemble_sorts_both_series() {
        let dataset =
            CombinedWellDataset::assemble("Escondido_5", WATER_CSV, RAIN_CSV, LITHOLOGY_JSON)
                .unwrap();
        assert_eq!(dataset.well_id, "Escondido_5");
        let water_times: Vec<_> = dataset.water_level.iter().map(|s| s.timestamp).collect();
        assert!(water_times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(dataset.water_level[0].value, 25.31);
        assert_eq!(dataset.rain_level[0].value, 0.00);
    }

    #[test]
    fn test_max_depth_is_deepest_layer_bottom() {
        let dataset =
            CombinedWellDataset::assemble("Escondido_5", WATER_CSV, RAIN_CSV, LITHOLOGY_JSON)
                .unwrap();
        assert_eq!(dataset.max_depth(), 300.0);
    }

    #[test]
    fn test_invalid_lithology_fails_assembly() {
        let bad_lithology = r#"{
            "coordinates": { "latitude": 0.0, "longitude": 0.0 },
            "layers": [ { "startDepth": 50, "endDepth": 100, "type": "other" } ]
        }"#;
        let result =
            CombinedWellDataset::assemble("Escondido_5", WATER_CSV, RAIN_CSV, bad_lithology);
        assert!(result.is_err());
    }
}
