//! Lithology JSON parsing and structural validation.
//!
//! A `<wellId>_lithology.json` file carries the well coordinates and the
//! layer column used to render the geological diagram:
//!
//! ```json
//! {
//!   "coordinates": { "latitude": 34.5399, "longitude": -120.4531 },
//!   "layers": [
//!     { "startDepth": 0, "endDepth": 100, "type": "unconsolidated-coarse-grained" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rock/soil composition categories found in well lithology files.
///
/// Unknown category strings deserialize to `Other` so a new class in the
/// data does not fail the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LithologyClass {
    UnconsolidatedCoarseGrained,
    UnconsolidatedMostlyFineGrained,
    SedimentaryCoarseAndFineGrained,
    #[serde(other)]
    Other,
}

impl LithologyClass {
    /// Fill color used by the lithology column diagram.
    pub fn color(&self) -> &'static str {
        match self {
            LithologyClass::UnconsolidatedCoarseGrained
            | LithologyClass::UnconsolidatedMostlyFineGrained => "#EA580C",
            LithologyClass::SedimentaryCoarseAndFineGrained => "#3B82F6",
            LithologyClass::Other => "#6B7280",
        }
    }

    /// Short label for legends and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            LithologyClass::UnconsolidatedCoarseGrained => "Unconsolidated, coarse grained",
            LithologyClass::UnconsolidatedMostlyFineGrained => "Unconsolidated, mostly fine grained",
            LithologyClass::SedimentaryCoarseAndFineGrained => "Sedimentary, coarse and fine grained",
            LithologyClass::Other => "Other",
        }
    }
}

/// A depth interval classified by composition, in feet below ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LithologyLayer {
    pub start_depth: f64,
    pub end_depth: f64,
    #[serde(rename = "type")]
    pub class: LithologyClass,
}

impl LithologyLayer {
    /// Layer thickness in feet.
    pub fn thickness(&self) -> f64 {
        self.end_depth - self.start_depth
    }
}

/// Well location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Contents of a `<wellId>_lithology.json` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LithologyRecord {
    pub coordinates: WellCoordinates,
    pub layers: Vec<LithologyLayer>,
}

/// Structural problems in a lithology layer list.
#[derive(Debug, PartialEq, Clone)]
pub enum LithologyError {
    NoLayers,
    SurfaceNotAtZero(f64),
    InvertedLayer { start: f64, end: f64 },
    Discontiguous { expected: f64, found: f64 },
}

impl fmt::Display for LithologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LithologyError::NoLayers => write!(f, "lithology has no layers"),
            LithologyError::SurfaceNotAtZero(depth) => {
                write!(f, "first layer starts at {depth} ft, expected 0")
            }
            LithologyError::InvertedLayer { start, end } => {
                write!(f, "layer ends at {end} ft before it starts at {start} ft")
            }
            LithologyError::Discontiguous { expected, found } => {
                write!(f, "layer starts at {found} ft, expected {expected} ft")
            }
        }
    }
}

impl std::error::Error for LithologyError {}

/// Conventional lithology file name for a well.
pub fn file_name(well_id: &str) -> String {
    format!("{well_id}_lithology.json")
}

/// Parse and validate a lithology JSON body.
pub fn parse_record(json_text: &str) -> anyhow::Result<LithologyRecord> {
    let record: LithologyRecord = serde_json::from_str(json_text)?;
    validate_layers(&record.layers)?;
    Ok(record)
}

/// Layers must tile `[0, max_depth]`: the first starts at the surface, each
/// next starts where the previous ended, and every layer has positive
/// thickness.
pub fn validate_layers(layers: &[LithologyLayer]) -> Result<(), LithologyError> {
    let first = layers.first().ok_or(LithologyError::NoLayers)?;
    if first.start_depth != 0.0 {
        return Err(LithologyError::SurfaceNotAtZero(first.start_depth));
    }
    let mut bottom = 0.0;
    for layer in layers {
        if layer.start_depth != bottom {
            return Err(LithologyError::Discontiguous {
                expected: bottom,
                found: layer.start_depth,
            });
        }
        if layer.end_depth <= layer.start_depth {
            return Err(LithologyError::InvertedLayer {
                start: layer.start_depth,
                end: layer.end_depth,
            });
        }
        bottom = layer.end_depth;
    }
    Ok(())
}
