use serde::{Deserialize, Serialize};

use crate::materials::MaterialsConfig;
use crate::scoring::ScoringConfig;

/// Top-level configuration: calculator constants, scoring weights and
/// bands, and the material tables. Loaded once at startup, validated,
/// then shared read-only for the life of the process.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub calculator: CalculatorConfig,
    pub scoring: ScoringConfig,
    pub materials: MaterialsConfig,
}

/// Tunable constants for deriving parameters from a drawing.
///
/// These are product tuning knobs, not physics: they exist to keep the
/// score spread sensible for hand-drawn designs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Share of the sail area the frame effectively covers when its
    /// surface density is applied.
    pub frame_area_factor: f64,
    /// Frame length per unit of outline perimeter (cross-bracing
    /// allowance).
    pub strut_factor: f64,
    /// Frame share of the aggregated strength index (the sail takes
    /// the rest).
    pub frame_strength_share: f64,
    /// Assumed flying-line length in meters.
    pub line_length: f64,
    /// Cost units per meter of line per unit material cost.
    pub line_cost_rate: f64,
    /// Square meters of sail one recorded sketch point stands for.
    pub sketch_point_area: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            frame_area_factor: 0.3,
            strut_factor: 1.5,
            frame_strength_share: 0.7,
            line_length: 50.0,
            line_cost_rate: 0.2,
            sketch_point_area: 0.0001,
        }
    }
}
