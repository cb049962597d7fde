use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::materials::MaterialCategory;

/// A design submission as stored by the drawing UI.
///
/// The storage collaborator hands these over as JSON; field aliases
/// keep older payloads (Chinese category keys, camelCase sketch
/// statistics) parseable.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignRecord {
    #[serde(default)]
    pub design_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub drawing: Drawing,
    pub materials: MaterialSelection,
}

/// Drawing geometry, in meters.
///
/// Three shapes arrive from the UI: a traced polygon outline, a plain
/// bounding box, or raw freehand stroke statistics from the sketch
/// canvas.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Drawing {
    Polygon { points: Vec<(f64, f64)> },
    Bounds { width: f64, height: f64 },
    Sketch { statistics: SketchStatistics },
}

/// Stroke counts reported by the sketch canvas.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SketchStatistics {
    #[serde(alias = "totalPoints")]
    pub total_points: u64,
    #[serde(alias = "pathCount")]
    pub path_count: u64,
}

/// Material names picked for each slot of the design.
///
/// Every slot may hold several materials (the UI allows mixing) or
/// none at all; an empty slot simply contributes nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialSelection {
    #[serde(default, alias = "骨架材料")]
    pub frame: Vec<String>,
    #[serde(default, alias = "风筝面料")]
    pub sail: Vec<String>,
    #[serde(default, alias = "绳索材料")]
    pub line: Vec<String>,
}

impl MaterialSelection {
    /// Selected names for one category.
    pub fn names(&self, category: MaterialCategory) -> &[String] {
        match category {
            MaterialCategory::Frame => &self.frame,
            MaterialCategory::Sail => &self.sail,
            MaterialCategory::Line => &self.line,
        }
    }

    /// Count of distinct material names across all categories.
    pub fn distinct_count(&self) -> usize {
        let mut seen: Vec<&str> = self
            .frame
            .iter()
            .chain(&self.sail)
            .chain(&self.line)
            .map(String::as_str)
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}
