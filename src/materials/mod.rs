use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Properties of a single build material.
///
/// Materials are identified by their table key (the display name); the
/// record itself carries only the numeric attributes the calculator
/// reads. For frame and sail materials `density` is an effective
/// surface density in kg/m²; for line materials it is kg per meter of
/// tether. `strength` is a 0-100 index, `cost` a unit-cost factor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialProperty {
    pub density: f64,
    pub strength: f64,
    pub cost: f64,
}

/// The three material slots a design can fill.
///
/// Frame and sail drive weight and strength; the flying line only adds
/// cost and counts toward material diversity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialCategory {
    Frame,
    Sail,
    Line,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 3] = [
        MaterialCategory::Frame,
        MaterialCategory::Sail,
        MaterialCategory::Line,
    ];
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaterialCategory::Frame => "frame",
            MaterialCategory::Sail => "sail",
            MaterialCategory::Line => "line",
        };
        write!(f, "{}", name)
    }
}

/// Material tables, one per category.
///
/// Loaded once with the rest of the config and never mutated. Keys are
/// the names designs refer to; the defaults keep the original product
/// catalog so stored designs resolve without a config file.
///
/// Example YAML:
/// ```yaml
/// materials:
///   frame:
///     竹子: { density: 0.5, strength: 80, cost: 2.0 }
///   sail:
///     丝绸: { density: 0.06, strength: 60, cost: 2.0 }
///   line:
///     麻绳: { density: 0.008, strength: 30, cost: 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialsConfig {
    pub frame: BTreeMap<String, MaterialProperty>,
    pub sail: BTreeMap<String, MaterialProperty>,
    pub line: BTreeMap<String, MaterialProperty>,
}

impl MaterialsConfig {
    /// Table for one category.
    pub fn table(&self, category: MaterialCategory) -> &BTreeMap<String, MaterialProperty> {
        match category {
            MaterialCategory::Frame => &self.frame,
            MaterialCategory::Sail => &self.sail,
            MaterialCategory::Line => &self.line,
        }
    }

    /// Look up a material by category and name.
    pub fn get(&self, category: MaterialCategory, name: &str) -> Option<&MaterialProperty> {
        self.table(category).get(name)
    }
}

impl Default for MaterialsConfig {
    fn default() -> Self {
        fn prop(density: f64, strength: f64, cost: f64) -> MaterialProperty {
            MaterialProperty {
                density,
                strength,
                cost,
            }
        }

        let frame = BTreeMap::from([
            ("竹子".to_string(), prop(0.5, 80.0, 2.0)),
            ("铝合金".to_string(), prop(1.1, 90.0, 3.5)),
            ("碳纤维".to_string(), prop(0.4, 95.0, 8.0)),
        ]);
        let sail = BTreeMap::from([
            ("丝绸".to_string(), prop(0.06, 60.0, 2.0)),
            ("尼龙".to_string(), prop(0.085, 90.0, 1.5)),
            ("Mylar膜".to_string(), prop(0.05, 75.0, 3.0)),
        ]);
        let line = BTreeMap::from([
            ("麻绳".to_string(), prop(0.008, 30.0, 0.5)),
            ("钢索".to_string(), prop(0.015, 85.0, 2.0)),
            ("凯夫拉".to_string(), prop(0.005, 95.0, 5.0)),
        ]);

        Self { frame, sail, line }
    }
}
