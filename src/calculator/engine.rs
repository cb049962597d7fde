use serde::Serialize;
use thiserror::Error;

use super::geometry::{self, Dimensions};
use crate::config::CalculatorConfig;
use crate::design::{DesignRecord, Drawing};
use crate::materials::{MaterialCategory, MaterialProperty, MaterialsConfig};

/// Physical parameters derived from one design submission.
///
/// Produced in full or not at all; a resolution or geometry failure
/// surfaces as [`CalculationError`] before any field is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KiteParameters {
    /// Sail area in m².
    pub area: f64,
    /// Frame plus sail weight in kg. The flying line is held by the
    /// pilot, so it never counts here.
    pub total_weight: f64,
    /// kg per m² of sail.
    pub weight_to_area_ratio: f64,
    /// Relative cost units across all three material slots.
    pub estimated_cost: f64,
    /// 0-100 structural index aggregated from the chosen materials.
    pub strength_score: f64,
    /// Distinct material names across all slots.
    pub material_diversity: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("invalid drawing: {reason}")]
    InvalidDrawing { reason: String },

    #[error("unknown {category} material '{name}'")]
    UnknownMaterial {
        category: MaterialCategory,
        name: String,
    },
}

/// Derive [`KiteParameters`] from a design record.
///
/// Pure function of the record and the loaded configuration. Fails on
/// degenerate geometry or a material name absent from the table.
pub fn calculate_parameters(
    design: &DesignRecord,
    config: &CalculatorConfig,
    materials: &MaterialsConfig,
) -> Result<KiteParameters, CalculationError> {
    let dims = drawing_dimensions(&design.drawing, config);
    check_dimensions(&dims)?;

    // Resolve every selected name up front so an unknown material can
    // never yield partial parameters.
    let frame = resolve(materials, MaterialCategory::Frame, design.materials.names(MaterialCategory::Frame))?;
    let sail = resolve(materials, MaterialCategory::Sail, design.materials.names(MaterialCategory::Sail))?;
    let line = resolve(materials, MaterialCategory::Line, design.materials.names(MaterialCategory::Line))?;

    let frame_density = mean(&frame, |m| m.density);
    let sail_density = mean(&sail, |m| m.density);
    let total_weight = dims.area * (config.frame_area_factor * frame_density + sail_density);

    let frame_length = dims.perimeter * config.strut_factor;
    let estimated_cost = frame_length * mean(&frame, |m| m.cost)
        + dims.area * mean(&sail, |m| m.cost)
        + config.line_length * config.line_cost_rate * mean(&line, |m| m.cost);

    let strength_score = config.frame_strength_share * mean(&frame, |m| m.strength)
        + (1.0 - config.frame_strength_share) * mean(&sail, |m| m.strength);

    Ok(KiteParameters {
        area: round2(dims.area),
        total_weight: round2(total_weight),
        weight_to_area_ratio: round2(total_weight / dims.area),
        estimated_cost: round2(estimated_cost),
        strength_score: round2(strength_score),
        material_diversity: design.materials.distinct_count() as u32,
    })
}

fn drawing_dimensions(drawing: &Drawing, config: &CalculatorConfig) -> Dimensions {
    match drawing {
        Drawing::Polygon { points } => geometry::polygon_dimensions(points),
        Drawing::Bounds { width, height } => geometry::bounds_dimensions(*width, *height),
        Drawing::Sketch { statistics } => {
            geometry::sketch_dimensions(*statistics, config.sketch_point_area)
        }
    }
}

fn check_dimensions(dims: &Dimensions) -> Result<(), CalculationError> {
    if !dims.area.is_finite() || !dims.perimeter.is_finite() {
        return Err(CalculationError::InvalidDrawing {
            reason: "geometry is not finite".to_string(),
        });
    }
    if dims.area <= 0.0 {
        return Err(CalculationError::InvalidDrawing {
            reason: format!("enclosed area is {} m²", dims.area),
        });
    }
    Ok(())
}

fn resolve<'a>(
    materials: &'a MaterialsConfig,
    category: MaterialCategory,
    names: &[String],
) -> Result<Vec<&'a MaterialProperty>, CalculationError> {
    names
        .iter()
        .map(|name| {
            materials
                .get(category, name)
                .ok_or_else(|| CalculationError::UnknownMaterial {
                    category,
                    name: name.clone(),
                })
        })
        .collect()
}

/// Mean of an attribute over the selected materials; an empty slot
/// contributes zero.
fn mean(selected: &[&MaterialProperty], attr: impl Fn(&MaterialProperty) -> f64) -> f64 {
    if selected.is_empty() {
        return 0.0;
    }
    selected.iter().map(|&m| attr(m)).sum::<f64>() / selected.len() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::MaterialSelection;

    fn sample_design(frame: &[&str], sail: &[&str], line: &[&str]) -> DesignRecord {
        DesignRecord {
            design_id: None,
            created_at: None,
            drawing: Drawing::Polygon {
                points: vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            },
            materials: MaterialSelection {
                frame: frame.iter().map(|s| s.to_string()).collect(),
                sail: sail.iter().map(|s| s.to_string()).collect(),
                line: line.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    fn defaults() -> (CalculatorConfig, MaterialsConfig) {
        (CalculatorConfig::default(), MaterialsConfig::default())
    }

    #[test]
    fn test_bamboo_silk_square_meter() {
        let (config, materials) = defaults();
        let design = sample_design(&["竹子"], &["丝绸"], &[]);
        let params = calculate_parameters(&design, &config, &materials).unwrap();

        assert_eq!(params.area, 1.0);
        // 1.0 * (0.3 * 0.5 + 0.06)
        assert_eq!(params.total_weight, 0.21);
        assert_eq!(params.weight_to_area_ratio, 0.21);
        // frame 4 m perimeter * 1.5 struts * cost 2.0 + 1 m² * cost 2.0
        assert_eq!(params.estimated_cost, 14.0);
        // 0.7 * 80 + 0.3 * 60
        assert_eq!(params.strength_score, 74.0);
        assert_eq!(params.material_diversity, 2);
    }

    #[test]
    fn test_line_adds_cost_but_not_weight() {
        let (config, materials) = defaults();
        let without = calculate_parameters(&sample_design(&["竹子"], &["丝绸"], &[]), &config, &materials).unwrap();
        let with = calculate_parameters(
            &sample_design(&["竹子"], &["丝绸"], &["麻绳"]),
            &config,
            &materials,
        )
        .unwrap();

        assert_eq!(with.total_weight, without.total_weight);
        assert_eq!(with.strength_score, without.strength_score);
        // 50 m * 0.2 * cost 0.5 = 5.0 on top
        assert_eq!(with.estimated_cost, without.estimated_cost + 5.0);
        assert_eq!(with.material_diversity, 3);
    }

    #[test]
    fn test_mixed_frame_materials_average() {
        let (config, materials) = defaults();
        let design = sample_design(&["竹子", "碳纤维"], &["丝绸"], &[]);
        let params = calculate_parameters(&design, &config, &materials).unwrap();

        // densities (0.5 + 0.4) / 2 = 0.45 -> weight 1.0 * (0.3 * 0.45 + 0.06)
        assert_eq!(params.total_weight, 0.2);
        // strengths (80 + 95) / 2 = 87.5 -> 0.7 * 87.5 + 0.3 * 60
        assert_eq!(params.strength_score, 79.25);
        assert_eq!(params.material_diversity, 3);
    }

    #[test]
    fn test_unknown_material() {
        let (config, materials) = defaults();
        let design = sample_design(&["unobtainium"], &["丝绸"], &[]);
        let err = calculate_parameters(&design, &config, &materials).unwrap_err();
        assert_eq!(
            err,
            CalculationError::UnknownMaterial {
                category: MaterialCategory::Frame,
                name: "unobtainium".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_material_checked_before_parameters() {
        let (config, materials) = defaults();
        // Valid frame, bogus line: still no partial result
        let design = sample_design(&["竹子"], &["丝绸"], &["taut-string-of-wishes"]);
        assert!(matches!(
            calculate_parameters(&design, &config, &materials),
            Err(CalculationError::UnknownMaterial { .. })
        ));
    }

    #[test]
    fn test_zero_area_rejected() {
        let (config, materials) = defaults();
        let mut design = sample_design(&["竹子"], &["丝绸"], &[]);
        design.drawing = Drawing::Polygon {
            points: vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)],
        };
        assert!(matches!(
            calculate_parameters(&design, &config, &materials),
            Err(CalculationError::InvalidDrawing { .. })
        ));
    }

    #[test]
    fn test_negative_bounds_rejected() {
        let (config, materials) = defaults();
        let mut design = sample_design(&["竹子"], &["丝绸"], &[]);
        design.drawing = Drawing::Bounds {
            width: -1.0,
            height: 0.5,
        };
        assert!(matches!(
            calculate_parameters(&design, &config, &materials),
            Err(CalculationError::InvalidDrawing { .. })
        ));
    }

    #[test]
    fn test_non_finite_geometry_rejected() {
        let (config, materials) = defaults();
        let mut design = sample_design(&["竹子"], &["丝绸"], &[]);
        design.drawing = Drawing::Polygon {
            points: vec![(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)],
        };
        assert!(matches!(
            calculate_parameters(&design, &config, &materials),
            Err(CalculationError::InvalidDrawing { .. })
        ));
    }

    #[test]
    fn test_empty_slots_contribute_zero() {
        let (config, materials) = defaults();
        let design = sample_design(&["竹子"], &[], &[]);
        let params = calculate_parameters(&design, &config, &materials).unwrap();

        // Only the frame term remains
        assert_eq!(params.total_weight, 0.15);
        assert_eq!(params.strength_score, 56.0);
        assert_eq!(params.material_diversity, 1);
    }

    #[test]
    fn test_sketch_drawing_end_to_end() {
        let (config, materials) = defaults();
        let mut design = sample_design(&["竹子"], &["尼龙"], &[]);
        design.drawing = Drawing::Sketch {
            statistics: crate::design::SketchStatistics {
                total_points: 10_000,
                path_count: 6,
            },
        };
        let params = calculate_parameters(&design, &config, &materials).unwrap();
        assert_eq!(params.area, 1.0);
        assert!(params.total_weight > 0.0);
    }
}
