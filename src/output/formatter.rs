use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::calculator::KiteParameters;
use crate::design::DesignRecord;
use crate::materials::{MaterialCategory, MaterialsConfig};
use crate::scoring::{ScoreResult, Tier};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a total score for display, e.g. "82.2/100"
pub fn format_score(total: f64) -> String {
    format!("{:.1}/100", total)
}

/// Format a tier, colored when requested: green for success, yellow
/// for struggle, red for failure.
pub fn format_tier(tier: Tier, use_colors: bool) -> String {
    if use_colors {
        match tier {
            Tier::Success => tier.to_string().green().bold().to_string(),
            Tier::Struggle => tier.to_string().yellow().to_string(),
            Tier::Fail => tier.to_string().red().bold().to_string(),
        }
    } else {
        tier.to_string()
    }
}

/// Format a scored design as a multi-line report.
pub fn format_report(
    design: &DesignRecord,
    params: &KiteParameters,
    result: &ScoreResult,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let title = design.design_id.as_deref().unwrap_or("(unnamed design)");
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title.to_string());
    }
    if let Some(created_at) = design.created_at {
        lines.push(format!(
            "  Submitted: {}",
            created_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }

    lines.push(format!(
        "  Area: {} m²  Weight: {} kg  Ratio: {} kg/m²",
        params.area, params.total_weight, params.weight_to_area_ratio
    ));
    lines.push(format!(
        "  Cost: {}  Strength: {}/100  Materials: {} distinct",
        params.estimated_cost, params.strength_score, params.material_diversity
    ));
    lines.push(format!("  {}", rule()));
    lines.push(format!(
        "  Performance: {:<6}  Feasibility: {}",
        result.performance_score, result.feasibility_score
    ));
    lines.push(format!(
        "  Cost:        {:<6}  Innovation:  {}",
        result.cost_score, result.innovation_score
    ));
    lines.push(format!(
        "  Total: {}  {}",
        format_score(result.total_score),
        format_tier(result.tier, use_colors)
    ));

    lines.join("\n")
}

/// Format the configured material tables, one section per category.
pub fn format_materials_table(materials: &MaterialsConfig, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for category in MaterialCategory::ALL {
        let header = category.to_string();
        if use_colors {
            lines.push(header.cyan().bold().to_string());
        } else {
            lines.push(header);
        }
        for (name, prop) in materials.table(category) {
            lines.push(format!(
                "  {:<12} density {:<7} strength {:<5} cost {}",
                name, prop.density, prop.strength, prop.cost
            ));
        }
    }
    lines.join("\n")
}

/// JSON payload for the animation/storage collaborators. They read
/// `result.total_score` and `result.tier` to pick the outcome
/// animation.
pub fn format_json(design: &DesignRecord, params: &KiteParameters, result: &ScoreResult) -> String {
    let payload = serde_json::json!({
        "design_id": design.design_id,
        "parameters": params,
        "result": result,
    });
    serde_json::to_string_pretty(&payload).expect("score payload serializes")
}

/// Separator sized to the terminal, capped so reports stay compact
/// when piped wide.
fn rule() -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| (w as usize).saturating_sub(2))
        .unwrap_or(44)
        .min(44);
    "─".repeat(width.max(8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{Drawing, MaterialSelection};
    use crate::scoring::Tier;

    fn sample_report_inputs() -> (DesignRecord, KiteParameters, ScoreResult) {
        let design = DesignRecord {
            design_id: Some("d-42".to_string()),
            created_at: None,
            drawing: Drawing::Bounds {
                width: 1.0,
                height: 1.0,
            },
            materials: MaterialSelection::default(),
        };
        let params = KiteParameters {
            area: 1.0,
            total_weight: 0.21,
            weight_to_area_ratio: 0.21,
            estimated_cost: 14.0,
            strength_score: 74.0,
            material_diversity: 2,
        };
        let result = ScoreResult {
            performance_score: 84.4,
            feasibility_score: 100.0,
            cost_score: 72.0,
            innovation_score: 40.0,
            total_score: 82.2,
            tier: Tier::Success,
        };
        (design, params, result)
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(82.2), "82.2/100");
        assert_eq!(format_score(0.0), "0.0/100");
    }

    #[test]
    fn test_format_tier_plain() {
        assert_eq!(format_tier(Tier::Success, false), "SUCCESS");
        assert_eq!(format_tier(Tier::Struggle, false), "STRUGGLE");
        assert_eq!(format_tier(Tier::Fail, false), "FAIL");
    }

    #[test]
    fn test_report_contains_scores_and_tier() {
        let (design, params, result) = sample_report_inputs();
        let report = format_report(&design, &params, &result, false);
        assert!(report.contains("d-42"));
        assert!(report.contains("82.2/100"));
        assert!(report.contains("SUCCESS"));
        assert!(report.contains("0.21 kg"));
    }

    #[test]
    fn test_json_payload_shape() {
        let (design, params, result) = sample_report_inputs();
        let payload = format_json(&design, &params, &result);
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["design_id"], "d-42");
        assert_eq!(value["result"]["total_score"], 82.2);
        assert_eq!(value["result"]["tier"], "success");
        assert_eq!(value["parameters"]["material_diversity"], 2);
    }

    #[test]
    fn test_materials_table_lists_all_categories() {
        let table = format_materials_table(&MaterialsConfig::default(), false);
        assert!(table.contains("frame"));
        assert!(table.contains("sail"));
        assert!(table.contains("line"));
        assert!(table.contains("竹子"));
    }
}
