use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::config::{ScoringConfig, TierThresholds};
use crate::calculator::KiteParameters;

/// Outcome tier a total score maps to.
///
/// Serialized lowercase because that is what the animation and storage
/// collaborators match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Success,
    Struggle,
    Fail,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Success => "SUCCESS",
            Tier::Struggle => "STRUGGLE",
            Tier::Fail => "FAIL",
        };
        write!(f, "{}", name)
    }
}

/// Scored design: four sub-scores, the weighted total, and its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub performance_score: f64,
    pub feasibility_score: f64,
    pub cost_score: f64,
    pub innovation_score: f64,
    pub total_score: f64,
    pub tier: Tier,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid parameters: {field} is {value}")]
    InvalidParameters { field: &'static str, value: f64 },
}

/// Score a set of kite parameters.
///
/// Pure function of its input and the scoring configuration. Every
/// sub-score lands in [0, 100]; the total is the weighted sum rounded
/// to one decimal. Rejects parameters with negative or non-finite
/// fields rather than scoring garbage.
pub fn calculate_score(
    params: &KiteParameters,
    config: &ScoringConfig,
) -> Result<ScoreResult, ScoreError> {
    check_parameters(params)?;

    let performance = performance_score(params, config);
    let feasibility = feasibility_score(params, config);
    let cost = cost_score(params, config);
    let innovation = innovation_score(params, config);

    let total = performance * config.weights.performance
        + feasibility * config.weights.feasibility
        + cost * config.weights.cost
        + innovation * config.weights.innovation;
    let total = round1(total.clamp(0.0, 100.0));

    Ok(ScoreResult {
        performance_score: performance,
        feasibility_score: feasibility,
        cost_score: cost,
        innovation_score: innovation,
        total_score: total,
        tier: tier_for(total, &config.thresholds),
    })
}

/// Tier for a total score. Closed above, open below: exactly the
/// success threshold still succeeds.
pub fn tier_for(total: f64, thresholds: &TierThresholds) -> Tier {
    if total >= thresholds.success {
        Tier::Success
    } else if total >= thresholds.struggle {
        Tier::Struggle
    } else {
        Tier::Fail
    }
}

fn check_parameters(params: &KiteParameters) -> Result<(), ScoreError> {
    let fields = [
        ("area", params.area),
        ("total_weight", params.total_weight),
        ("weight_to_area_ratio", params.weight_to_area_ratio),
        ("estimated_cost", params.estimated_cost),
        ("strength_score", params.strength_score),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(ScoreError::InvalidParameters { field, value });
        }
    }
    Ok(())
}

/// Strength plus how close the weight-to-area ratio sits to the ideal.
fn performance_score(params: &KiteParameters, config: &ScoringConfig) -> f64 {
    let cfg = &config.performance;
    let over = (params.weight_to_area_ratio - cfg.ideal_ratio).max(0.0);
    let ratio_term = (100.0 - over * cfg.ratio_falloff).clamp(0.0, 100.0);
    let score = cfg.strength_share * params.strength_score + cfg.ratio_share * ratio_term;
    round2(score.clamp(0.0, 100.0))
}

/// Full marks inside the acceptable ratio band, linear decay outside.
fn feasibility_score(params: &KiteParameters, config: &ScoringConfig) -> f64 {
    let cfg = &config.feasibility;
    let ratio = params.weight_to_area_ratio;
    let distance = if ratio < cfg.ratio_min {
        cfg.ratio_min - ratio
    } else if ratio > cfg.ratio_max {
        ratio - cfg.ratio_max
    } else {
        0.0
    };
    round2((100.0 - distance * cfg.falloff).clamp(0.0, 100.0))
}

/// Cheaper designs score higher, hitting zero at the reference cost.
fn cost_score(params: &KiteParameters, config: &ScoringConfig) -> f64 {
    let scaled = 100.0 * (1.0 - params.estimated_cost / config.cost.reference_cost);
    round2(scaled.clamp(0.0, 100.0))
}

/// More distinct materials score higher, saturating at the configured
/// maximum.
fn innovation_score(params: &KiteParameters, config: &ScoringConfig) -> f64 {
    let max = config.innovation.max_diversity.max(1);
    let counted = params.material_diversity.min(max);
    round2(100.0 * counted as f64 / max as f64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
