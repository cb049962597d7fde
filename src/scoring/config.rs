use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Defines how design scores are assembled from the four sub-scores.
/// Every block has built-in defaults, so a config file only needs the
/// values it wants to override.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights: { performance: 0.4, feasibility: 0.3, cost: 0.2, innovation: 0.1 }
///   thresholds: { success: 80, struggle: 50 }
///   feasibility: { ratio_min: 0.05, ratio_max: 0.6, falloff: 250 }
///   cost: { reference_cost: 50 }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub thresholds: TierThresholds,
    pub performance: PerformanceConfig,
    pub feasibility: FeasibilityConfig,
    pub cost: CostConfig,
    pub innovation: InnovationConfig,
}

/// Sub-score weights. Must sum to 1.0; checked at load time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Weights {
    pub performance: f64,
    pub feasibility: f64,
    pub cost: f64,
    pub innovation: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.performance + self.feasibility + self.cost + self.innovation
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            performance: 0.40,
            feasibility: 0.30,
            cost: 0.20,
            innovation: 0.10,
        }
    }
}

/// Total-score cutoffs for the outcome tiers. A total at or above
/// `success` succeeds, at or above `struggle` limps across, anything
/// lower fails.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct TierThresholds {
    pub success: f64,
    pub struggle: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            success: 80.0,
            struggle: 50.0,
        }
    }
}

/// Performance sub-score tuning.
///
/// `strength_share` and `ratio_share` split the sub-score between the
/// structural index and the weight-to-area term; they must sum to 1.0.
/// The ratio term is full marks at or below `ideal_ratio` and loses
/// `ratio_falloff` points per kg/m² above it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct PerformanceConfig {
    pub strength_share: f64,
    pub ratio_share: f64,
    pub ideal_ratio: f64,
    pub ratio_falloff: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            strength_share: 0.6,
            ratio_share: 0.4,
            ideal_ratio: 0.25,
            ratio_falloff: 200.0,
        }
    }
}

/// Feasibility sub-score tuning: full marks inside the ratio band,
/// `falloff` points lost per kg/m² of distance outside it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct FeasibilityConfig {
    pub ratio_min: f64,
    pub ratio_max: f64,
    pub falloff: f64,
}

impl Default for FeasibilityConfig {
    fn default() -> Self {
        Self {
            ratio_min: 0.05,
            ratio_max: 0.60,
            falloff: 250.0,
        }
    }
}

/// Cost sub-score tuning: scores scale down linearly from 100 at zero
/// cost to 0 at `reference_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct CostConfig {
    pub reference_cost: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            reference_cost: 50.0,
        }
    }
}

/// Innovation sub-score tuning: the diversity count saturates at
/// `max_diversity` distinct materials.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct InnovationConfig {
    pub max_diversity: u32,
}

impl Default for InnovationConfig {
    fn default() -> Self {
        Self { max_diversity: 5 }
    }
}
