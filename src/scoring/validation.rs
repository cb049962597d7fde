use super::config::ScoringConfig;

const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let weights = [
        ("performance", config.weights.performance),
        ("feasibility", config.weights.feasibility),
        ("cost", config.weights.cost),
        ("innovation", config.weights.innovation),
    ];
    for (name, weight) in weights {
        if !weight.is_finite() || weight < 0.0 {
            errors.push(format!(
                "scoring.weights.{}: must be a non-negative number, got {}",
                name, weight
            ));
        }
    }
    let sum = config.weights.sum();
    if sum.is_finite() && (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        errors.push(format!("scoring.weights: must sum to 1.0, got {}", sum));
    }

    let thresholds = &config.thresholds;
    if !(0.0..=100.0).contains(&thresholds.success) || !(0.0..=100.0).contains(&thresholds.struggle)
    {
        errors.push("scoring.thresholds: cutoffs must lie in [0, 100]".to_string());
    } else if thresholds.struggle >= thresholds.success {
        errors.push(format!(
            "scoring.thresholds: struggle ({}) must be below success ({})",
            thresholds.struggle, thresholds.success
        ));
    }

    let perf = &config.performance;
    if (perf.strength_share + perf.ratio_share - 1.0).abs() > WEIGHT_SUM_EPSILON
        || perf.strength_share < 0.0
        || perf.ratio_share < 0.0
    {
        errors.push("scoring.performance: strength_share and ratio_share must be non-negative and sum to 1.0".to_string());
    }
    if !(perf.ideal_ratio > 0.0 && perf.ideal_ratio.is_finite()) {
        errors.push(format!(
            "scoring.performance.ideal_ratio: must be positive, got {}",
            perf.ideal_ratio
        ));
    }
    if !(perf.ratio_falloff > 0.0 && perf.ratio_falloff.is_finite()) {
        errors.push(format!(
            "scoring.performance.ratio_falloff: must be positive, got {}",
            perf.ratio_falloff
        ));
    }

    let feas = &config.feasibility;
    if !(feas.ratio_min >= 0.0 && feas.ratio_min < feas.ratio_max && feas.ratio_max.is_finite()) {
        errors.push(format!(
            "scoring.feasibility: ratio band [{}, {}] must satisfy 0 <= min < max",
            feas.ratio_min, feas.ratio_max
        ));
    }
    if !(feas.falloff > 0.0 && feas.falloff.is_finite()) {
        errors.push(format!(
            "scoring.feasibility.falloff: must be positive, got {}",
            feas.falloff
        ));
    }

    if !(config.cost.reference_cost > 0.0 && config.cost.reference_cost.is_finite()) {
        errors.push(format!(
            "scoring.cost.reference_cost: must be positive, got {}",
            config.cost.reference_cost
        ));
    }

    if config.innovation.max_diversity == 0 {
        errors.push("scoring.innovation.max_diversity: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{FeasibilityConfig, TierThresholds, Weights};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = ScoringConfig::default();
        config.weights = Weights {
            performance: 0.4,
            feasibility: 0.3,
            cost: 0.2,
            innovation: 0.05,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("sum to 1.0"));
    }

    #[test]
    fn test_weight_sum_tolerates_float_noise() {
        let mut config = ScoringConfig::default();
        config.weights.performance = 0.4 + 1e-9;
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let mut config = ScoringConfig::default();
        config.weights.cost = -0.2;
        config.weights.performance = 0.8;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.weights.cost"));
    }

    #[test]
    fn test_unordered_thresholds() {
        let mut config = ScoringConfig::default();
        config.thresholds = TierThresholds {
            success: 50.0,
            struggle: 80.0,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.thresholds"));
    }

    #[test]
    fn test_inverted_feasibility_band() {
        let mut config = ScoringConfig::default();
        config.feasibility = FeasibilityConfig {
            ratio_min: 0.8,
            ratio_max: 0.2,
            falloff: 250.0,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("ratio band"));
    }

    #[test]
    fn test_zero_reference_cost() {
        let mut config = ScoringConfig::default();
        config.cost.reference_cost = 0.0;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("reference_cost"));
    }

    #[test]
    fn test_zero_max_diversity() {
        let mut config = ScoringConfig::default();
        config.innovation.max_diversity = 0;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("max_diversity"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ScoringConfig::default();
        config.weights.innovation = 0.05; // sum off
        config.cost.reference_cost = -5.0;
        config.innovation.max_diversity = 0;
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
