mod schema;

pub use schema::{CalculatorConfig, Config};

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::materials::{MaterialCategory, MaterialsConfig};
use crate::scoring::validate_scoring;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid configuration: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },
}

/// Get the config directory path (~/.config/kitescore/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("kitescore")
}

/// Get the default config file path (~/.config/kitescore/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load and validate configuration.
///
/// With an explicit `path` the file must exist. Without one, the
/// default path is used if present; otherwise the built-in defaults
/// apply, so the tool works out of the box.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the YAML cannot be
/// parsed, or validation finds problems (all of them are reported, not
/// just the first).
pub fn load_config(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => read_config_file(path)?,
        None => {
            let default_path = get_config_path();
            if default_path.exists() {
                read_config_file(default_path)?
            } else {
                Config::default()
            }
        }
    };

    validate_config(&config).map_err(|errors| ConfigError::Invalid { errors })?;
    Ok(config)
}

fn read_config_file(path: PathBuf) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    serde_saphyr::from_str(&content).map_err(|e| ConfigError::Parse {
        path,
        message: e.to_string(),
    })
}

/// Validate the whole configuration, collecting every problem.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(scoring_errors) = validate_scoring(&config.scoring) {
        errors.extend(scoring_errors);
    }
    validate_calculator(&config.calculator, &mut errors);
    validate_materials(&config.materials, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_calculator(config: &CalculatorConfig, errors: &mut Vec<String>) {
    let positive = [
        ("frame_area_factor", config.frame_area_factor),
        ("strut_factor", config.strut_factor),
        ("sketch_point_area", config.sketch_point_area),
    ];
    for (name, value) in positive {
        if !(value > 0.0 && value.is_finite()) {
            errors.push(format!(
                "calculator.{}: must be positive, got {}",
                name, value
            ));
        }
    }

    let non_negative = [
        ("line_length", config.line_length),
        ("line_cost_rate", config.line_cost_rate),
    ];
    for (name, value) in non_negative {
        if !(value >= 0.0 && value.is_finite()) {
            errors.push(format!(
                "calculator.{}: must be non-negative, got {}",
                name, value
            ));
        }
    }

    if !(0.0..=1.0).contains(&config.frame_strength_share) {
        errors.push(format!(
            "calculator.frame_strength_share: must lie in [0, 1], got {}",
            config.frame_strength_share
        ));
    }
}

fn validate_materials(materials: &MaterialsConfig, errors: &mut Vec<String>) {
    for category in MaterialCategory::ALL {
        let table = materials.table(category);
        if table.is_empty() {
            errors.push(format!(
                "materials.{}: table must list at least one material",
                category
            ));
        }
        for (name, prop) in table {
            let attrs = [
                ("density", prop.density),
                ("strength", prop.strength),
                ("cost", prop.cost),
            ];
            for (attr, value) in attrs {
                if !(value >= 0.0 && value.is_finite()) {
                    errors.push(format!(
                        "materials.{}.{}.{}: must be non-negative, got {}",
                        category, name, attr, value
                    ));
                }
            }
        }
    }
}
