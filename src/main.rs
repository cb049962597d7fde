use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use kitescore::calculator::calculate_parameters;
use kitescore::design::DesignRecord;
use kitescore::scoring::calculate_score;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a design record and print the report
    Score {
        /// Path to the design JSON file exported by the designer
        file: PathBuf,

        /// Emit the machine-readable JSON payload instead of the report
        #[arg(long)]
        json: bool,
    },
    /// List the configured material tables
    Materials,
}

#[derive(Parser, Debug)]
#[command(name = "kitescore")]
#[command(about = "Kite design scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/kitescore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load and validate config up front; every command reads it
    let config_path = cli.config.map(PathBuf::from);
    let config = match kitescore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded config: {} frame / {} sail / {} line materials",
            config.materials.frame.len(),
            config.materials.sail.len(),
            config.materials.line.len()
        );
    }

    let use_colors = kitescore::output::should_use_colors();

    match cli.command {
        Commands::Score { file, json } => {
            let design = match read_design(&file) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let params = match calculate_parameters(&design, &config.calculator, &config.materials)
            {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Design error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if cli.verbose {
                eprintln!(
                    "Parameters: area {} m², weight {} kg, cost {}",
                    params.area, params.total_weight, params.estimated_cost
                );
            }

            let result = match calculate_score(&params, &config.scoring) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Scoring error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if json {
                println!("{}", kitescore::output::format_json(&design, &params, &result));
            } else {
                println!(
                    "{}",
                    kitescore::output::format_report(&design, &params, &result, use_colors)
                );
            }

            if cli.verbose {
                eprintln!();
                eprintln!("Scored in {:?}", start_time.elapsed());
            }
        }
        Commands::Materials => {
            println!(
                "{}",
                kitescore::output::format_materials_table(&config.materials, use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn read_design(path: &Path) -> Result<DesignRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read design file at {}", path.display()))?;
    let design: DesignRecord = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse design: invalid JSON in {}", path.display()))?;
    Ok(design)
}
