//! Command implementations for the keydist CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DistanceConfig;
use crate::engine::KeyboardDistance;
use crate::error::{KeydistError, Result};

/// Execute a CLI command.
pub fn execute_command(args: KeydistArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Compare(compare_args) => compare(compare_args, &config, &args),
        Command::KeyCost(key_args) => key_cost(key_args, &config, &args),
        Command::Layouts => list_layouts(&config, &args),
        Command::Batch(batch_args) => batch(batch_args, &config, &args),
    }
}

/// Resolve the configuration: file (or defaults), then command-line overrides.
pub fn load_config(args: &KeydistArgs) -> Result<DistanceConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            DistanceConfig::from_json_file(path)?
        }
        None => DistanceConfig::default(),
    };

    if let Some(layout) = &args.layout {
        config.layout = layout.clone();
    }
    if args.no_compare {
        config.comparer.enabled = false;
    }
    if args.strict_layout {
        config.validate()?;
    }

    debug!("Effective configuration: {config:?}");
    Ok(config)
}

/// Compare two strings.
fn compare(args: &CompareArgs, config: &DistanceConfig, cli_args: &KeydistArgs) -> Result<()> {
    let engine = KeyboardDistance::with_config(config);
    let result = engine.compute(&args.source, &args.target);

    let output = ComparisonOutput {
        source: args.source.clone(),
        target: args.target.clone(),
        layout: config.layout.clone(),
        result,
    };
    output_result("Comparison:", &output, cli_args)
}

/// Show the cost between two keys.
fn key_cost(args: &KeyCostArgs, config: &DistanceConfig, cli_args: &KeydistArgs) -> Result<()> {
    let engine = KeyboardDistance::with_config(config);

    let output = KeyCostOutput {
        layout: config.layout.clone(),
        intended: args.intended,
        actual: args.actual,
        intended_position: engine.key_position(args.intended),
        actual_position: engine.key_position(args.actual),
        cost: engine.key_cost(args.intended, args.actual),
    };
    output_result("Key cost:", &output, cli_args)
}

/// List the layouts visible to the configuration.
fn list_layouts(config: &DistanceConfig, cli_args: &KeydistArgs) -> Result<()> {
    let output = LayoutList {
        active: config.layout.clone(),
        layouts: config.layout_names(),
    };
    output_result("Layouts:", &output, cli_args)
}

/// Compare every pair in a file.
fn batch(args: &BatchArgs, config: &DistanceConfig, cli_args: &KeydistArgs) -> Result<()> {
    info!("Reading pairs from: {}", args.input.display());
    let pairs = read_pairs(&args.input)?;

    let engine = KeyboardDistance::with_config(config);
    let start = Instant::now();
    let results = engine.compute_batch(&pairs);
    let duration_ms = start.elapsed().as_millis() as u64;

    let comparisons = pairs
        .into_iter()
        .zip(results)
        .map(|((source, target), result)| ComparisonOutput {
            source,
            target,
            layout: config.layout.clone(),
            result,
        })
        .collect();

    let output = BatchOutput {
        layout: config.layout.clone(),
        comparisons,
        duration_ms,
    };
    output_result("Batch comparison:", &output, cli_args)
}

/// Read `source<TAB>target` pairs, skipping blank lines.
pub fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)?;
    parse_pairs(&content)
}

fn parse_pairs(content: &str) -> Result<Vec<(String, String)>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            line.split_once('\t')
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .ok_or_else(|| {
                    KeydistError::invalid_argument(format!(
                        "line {} has no tab separator",
                        number + 1
                    ))
                })
        })
        .collect()
}
