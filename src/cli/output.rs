//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{KeydistArgs, OutputFormat};
use crate::engine::DistanceResult;
use crate::error::Result;
use crate::keyboard::proximity::KeyPosition;

/// Result structure for a single comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonOutput {
    pub source: String,
    pub target: String,
    pub layout: String,
    #[serde(flatten)]
    pub result: DistanceResult,
}

/// Result structure for a key cost lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeyCostOutput {
    pub layout: String,
    pub intended: char,
    pub actual: char,
    pub intended_position: Option<KeyPosition>,
    pub actual_position: Option<KeyPosition>,
    pub cost: usize,
}

/// Result structure for the layout listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct LayoutList {
    pub active: String,
    pub layouts: Vec<String>,
}

/// Result structure for batch comparison.
#[derive(Debug, Serialize)]
pub struct BatchOutput {
    pub layout: String,
    pub comparisons: Vec<ComparisonOutput>,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &KeydistArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &KeydistArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self, args: &KeydistArgs);
}

impl HumanOutput for ComparisonOutput {
    fn print_human(&self, args: &KeydistArgs) {
        println!("{}", distance_line(&self.result));
        if let Some(comparison) = &self.result.comparison {
            println!("Comparison: {comparison}");
        }

        if args.verbosity() > 1 && !self.result.changes.is_empty() {
            println!();
            println!("Changes ({}):", self.layout);
            println!("────────");
            for (position, record) in self.result.changes.iter() {
                println!("  {position:>4}  {:<11}  {:?}", record.kind.name(), record.text());
            }
        }
    }
}

impl HumanOutput for KeyCostOutput {
    fn print_human(&self, _args: &KeydistArgs) {
        println!(
            "{} {} -> {} {}: cost {}",
            self.intended,
            format_position(self.intended_position),
            self.actual,
            format_position(self.actual_position),
            self.cost
        );
    }
}

impl HumanOutput for LayoutList {
    fn print_human(&self, _args: &KeydistArgs) {
        for name in &self.layouts {
            let marker = if *name == self.active { "*" } else { " " };
            println!("{marker} {name}");
        }
    }
}

impl HumanOutput for BatchOutput {
    fn print_human(&self, args: &KeydistArgs) {
        for comparison in &self.comparisons {
            match &comparison.result.comparison {
                Some(rendered) => println!(
                    "{}\t{}\t{}\t{}",
                    comparison.source, comparison.target, comparison.result.distance, rendered
                ),
                None => println!(
                    "{}\t{}\t{}",
                    comparison.source, comparison.target, comparison.result.distance
                ),
            }
        }

        if args.verbosity() > 1 {
            println!();
            println!(
                "{} pair(s) in {}ms",
                self.comparisons.len(),
                self.duration_ms
            );
        }
    }
}

fn distance_line(result: &DistanceResult) -> String {
    if result.is_identical() {
        "Distance: 0 (identical)".to_string()
    } else {
        format!("Distance: {}", result.distance)
    }
}

fn format_position(position: Option<KeyPosition>) -> String {
    match position {
        Some(p) => format!("({}, {})", p.row, p.col),
        None => "(unlocated)".to_string(),
    }
}
