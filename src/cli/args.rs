//! Command line argument parsing for the keydist CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// keydist - keyboard-aware edit distance with diff rendering
#[derive(Parser, Debug, Clone)]
#[command(name = "keydist")]
#[command(about = "Keyboard-proximity weighted edit distance with diff rendering")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KeydistArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "KEYDIST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Keyboard layout name (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub layout: Option<String>,

    /// Fail on an unknown layout instead of treating every key as unlocated
    #[arg(long, global = true)]
    pub strict_layout: bool,

    /// Don't render comparison strings
    #[arg(long, global = true)]
    pub no_compare: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KeydistArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare two strings
    Compare(CompareArgs),

    /// Show the substitution cost between two keys
    #[command(name = "key-cost")]
    KeyCost(KeyCostArgs),

    /// List available layouts
    Layouts,

    /// Compare tab-separated pairs from a file
    Batch(BatchArgs),
}

/// Arguments for comparing two strings
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Original string
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// String to compare against
    #[arg(value_name = "TARGET")]
    pub target: String,
}

/// Arguments for the key cost lookup
#[derive(Parser, Debug, Clone)]
pub struct KeyCostArgs {
    /// Intended key
    #[arg(value_name = "INTENDED")]
    pub intended: char,

    /// Key actually typed
    #[arg(value_name = "ACTUAL")]
    pub actual: char,
}

/// Arguments for batch comparison
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one `source<TAB>target` pair per line
    #[arg(value_name = "PAIRS_FILE")]
    pub input: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
