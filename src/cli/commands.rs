//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Seshat API client
#[derive(Parser, Debug)]
#[command(name = "seshat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the API, overrides the settings file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered variable classes
    Classes {
        /// Only list classes of this category (wf, sc, general, core, crisisdb, rt)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the variable name and endpoint of a class
    Resolve {
        /// Plural class name, e.g. ProfessionalSoldiers
        class: String,
    },

    /// Print the records of a class
    Records {
        /// Plural class name
        class: String,

        /// Maximum number of records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the number of records of a class
    Count {
        /// Plural class name
        class: String,
    },

    /// Count records per year carrying a value
    Frequencies {
        /// Classes to aggregate (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        classes: Vec<String>,

        /// First year (inclusive, negative for BCE)
        #[arg(long, allow_hyphen_values = true)]
        from: i64,

        /// Last year (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        to: i64,

        /// Value to count, e.g. present
        #[arg(long)]
        value: String,

        /// Write the table to a Parquet file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
