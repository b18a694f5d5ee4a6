//! CLI argument definitions using clap
//!
//! Commands:
//! - apprentice-ops schemas [--config <path>]
//! - apprentice-ops operators
//! - apprentice-ops describe <NAME>
//! - apprentice-ops invoke <NAME> [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Widget schemas and primitive operators for rule learning
#[derive(Parser, Debug)]
#[command(name = "apprentice-ops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the schema catalogue as JSON
    Schemas {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print every operator's discovery record as JSON
    Operators,

    /// Print one operator's discovery record
    Describe {
        /// Operator name, e.g. GetCoefficient
        name: String,
    },

    /// Apply an operator to a JSON array of arguments read from stdin
    Invoke {
        /// Operator name, e.g. StrToFloat
        name: String,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
