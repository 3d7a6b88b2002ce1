//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// layercfg - Inspect layered configuration with dot/bracket paths
///
/// Sources are merged in this order, later ones winning: every --config
/// file, every --optional file that exists, then the environment.
#[derive(Parser, Debug)]
#[command(name = "layercfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to merge (repeatable; JSON, YAML or TOML)
    #[arg(short, long = "config", global = true)]
    pub config: Vec<PathBuf>,

    /// Configuration file to merge when it exists (repeatable)
    #[arg(long, global = true)]
    pub optional: Vec<PathBuf>,

    /// Layer every environment variable as a top-level key
    #[arg(long, global = true)]
    pub env: bool,

    /// Layer environment variables with this prefix as paths (APP_DB__PORT -> db.port)
    #[arg(long, env = "LAYERCFG_ENV_PREFIX", global = true)]
    pub env_prefix: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the value at a path
    ///
    /// Examples:
    ///   layercfg -c config.yaml get databases.main.port
    ///   layercfg -c config.yaml get servers[0] --json
    ///   layercfg -c config.yaml get db.host --default localhost
    Get {
        /// Path to read, e.g. servers[0].host
        path: String,

        /// Value to print when the path is absent or null
        #[arg(long)]
        default: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Set a value and print the resulting document (nothing is written to disk)
    Set {
        /// Path to write, e.g. mytest.version[0]
        path: String,

        /// Value to write
        value: String,

        /// How to interpret the value
        #[arg(long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,
    },

    /// Print the merged document as JSON
    Dump,
}

/// Interpretation of a value given on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
    Json,
}
