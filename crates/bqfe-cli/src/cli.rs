//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// bqfe - render BigQuery DDL from schema documents
#[derive(Parser, Debug)]
#[command(name = "bqfe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use a custom dialect table (YAML) instead of the built-in BigQuery one
    #[arg(short, long, global = true)]
    pub dialect: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a create script from a schema document
    Generate(GenerateArgs),

    /// Render a delta script from a list of classified changes
    Alter(AlterArgs),

    /// List the types known to the dialect
    Types(TypesArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Schema document (YAML or JSON)
    pub input: PathBuf,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail when a column uses a type the dialect does not know
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the alter command
#[derive(Args, Debug)]
pub struct AlterArgs {
    /// Change set (YAML or JSON)
    pub input: PathBuf,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the types command
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: TypesOutput,
}

/// Types output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypesOutput {
    /// Aligned table
    Text,
    /// JSON array
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
