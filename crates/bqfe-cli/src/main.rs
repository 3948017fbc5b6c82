//! bqfe CLI - BigQuery DDL forward engineering

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{alter, generate, types};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Generate(args) => generate::execute(args, &cli.global),
        cli::Commands::Alter(args) => alter::execute(args, &cli.global),
        cli::Commands::Types(args) => types::execute(args, &cli.global),
    }
}
