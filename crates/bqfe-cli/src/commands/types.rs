//! Types command implementation

use anyhow::{Context, Result};
use bqfe_core::TypeShape;

use super::common::load_dialect;
use crate::cli::{GlobalArgs, TypesArgs, TypesOutput};

/// Execute the types command
pub(crate) fn execute(args: &TypesArgs, global: &GlobalArgs) -> Result<()> {
    let dialect = load_dialect(global)?;

    match args.format {
        TypesOutput::Json => {
            let json = serde_json::to_string_pretty(dialect.types())
                .context("Failed to serialize type table")?;
            println!("{json}");
        }
        TypesOutput::Text => {
            println!("{:<12} {:<12} {:<10} ALIASES", "TAG", "KEYWORD", "SHAPE");
            for descriptor in dialect.types() {
                println!(
                    "{:<12} {:<12} {:<10} {}",
                    descriptor.tag,
                    descriptor.keyword,
                    shape_name(descriptor.shape),
                    descriptor.aliases.join(", ")
                );
            }
        }
    }
    Ok(())
}

fn shape_name(shape: TypeShape) -> &'static str {
    match shape {
        TypeShape::Scalar => "scalar",
        TypeShape::Length => "length",
        TypeShape::Precision => "precision",
        TypeShape::Struct => "struct",
        TypeShape::Array => "array",
    }
}
