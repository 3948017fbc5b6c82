//! Shared helpers for CLI commands

use anyhow::{Context, Result};
use bqfe_core::Dialect;
use std::borrow::Cow;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Built-in BigQuery dialect, or the table given with `--dialect`.
pub(crate) fn load_dialect(global: &GlobalArgs) -> Result<Cow<'static, Dialect>> {
    let Some(path) = &global.dialect else {
        return Ok(Cow::Borrowed(Dialect::bigquery()));
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dialect table: {}", path.display()))?;
    let dialect = Dialect::from_yaml(&content)
        .with_context(|| format!("Invalid dialect table: {}", path.display()))?;
    if global.verbose {
        eprintln!(
            "[verbose] Using dialect '{}' from {}",
            dialect.name(),
            path.display()
        );
    }
    Ok(Cow::Owned(dialect))
}

/// Print the script, or write it to `output` when given.
pub(crate) fn write_script(script: &str, output: Option<&Path>, statements: usize) -> Result<()> {
    match output {
        Some(path) => {
            log::debug!("Writing script to {}", path.display());
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, script)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} statement(s) to {}", statements, path.display());
        }
        None => print!("{script}"),
    }
    Ok(())
}
