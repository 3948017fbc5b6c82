//! Alter command implementation

use anyhow::{Context, Result};
use bqfe_core::ChangeSet;
use bqfe_ddl::{alter_script, DdlProvider};

use super::common::{load_dialect, write_script};
use crate::cli::{AlterArgs, GlobalArgs};

/// Execute the alter command
pub(crate) fn execute(args: &AlterArgs, global: &GlobalArgs) -> Result<()> {
    let dialect = load_dialect(global)?;
    let provider = DdlProvider::new(&dialect);

    let changes = ChangeSet::load(&args.input)
        .with_context(|| format!("Failed to load change set: {}", args.input.display()))?;

    if global.verbose {
        eprintln!("[verbose] Rendering {} change(s)", changes.changes.len());
    }

    let script = alter_script(&provider, &changes).context("Failed to render alter script")?;
    let statements = script.len();
    write_script(&script.build(), args.output.as_deref(), statements)
}
