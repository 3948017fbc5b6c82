//! Generate command implementation

use anyhow::{bail, Context, Result};
use bqfe_core::SchemaDocument;
use bqfe_ddl::{create_script, unsupported_types, DdlProvider};

use super::common::{load_dialect, write_script};
use crate::cli::{GenerateArgs, GlobalArgs};

/// Execute the generate command
pub(crate) fn execute(args: &GenerateArgs, global: &GlobalArgs) -> Result<()> {
    let dialect = load_dialect(global)?;
    let provider = DdlProvider::new(&dialect);

    let document = SchemaDocument::load(&args.input)
        .with_context(|| format!("Failed to load schema document: {}", args.input.display()))?;

    if global.verbose {
        eprintln!(
            "[verbose] Rendering {} database(s), {} object(s)",
            document.databases.len(),
            document.object_count()
        );
    }

    let problems = find_unsupported(&document, &provider);
    for problem in &problems {
        eprintln!("warning: {problem}");
    }
    if args.strict && !problems.is_empty() {
        bail!(
            "{} column(s) use types unsupported by dialect '{}'",
            problems.len(),
            dialect.name()
        );
    }

    let script = create_script(&provider, &document).context("Failed to render create script")?;
    let statements = script.len();
    write_script(&script.build(), args.output.as_deref(), statements)
}

/// One message per table column whose type (or nested type) is unknown.
fn find_unsupported(document: &SchemaDocument, provider: &DdlProvider<'_>) -> Vec<String> {
    let mut problems = Vec::new();
    for def in &document.databases {
        for table in &def.tables {
            for column in &table.columns {
                let unknown = unsupported_types(column, provider.dialect());
                if !unknown.is_empty() {
                    problems.push(format!(
                        "{}.{}.{}: unsupported type {}",
                        def.database.name,
                        table.name,
                        column.name,
                        unknown.join(", ")
                    ));
                }
            }
        }
    }
    problems
}
