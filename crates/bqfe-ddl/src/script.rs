//! Whole-script assembly from a schema document or a change set

use crate::activation::{comment_if_deactivated, is_fully_commented};
use crate::error::DdlResult;
use crate::provider::DdlProvider;
use bqfe_core::model::{ChangeSet, SchemaDocument};

/// Terminate a statement with `;`.
///
/// A statement that is entirely commented out gets no terminator; one ending
/// in a line comment gets the `;` on its own line.
pub fn terminate_statement(statement: &str) -> String {
    if is_fully_commented(statement) {
        return statement.to_string();
    }
    let last_line = statement.lines().last().unwrap_or_default();
    if last_line.trim_start().starts_with("--") {
        format!("{statement}\n;")
    } else {
        format!("{statement};")
    }
}

/// Collects statements into one script
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    statements: Vec<String>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement; empty statements are skipped.
    pub fn push(&mut self, statement: String, is_activated: bool) {
        if statement.trim().is_empty() {
            return;
        }
        let statement = comment_if_deactivated(&statement, is_activated, false);
        self.statements.push(terminate_statement(&statement));
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements separated by blank lines, with a trailing newline.
    pub fn build(self) -> String {
        if self.statements.is_empty() {
            return String::new();
        }
        let mut script = self.statements.join("\n\n");
        script.push('\n');
        script
    }
}

/// Full create script: each database, then its tables, then its views.
///
/// Objects of a deactivated database are commented out with it. Call
/// [`ScriptBuilder::build`] for the text.
pub fn create_script(
    provider: &DdlProvider<'_>,
    document: &SchemaDocument,
) -> DdlResult<ScriptBuilder> {
    let mut script = ScriptBuilder::new();
    for def in &document.databases {
        let database = &def.database;
        let dataset = database.dataset_ref();
        script.push(provider.create_database(database)?, database.is_activated);

        for table in &def.tables {
            script.push(
                provider.create_table(table, &dataset)?,
                database.is_activated && table.is_activated,
            );
        }
        for view in &def.views {
            script.push(
                provider.create_view(view, &dataset)?,
                database.is_activated && view.is_activated,
            );
        }
    }
    log::debug!("Rendered create script with {} statements", script.len());
    Ok(script)
}

/// Delta script: one statement per change, in order. No-op changes are
/// skipped.
pub fn alter_script(provider: &DdlProvider<'_>, changes: &ChangeSet) -> DdlResult<ScriptBuilder> {
    let mut script = ScriptBuilder::new();
    for change in &changes.changes {
        script.push(provider.render_change(change)?, true);
    }
    log::debug!(
        "Rendered alter script with {} of {} changes",
        script.len(),
        changes.changes.len()
    );
    Ok(script)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
