//! Delta script generator: ALTER/DROP statements for classified changes
//!
//! The caller decides which change applies; these methods only render it.
//! Alter statements with nothing to set render as the empty string.

use crate::activation::comment_if_deactivated;
use crate::column::{render_column, render_column_type};
use crate::error::DdlResult;
use crate::options::{schema_options, table_options, view_options, OptionsBuilder};
use crate::provider::DdlProvider;
use crate::template::{
    ADD_COLUMN, ALTER_COLUMN_DROP_NOT_NULL, ALTER_COLUMN_OPTIONS, ALTER_COLUMN_TYPE,
    ALTER_SCHEMA, ALTER_TABLE, ALTER_VIEW, DROP_COLUMN,
};
use bqfe_core::model::{ChangeOperation, ColumnDef, Database, DatasetRef, Table, View};
use bqfe_core::naming::quote_ident;
use minijinja::context;

impl DdlProvider<'_> {
    pub fn alter_database(&self, database: &Database) -> DdlResult<String> {
        let options = schema_options(database);
        if options.is_empty() {
            log::debug!("Nothing to alter on schema '{}'", database.name);
            return Ok(String::new());
        }
        self.templates.render(
            ALTER_SCHEMA,
            context! { name => database.full_name(), options => options },
        )
    }

    /// `ALTER TABLE .. SET OPTIONS(..)` with the same option rules as
    /// `CREATE TABLE`.
    pub fn alter_table_options(&self, table: &Table, dataset: &DatasetRef) -> DdlResult<String> {
        let options = table_options(table);
        if options.is_empty() {
            log::debug!("Nothing to alter on table '{}'", table.name);
            return Ok(String::new());
        }
        self.templates.render(
            ALTER_TABLE,
            context! { name => dataset.qualify(&table.name), options => options },
        )
    }

    /// `ADD COLUMN`; a deactivated column comments out the whole statement.
    pub fn add_column(
        &self,
        table_name: &str,
        dataset: &DatasetRef,
        column: &ColumnDef,
    ) -> DdlResult<String> {
        let statement = self.templates.render(
            ADD_COLUMN,
            context! {
                table => dataset.qualify(table_name),
                column => render_column(column, self.dialect()),
            },
        )?;
        Ok(comment_if_deactivated(&statement, column.is_activated, false))
    }

    pub fn drop_column(
        &self,
        table_name: &str,
        dataset: &DatasetRef,
        column_name: &str,
    ) -> DdlResult<String> {
        self.templates.render(
            DROP_COLUMN,
            context! {
                table => dataset.qualify(table_name),
                column => quote_ident(column_name),
            },
        )
    }

    /// `SET DATA TYPE` from the column's type, mode and nested schema only.
    pub fn alter_column_type(
        &self,
        table_name: &str,
        dataset: &DatasetRef,
        column: &ColumnDef,
    ) -> DdlResult<String> {
        self.templates.render(
            ALTER_COLUMN_TYPE,
            context! {
                table => dataset.qualify(table_name),
                column => quote_ident(&column.name),
                data_type => render_column_type(&column.type_only(), self.dialect()),
            },
        )
    }

    pub fn alter_column_drop_not_null(
        &self,
        table_name: &str,
        dataset: &DatasetRef,
        column_name: &str,
    ) -> DdlResult<String> {
        self.templates.render(
            ALTER_COLUMN_DROP_NOT_NULL,
            context! {
                table => dataset.qualify(table_name),
                column => quote_ident(column_name),
            },
        )
    }

    /// `SET OPTIONS(description=..)`; an empty or blank description clears
    /// it with `NULL`.
    pub fn alter_column_options(
        &self,
        table_name: &str,
        dataset: &DatasetRef,
        column_name: &str,
        description: &str,
    ) -> DdlResult<String> {
        let options = if description.trim().is_empty() {
            "OPTIONS(description=NULL)".to_string()
        } else {
            OptionsBuilder::new()
                .string("description", Some(description))
                .build()
        };
        self.templates.render(
            ALTER_COLUMN_OPTIONS,
            context! {
                table => dataset.qualify(table_name),
                column => quote_ident(column_name),
                options => options,
            },
        )
    }

    pub fn alter_view(&self, view: &View, dataset: &DatasetRef) -> DdlResult<String> {
        let options = view_options(view);
        if options.is_empty() {
            log::debug!("Nothing to alter on view '{}'", view.name);
            return Ok(String::new());
        }
        self.templates.render(
            ALTER_VIEW,
            context! {
                name => dataset.qualify(&view.name),
                materialized => view.materialized,
                options => options,
            },
        )
    }

    /// Render one classified change.
    pub fn render_change(&self, change: &ChangeOperation) -> DdlResult<String> {
        match change {
            ChangeOperation::CreateDatabase { database } => self.create_database(database),
            ChangeOperation::AlterDatabase { database } => self.alter_database(database),
            ChangeOperation::DropDatabase { project_id, name } => {
                self.drop_database(project_id.as_deref(), name)
            }
            ChangeOperation::CreateTable { dataset, table } => self.create_table(table, dataset),
            ChangeOperation::AlterTableOptions { dataset, table } => {
                self.alter_table_options(table, dataset)
            }
            ChangeOperation::DropTable { dataset, table } => self.drop_table(table, dataset),
            ChangeOperation::AddColumn {
                dataset,
                table,
                column,
            } => self.add_column(table, dataset, column),
            ChangeOperation::DropColumn {
                dataset,
                table,
                column,
            } => self.drop_column(table, dataset, column),
            ChangeOperation::AlterColumnType {
                dataset,
                table,
                column,
            } => self.alter_column_type(table, dataset, column),
            ChangeOperation::AlterColumnDropNotNull {
                dataset,
                table,
                column,
            } => self.alter_column_drop_not_null(table, dataset, column),
            ChangeOperation::AlterColumnOptions {
                dataset,
                table,
                column,
                description,
            } => self.alter_column_options(table, dataset, column, description),
            ChangeOperation::CreateView { dataset, view } => self.create_view(view, dataset),
            ChangeOperation::AlterView { dataset, view } => self.alter_view(view, dataset),
            ChangeOperation::DropView {
                dataset,
                view,
                materialized,
            } => self.drop_view(view, dataset, *materialized),
        }
    }
}

#[cfg(test)]
#[path = "delta_test.rs"]
mod tests;
