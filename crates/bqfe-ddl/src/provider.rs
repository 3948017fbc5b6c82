//! Statement assembler: CREATE/DROP statements for databases, tables, views
//!
//! `DdlProvider` borrows the dialect tables and is otherwise stateless; every
//! method is a pure function of its arguments.

use crate::activation::{order_columns, CommentStyle, Fragment};
use crate::column::{render_column, unsupported_types};
use crate::error::DdlResult;
use crate::options::{schema_options, table_options, view_options};
use crate::partitioning::{partition_fragment, render_clustering};
use crate::template::{
    TemplateRenderer, CREATE_SCHEMA, CREATE_TABLE, CREATE_VIEW, DROP_SCHEMA, DROP_TABLE,
    DROP_VIEW,
};
use bqfe_core::dialect::{Dialect, TypeDescriptor};
use bqfe_core::model::{ColumnDef, Database, DatasetRef, Table, View, ViewKey};
use bqfe_core::naming::{full_name, quote_ident};
use minijinja::context;

/// Renders DDL statements for one dialect
pub struct DdlProvider<'a> {
    dialect: &'a Dialect,
    pub(crate) templates: TemplateRenderer,
}

impl<'a> DdlProvider<'a> {
    pub fn new(dialect: &'a Dialect) -> Self {
        Self {
            dialect,
            templates: TemplateRenderer::new(),
        }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    /// Logical type tag used for a generic (JSON schema) type.
    pub fn default_type(&self, generic: &str) -> Option<&'a str> {
        self.dialect.default_type(generic)
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.dialect.has_type(tag)
    }

    pub fn type_descriptors(&self) -> &'a [TypeDescriptor] {
        self.dialect.types()
    }

    pub fn create_database(&self, database: &Database) -> DdlResult<String> {
        self.templates.render(
            CREATE_SCHEMA,
            context! {
                name => database.full_name(),
                if_not_exists => database.if_not_exists,
                options => schema_options(database),
            },
        )
    }

    pub fn drop_database(&self, project_id: Option<&str>, name: &str) -> DdlResult<String> {
        self.templates.render(
            DROP_SCHEMA,
            context! { name => full_name(None, project_id, name) },
        )
    }

    /// Column line tagged with the column's activation flag.
    pub fn convert_column_definition(&self, column: &ColumnDef) -> Fragment {
        let unsupported = unsupported_types(column, self.dialect);
        if !unsupported.is_empty() {
            log::warn!(
                "Column '{}' uses unsupported type(s): {}",
                column.name,
                unsupported.join(", ")
            );
        }
        Fragment::new(render_column(column, self.dialect), column.is_activated)
    }

    /// `CREATE TABLE`.
    ///
    /// External tables never get partitioning, clustering or
    /// `require_partition_filter`. Deactivated columns are commented out and
    /// moved after the live ones.
    pub fn create_table(&self, table: &Table, dataset: &DatasetRef) -> DdlResult<String> {
        let columns: Vec<Fragment> = table
            .columns
            .iter()
            .map(|column| self.convert_column_definition(column))
            .collect();

        let (partitioning, clustering) = if table.is_external() {
            (String::new(), String::new())
        } else {
            (
                partition_fragment(&table.partitioning).render(CommentStyle::WholeLine),
                render_clustering(&table.clustering, table.is_activated)
                    .render(CommentStyle::WholeLine),
            )
        };

        self.templates.render(
            CREATE_TABLE,
            context! {
                name => dataset.qualify(&table.name),
                or_replace => table.or_replace,
                temporary => table.temporary,
                external => table.is_external(),
                if_not_exists => table.if_not_exists,
                columns => order_columns(&columns),
                partitioning => partitioning,
                clustering => clustering,
                options => table_options(table),
            },
        )
    }

    pub fn drop_table(&self, table_name: &str, dataset: &DatasetRef) -> DdlResult<String> {
        self.templates
            .render(DROP_TABLE, context! { name => dataset.qualify(table_name) })
    }

    /// `CREATE [MATERIALIZED] VIEW`.
    ///
    /// `OR REPLACE` and the column list apply to plain views only;
    /// partitioning and clustering apply to materialized views only.
    pub fn create_view(&self, view: &View, dataset: &DatasetRef) -> DdlResult<String> {
        let columns = if view.materialized {
            String::new()
        } else {
            view.keys
                .iter()
                .map(|key| quote_ident(key.output_name()))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let (partitioning, clustering) = if view.materialized {
            (
                partition_fragment(&view.partitioning).render(CommentStyle::WholeLine),
                render_clustering(&view.clustering, view.is_activated)
                    .render(CommentStyle::WholeLine),
            )
        } else {
            (String::new(), String::new())
        };

        let select = match view.explicit_select() {
            Some(select) => select.to_string(),
            None => generate_view_select(&view.keys, dataset),
        };
        if select.is_empty() {
            log::debug!("View '{}' has no select statement or keys", view.name);
        }

        self.templates.render(
            CREATE_VIEW,
            context! {
                name => dataset.qualify(&view.name),
                or_replace => view.or_replace && !view.materialized,
                materialized => view.materialized,
                if_not_exists => view.if_not_exists,
                columns => columns,
                partitioning => partitioning,
                clustering => clustering,
                options => view_options(view),
                select => select,
            },
        )
    }

    pub fn drop_view(
        &self,
        view_name: &str,
        dataset: &DatasetRef,
        materialized: bool,
    ) -> DdlResult<String> {
        self.templates.render(
            DROP_VIEW,
            context! {
                name => dataset.qualify(view_name),
                materialized => materialized,
            },
        )
    }
}

impl DdlProvider<'static> {
    /// Provider over the built-in BigQuery dialect.
    pub fn bigquery() -> Self {
        Self::new(Dialect::bigquery())
    }
}

/// Synthesise `SELECT .. FROM ..` from key references.
///
/// Each source table appears once in `FROM`, in first-seen order.
pub fn generate_view_select(keys: &[ViewKey], dataset: &DatasetRef) -> String {
    if keys.is_empty() {
        return String::new();
    }

    let projections = keys
        .iter()
        .map(|key| {
            let source = format!("{}.{}", quote_ident(&key.table), quote_ident(&key.column));
            match key.alias.as_deref() {
                Some(alias) if !alias.is_empty() && alias != key.column => {
                    format!("{source} AS {}", quote_ident(alias))
                }
                _ => source,
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut tables: Vec<&str> = Vec::new();
    for key in keys {
        if !tables.contains(&key.table.as_str()) {
            tables.push(&key.table);
        }
    }
    let from = tables
        .iter()
        .map(|table| dataset.qualify(table))
        .collect::<Vec<_>>()
        .join(", ");

    format!("SELECT {projections}\nFROM {from}")
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
