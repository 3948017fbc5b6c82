//! Type/column renderer: logical column definitions to BigQuery column syntax

use crate::options::column_options;
use bqfe_core::dialect::{Dialect, TypeShape};
use bqfe_core::model::{ColumnDef, ColumnMode};
use bqfe_core::naming::quote_ident;

/// Marker substituted for a type the dialect table does not know.
pub const UNSUPPORTED_TYPE_PREFIX: &str = "<unsupported type: ";

fn unsupported_marker(tag: &str) -> String {
    format!("{UNSUPPORTED_TYPE_PREFIX}{tag}>")
}

/// Render a full column line: `name TYPE[ NOT NULL][ OPTIONS(..)]`.
pub fn render_column(column: &ColumnDef, dialect: &Dialect) -> String {
    let mut line = format!(
        "{} {}",
        quote_ident(&column.name),
        render_column_type(column, dialect)
    );
    let options = column_options(column);
    if !options.is_empty() {
        line.push(' ');
        line.push_str(&options);
    }
    line
}

/// Render only the type part of a column, including its mode.
///
/// Repeated columns become `ARRAY<..>`; required columns get `NOT NULL`.
pub fn render_column_type(column: &ColumnDef, dialect: &Dialect) -> String {
    let base = render_base_type(column, dialect);
    match column.mode {
        ColumnMode::Nullable => base,
        ColumnMode::Required => format!("{base} NOT NULL"),
        ColumnMode::Repeated => format!("ARRAY<{base}>"),
    }
}

fn render_base_type(column: &ColumnDef, dialect: &Dialect) -> String {
    let Some(descriptor) = dialect.lookup(&column.type_tag) else {
        log::warn!(
            "Unsupported type '{}' for column '{}'",
            column.type_tag,
            column.name
        );
        return unsupported_marker(&column.type_tag);
    };
    let keyword = descriptor.keyword.as_str();

    match descriptor.shape {
        TypeShape::Scalar => keyword.to_string(),
        TypeShape::Length => match column.length {
            Some(length) => format!("{keyword}({length})"),
            None => keyword.to_string(),
        },
        TypeShape::Precision => match (column.precision, column.scale) {
            (Some(precision), Some(scale)) => format!("{keyword}({precision}, {scale})"),
            (Some(precision), None) => format!("{keyword}({precision})"),
            (None, _) => keyword.to_string(),
        },
        TypeShape::Struct => {
            let fields = column
                .fields
                .iter()
                .map(|field| render_column(field, dialect))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{keyword}<{fields}>")
        }
        TypeShape::Array => match column.items.as_deref() {
            Some(item) => format!("{keyword}<{}>", render_base_type(item, dialect)),
            None => {
                log::warn!("Array column '{}' has no item definition", column.name);
                unsupported_marker(&column.type_tag)
            }
        },
    }
}

/// Every type tag in `column` (nested fields included) that rendered as an
/// unsupported marker.
pub fn unsupported_types(column: &ColumnDef, dialect: &Dialect) -> Vec<String> {
    let mut found = Vec::new();
    collect_unsupported(column, dialect, &mut found);
    found
}

fn collect_unsupported(column: &ColumnDef, dialect: &Dialect, found: &mut Vec<String>) {
    match dialect.lookup(&column.type_tag) {
        None => found.push(column.type_tag.clone()),
        Some(descriptor) => match descriptor.shape {
            TypeShape::Struct => {
                for field in &column.fields {
                    collect_unsupported(field, dialect, found);
                }
            }
            TypeShape::Array => match column.items.as_deref() {
                Some(item) => collect_unsupported(item, dialect, found),
                None => found.push(column.type_tag.clone()),
            },
            _ => {}
        },
    }
}

#[cfg(test)]
#[path = "column_test.rs"]
mod tests;
