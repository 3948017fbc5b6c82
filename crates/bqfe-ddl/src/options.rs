//! Option builder: the `OPTIONS(...)` clause
//!
//! Each object kind has a fixed, ordered list of recognised options. Absent,
//! empty or `false` values are dropped, and an empty list yields an empty
//! string so the caller can omit the clause.

use bqfe_core::model::{ColumnDef, Database, Label, Table, View};
use bqfe_core::naming::quote_string;
use chrono::{DateTime, Utc};
use std::fmt::Display;

/// Ordered `key=value` accumulator
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    entries: Vec<(&'static str, String)>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quoted string option; skipped when absent or blank.
    pub fn string(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.entries.push((key, quote_string(value)));
        }
        self
    }

    /// Timestamp literal option; skipped when absent.
    pub fn timestamp(mut self, key: &'static str, value: Option<&DateTime<Utc>>) -> Self {
        if let Some(value) = value {
            self.entries.push((key, timestamp_literal(value)));
        }
        self
    }

    /// Boolean-gated option: emitted as `key=true` only when set.
    pub fn flag(mut self, key: &'static str, value: bool) -> Self {
        if value {
            self.entries.push((key, "true".to_string()));
        }
        self
    }

    /// Floating-point option; skipped when absent or not finite.
    pub fn number(mut self, key: &'static str, value: Option<f64>) -> Self {
        if let Some(value) = value.filter(|v| v.is_finite()) {
            self.entries.push((key, value.to_string()));
        }
        self
    }

    /// Integer option; skipped when absent.
    pub fn integer<T: Display>(mut self, key: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.entries.push((key, value.to_string()));
        }
        self
    }

    /// `labels=[...]`; skipped when there are no usable labels.
    pub fn labels(mut self, labels: &[Label]) -> Self {
        let literal = labels_literal(labels);
        if !literal.is_empty() {
            self.entries.push(("labels", literal));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `OPTIONS(k=v, ...)`, or the empty string when nothing was kept.
    pub fn build(self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let body = self
            .entries
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OPTIONS({body})")
    }
}

/// `TIMESTAMP 'YYYY-MM-DD HH:MM:SS UTC'`
pub fn timestamp_literal(value: &DateTime<Utc>) -> String {
    format!("TIMESTAMP '{}'", value.format("%Y-%m-%d %H:%M:%S UTC"))
}

/// `[('k', 'v'), ...]`; labels with an empty key are dropped.
pub fn labels_literal(labels: &[Label]) -> String {
    let pairs: Vec<String> = labels
        .iter()
        .filter(|label| !label.key.is_empty())
        .map(|label| format!("({}, {})", quote_string(&label.key), quote_string(&label.value)))
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("[{}]", pairs.join(", "))
    }
}

pub fn table_options(table: &Table) -> String {
    let partitioned = table.partitioning.is_partitioned() && !table.is_external();
    OptionsBuilder::new()
        .string("friendly_name", table.friendly_name.as_deref())
        .string("description", table.description.as_deref())
        .timestamp("expiration_timestamp", table.expiration.as_ref())
        .integer(
            "partition_expiration_days",
            table.partitioning.expiration_days.filter(|_| partitioned),
        )
        .string(
            "default_rounding_mode",
            table.default_rounding_mode.map(|mode| mode.as_str()),
        )
        .flag("require_partition_filter", table.requires_partition_filter())
        .string("kms_key_name", table.encryption_key.as_deref())
        .labels(&table.labels)
        .build()
}

pub fn schema_options(database: &Database) -> String {
    OptionsBuilder::new()
        .string("friendly_name", database.friendly_name.as_deref())
        .string("description", database.description.as_deref())
        .number(
            "default_table_expiration_days",
            database.default_expiration_days,
        )
        .number(
            "default_partition_expiration_days",
            database.default_partition_expiration_days,
        )
        .string(
            "default_rounding_mode",
            database.default_rounding_mode.map(|mode| mode.as_str()),
        )
        .string("default_kms_key_name", database.encryption_key.as_deref())
        .labels(&database.labels)
        .build()
}

/// Refresh settings are only meaningful for materialized views.
pub fn view_options(view: &View) -> String {
    let refresh = view.materialized && view.enable_refresh;
    OptionsBuilder::new()
        .string("friendly_name", view.friendly_name.as_deref())
        .string("description", view.description.as_deref())
        .timestamp("expiration_timestamp", view.expiration.as_ref())
        .flag("enable_refresh", refresh)
        .number(
            "refresh_interval_minutes",
            view.refresh_interval_minutes.filter(|_| refresh),
        )
        .labels(&view.labels)
        .build()
}

pub fn column_options(column: &ColumnDef) -> String {
    OptionsBuilder::new()
        .string("description", column.description.as_deref())
        .build()
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
