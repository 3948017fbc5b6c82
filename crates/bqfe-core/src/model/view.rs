//! View and materialized view records

use super::{ClusteringKey, Label, PartitioningSpec};
use crate::serde_helpers::default_true;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A column reference used to synthesise a view's select statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewKey {
    /// Source table (unqualified)
    pub table: String,
    /// Source column
    pub column: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl ViewKey {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Name the column has in the view.
    pub fn output_name(&self) -> &str {
        self.alias
            .as_deref()
            .filter(|alias| !alias.is_empty())
            .unwrap_or(&self.column)
    }
}

/// A view definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct View {
    pub name: String,

    #[serde(default)]
    pub materialized: bool,

    #[serde(default)]
    pub or_replace: bool,

    #[serde(default)]
    pub if_not_exists: bool,

    /// Explicit query; takes precedence over `keys`
    #[serde(default)]
    pub select_statement: Option<String>,

    #[serde(default)]
    pub keys: Vec<ViewKey>,

    /// Materialized views only
    #[serde(default)]
    pub partitioning: PartitioningSpec,

    /// Materialized views only
    #[serde(default)]
    pub clustering: Vec<ClusteringKey>,

    #[serde(default)]
    pub enable_refresh: bool,

    #[serde(default)]
    pub refresh_interval_minutes: Option<f64>,

    #[serde(default)]
    pub friendly_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,

    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default = "default_true")]
    pub is_activated: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            name: String::new(),
            materialized: false,
            or_replace: false,
            if_not_exists: false,
            select_statement: None,
            keys: Vec::new(),
            partitioning: PartitioningSpec::default(),
            clustering: Vec::new(),
            enable_refresh: false,
            refresh_interval_minutes: None,
            friendly_name: None,
            description: None,
            expiration: None,
            labels: Vec::new(),
            is_activated: true,
        }
    }
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select_statement = Some(select.into());
        self
    }

    pub fn with_keys(mut self, keys: Vec<ViewKey>) -> Self {
        self.keys = keys;
        self
    }

    pub fn materialized(mut self) -> Self {
        self.materialized = true;
        self
    }

    /// Explicit select statement, if one is set and non-blank.
    pub fn explicit_select(&self) -> Option<&str> {
        self.select_statement
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
