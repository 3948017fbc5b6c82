//! Table records: partitioning, clustering and table-level settings

use super::{ColumnDef, Label};
use crate::serde_helpers::default_true;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Native or external table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    #[default]
    Native,
    External,
}

/// Partitioning mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartitionMode {
    #[default]
    None,
    TimeUnitColumn,
    IngestionTime,
    IntegerRange,
}

/// Time granularity for time-based partitioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hour,
    #[default]
    Day,
    Month,
    Year,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Hour => write!(f, "HOUR"),
            TimeUnit::Day => write!(f, "DAY"),
            TimeUnit::Month => write!(f, "MONTH"),
            TimeUnit::Year => write!(f, "YEAR"),
        }
    }
}

/// Column referenced by a partitioning clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartitionKey {
    pub name: String,
    #[serde(default = "default_true")]
    pub is_activated: bool,
}

impl PartitionKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_activated: true,
        }
    }
}

/// Bounds for integer-range partitioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RangeOptions {
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub end: Option<i64>,
    #[serde(default)]
    pub interval: Option<i64>,
}

impl RangeOptions {
    /// Returns `true` when both bounds are set.
    pub fn has_bounds(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Partitioning configuration of a table or materialized view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PartitioningSpec {
    #[serde(default)]
    pub mode: PartitionMode,

    #[serde(default)]
    pub column: Option<PartitionKey>,

    #[serde(default)]
    pub time_unit: TimeUnit,

    #[serde(default)]
    pub range: Option<RangeOptions>,

    #[serde(default)]
    pub filter_required: bool,

    #[serde(default)]
    pub expiration_days: Option<u32>,
}

impl PartitioningSpec {
    pub fn time_unit_column(column: impl Into<String>, unit: TimeUnit) -> Self {
        Self {
            mode: PartitionMode::TimeUnitColumn,
            column: Some(PartitionKey::new(column)),
            time_unit: unit,
            ..Default::default()
        }
    }

    pub fn ingestion_time(unit: TimeUnit) -> Self {
        Self {
            mode: PartitionMode::IngestionTime,
            time_unit: unit,
            ..Default::default()
        }
    }

    pub fn integer_range(column: impl Into<String>, range: RangeOptions) -> Self {
        Self {
            mode: PartitionMode::IntegerRange,
            column: Some(PartitionKey::new(column)),
            range: Some(range),
            ..Default::default()
        }
    }

    pub fn with_filter_required(mut self, required: bool) -> Self {
        self.filter_required = required;
        self
    }

    /// Returns `true` when the mode has every field it needs to produce a
    /// `PARTITION BY` clause.
    pub fn is_partitioned(&self) -> bool {
        let has_column = self.column.as_ref().is_some_and(|key| !key.name.is_empty());
        match self.mode {
            PartitionMode::None => false,
            PartitionMode::IngestionTime => true,
            PartitionMode::TimeUnitColumn => has_column,
            PartitionMode::IntegerRange => {
                has_column && self.range.is_some_and(|range| range.has_bounds())
            }
        }
    }
}

/// A clustering column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusteringKey {
    pub name: String,
    #[serde(default = "default_true")]
    pub is_activated: bool,
}

impl ClusteringKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_activated: true,
        }
    }
}

/// NUMERIC rounding mode applied by default to new columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    RoundHalfAwayFromZero,
    RoundHalfEven,
}

impl RoundingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::RoundHalfAwayFromZero => "ROUND_HALF_AWAY_FROM_ZERO",
            RoundingMode::RoundHalfEven => "ROUND_HALF_EVEN",
        }
    }
}

/// A table definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Table {
    pub name: String,

    #[serde(default)]
    pub friendly_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub columns: Vec<ColumnDef>,

    #[serde(default)]
    pub or_replace: bool,

    #[serde(default)]
    pub if_not_exists: bool,

    #[serde(default)]
    pub temporary: bool,

    #[serde(default)]
    pub table_type: TableType,

    #[serde(default)]
    pub partitioning: PartitioningSpec,

    #[serde(default)]
    pub clustering: Vec<ClusteringKey>,

    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,

    #[serde(default)]
    pub default_rounding_mode: Option<RoundingMode>,

    /// Customer-managed encryption key
    #[serde(default)]
    pub encryption_key: Option<String>,

    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default = "default_true")]
    pub is_activated: bool,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            name: String::new(),
            friendly_name: None,
            description: None,
            columns: Vec::new(),
            or_replace: false,
            if_not_exists: false,
            temporary: false,
            table_type: TableType::Native,
            partitioning: PartitioningSpec::default(),
            clustering: Vec::new(),
            expiration: None,
            default_rounding_mode: None,
            encryption_key: None,
            labels: Vec::new(),
            is_activated: true,
        }
    }
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_columns(mut self, columns: Vec<ColumnDef>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_partitioning(mut self, partitioning: PartitioningSpec) -> Self {
        self.partitioning = partitioning;
        self
    }

    pub fn with_clustering<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clustering = names.into_iter().map(ClusteringKey::new).collect();
        self
    }

    pub fn is_external(&self) -> bool {
        self.table_type == TableType::External
    }

    /// Effective `require_partition_filter`.
    ///
    /// Always `false` for external tables and unpartitioned tables, whatever
    /// the stored flag says.
    pub fn requires_partition_filter(&self) -> bool {
        !self.is_external() && self.partitioning.is_partitioned() && self.partitioning.filter_required
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
