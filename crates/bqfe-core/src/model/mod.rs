//! Schema model records handed over by the hydration step
//!
//! All records are plain data: they are built fresh for each render call and
//! are only ever read by the renderers.

pub mod change;
pub mod column;
pub mod database;
pub mod document;
pub mod table;
pub mod view;

pub use change::{ChangeOperation, ChangeSet};
pub use column::{ColumnDef, ColumnMode};
pub use database::{Database, DatasetRef};
pub use document::{DatabaseDef, SchemaDocument};
pub use table::{
    ClusteringKey, PartitionKey, PartitionMode, PartitioningSpec, RangeOptions, RoundingMode,
    Table, TableType, TimeUnit,
};
pub use view::{View, ViewKey};

use crate::error::{CoreError, CoreResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single `(key, value)` label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Label {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl Label {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Read a YAML or JSON record from disk; `.json` selects the JSON parser.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> CoreResult<T> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|details| CoreError::DocumentParseError {
        path: path.display().to_string(),
        details,
    })
}
