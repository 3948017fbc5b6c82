//! Already-classified schema changes handed over by an external diff engine

use super::{ColumnDef, Database, DatasetRef, Table, View};
use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single schema change to render as an ALTER/DROP/CREATE statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChangeOperation {
    CreateDatabase {
        database: Database,
    },
    AlterDatabase {
        database: Database,
    },
    DropDatabase {
        #[serde(default)]
        project_id: Option<String>,
        name: String,
    },
    CreateTable {
        #[serde(default)]
        dataset: DatasetRef,
        table: Table,
    },
    AlterTableOptions {
        #[serde(default)]
        dataset: DatasetRef,
        table: Table,
    },
    DropTable {
        #[serde(default)]
        dataset: DatasetRef,
        table: String,
    },
    AddColumn {
        #[serde(default)]
        dataset: DatasetRef,
        table: String,
        column: ColumnDef,
    },
    DropColumn {
        #[serde(default)]
        dataset: DatasetRef,
        table: String,
        column: String,
    },
    AlterColumnType {
        #[serde(default)]
        dataset: DatasetRef,
        table: String,
        column: ColumnDef,
    },
    AlterColumnDropNotNull {
        #[serde(default)]
        dataset: DatasetRef,
        table: String,
        column: String,
    },
    AlterColumnOptions {
        #[serde(default)]
        dataset: DatasetRef,
        table: String,
        column: String,
        #[serde(default)]
        description: String,
    },
    CreateView {
        #[serde(default)]
        dataset: DatasetRef,
        view: View,
    },
    AlterView {
        #[serde(default)]
        dataset: DatasetRef,
        view: View,
    },
    DropView {
        #[serde(default)]
        dataset: DatasetRef,
        view: String,
        #[serde(default)]
        materialized: bool,
    },
}

/// Ordered list of changes (YAML or JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ChangeSet {
    #[serde(default)]
    pub changes: Vec<ChangeOperation>,
}

impl ChangeSet {
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load a change set from disk, choosing the parser by extension.
    pub fn load(path: &Path) -> CoreResult<Self> {
        super::load_document(path)
    }
}
