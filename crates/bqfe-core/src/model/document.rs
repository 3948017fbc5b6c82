//! Schema document: the hydrated input for a full create script

use super::{Database, Table, View};
use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A database together with the objects it contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseDef {
    pub database: Database,

    #[serde(default)]
    pub tables: Vec<Table>,

    #[serde(default)]
    pub views: Vec<View>,
}

/// Root of a schema document (YAML or JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    #[serde(default)]
    pub databases: Vec<DatabaseDef>,
}

impl SchemaDocument {
    /// Parse a document from YAML (JSON documents are accepted as well).
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load a document from disk, choosing the parser by extension.
    pub fn load(path: &Path) -> CoreResult<Self> {
        super::load_document(path)
    }

    /// Number of tables and views across all databases.
    pub fn object_count(&self) -> usize {
        self.databases
            .iter()
            .map(|db| db.tables.len() + db.views.len())
            .sum()
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
