//! Database (BigQuery dataset / schema) records

use super::{Label, RoundingMode};
use crate::naming::full_name;
use crate::serde_helpers::default_true;
use serde::{Deserialize, Serialize};

/// A database definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Database {
    pub name: String,

    #[serde(default)]
    pub friendly_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub if_not_exists: bool,

    /// Default table expiration in days
    #[serde(default)]
    pub default_expiration_days: Option<f64>,

    #[serde(default)]
    pub default_partition_expiration_days: Option<f64>,

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

impl Default for Database {
    fn default() -> Self {
        Self {
            name: String::new(),
            friendly_name: None,
            description: None,
            project_id: None,
            if_not_exists: false,
            default_expiration_days: None,
            default_partition_expiration_days: None,
            default_rounding_mode: None,
            encryption_key: None,
            labels: Vec::new(),
            is_activated: true,
        }
    }
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Qualified schema name (`project.dataset`)
    pub fn full_name(&self) -> String {
        full_name(None, self.project_id.as_deref(), &self.name)
    }

    /// Reference used to qualify the objects this database contains.
    pub fn dataset_ref(&self) -> DatasetRef {
        DatasetRef {
            project_id: self.project_id.clone(),
            dataset: Some(self.name.clone()),
        }
    }
}

/// Project/dataset qualifiers for objects inside a database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DatasetRef {
    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub dataset: Option<String>,
}

impl DatasetRef {
    pub fn new(project_id: Option<&str>, dataset: Option<&str>) -> Self {
        Self {
            project_id: project_id.map(String::from),
            dataset: dataset.map(String::from),
        }
    }

    /// Fully qualify an object inside this dataset.
    pub fn qualify(&self, object: &str) -> String {
        full_name(self.project_id.as_deref(), self.dataset.as_deref(), object)
    }
}
