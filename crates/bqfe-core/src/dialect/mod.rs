//! Dialect tables: logical type tag -> DDL syntax, and generic -> logical type
//!
//! The built-in BigQuery table is embedded YAML parsed once per process.
//! Renderers take a `&Dialect` so a different table can be injected.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

const BIGQUERY_YAML: &str = include_str!("bigquery.yml");

static BIGQUERY: LazyLock<Dialect> = LazyLock::new(|| {
    Dialect::from_yaml(BIGQUERY_YAML).expect("embedded bigquery.yml is a valid dialect table")
});

/// How a type keyword is turned into DDL syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeShape {
    /// Bare keyword (`INT64`)
    #[default]
    Scalar,
    /// Optional max length (`STRING(20)`)
    Length,
    /// Optional precision and scale (`NUMERIC(10, 2)`)
    Precision,
    /// Composite of named fields (`STRUCT<a INT64, b STRING>`)
    Struct,
    /// Composite of a single item type (`ARRAY<STRING>`)
    Array,
}

impl TypeShape {
    /// Returns `true` for shapes that wrap nested column definitions.
    pub fn is_composite(self) -> bool {
        matches!(self, TypeShape::Struct | TypeShape::Array)
    }
}

/// One entry of the type table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDescriptor {
    /// Canonical logical tag
    pub tag: String,

    /// Alternative tags accepted on input
    #[serde(default)]
    pub aliases: Vec<String>,

    /// DDL keyword
    pub keyword: String,

    /// Syntax shape
    #[serde(default)]
    pub shape: TypeShape,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DialectFile {
    name: String,
    types: Vec<TypeDescriptor>,
    #[serde(default)]
    default_types: HashMap<String, String>,
}

/// A warehouse dialect's type and default-type tables
#[derive(Debug, Clone)]
pub struct Dialect {
    name: String,
    types: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
    default_types: HashMap<String, String>,
}

impl Dialect {
    /// The built-in BigQuery dialect.
    pub fn bigquery() -> &'static Dialect {
        &BIGQUERY
    }

    /// Parse a dialect table from YAML.
    pub fn from_yaml(yaml: &str) -> CoreResult<Self> {
        let file: DialectFile =
            serde_yaml::from_str(yaml).map_err(|e| CoreError::DialectParseError {
                message: e.to_string(),
            })?;

        let mut index = HashMap::new();
        for (pos, descriptor) in file.types.iter().enumerate() {
            if descriptor.keyword.trim().is_empty() {
                return Err(CoreError::DialectInvalid {
                    message: format!("type '{}' has an empty keyword", descriptor.tag),
                });
            }
            for tag in std::iter::once(&descriptor.tag).chain(&descriptor.aliases) {
                if index.insert(tag.to_ascii_lowercase(), pos).is_some() {
                    return Err(CoreError::DuplicateTypeTag { tag: tag.clone() });
                }
            }
        }

        for (generic, tag) in &file.default_types {
            if !index.contains_key(&tag.to_ascii_lowercase()) {
                return Err(CoreError::DialectInvalid {
                    message: format!("default type '{generic}' maps to unknown tag '{tag}'"),
                });
            }
        }

        log::debug!(
            "Loaded dialect '{}' with {} types",
            file.name,
            file.types.len()
        );

        Ok(Self {
            name: file.name,
            types: file.types,
            index,
            default_types: file.default_types,
        })
    }

    /// Dialect name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a type by tag or alias (case-insensitive).
    pub fn lookup(&self, tag: &str) -> Option<&TypeDescriptor> {
        self.index
            .get(&tag.trim().to_ascii_lowercase())
            .map(|&pos| &self.types[pos])
    }

    /// Returns `true` if the tag or alias is known.
    pub fn has_type(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// All type descriptors in table order.
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Logical tag used for a generic (JSON schema) type.
    pub fn default_type(&self, generic: &str) -> Option<&str> {
        self.default_types.get(generic).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
