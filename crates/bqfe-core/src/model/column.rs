//! Column definitions

use crate::serde_helpers::default_true;
use serde::{Deserialize, Serialize};

/// Column mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMode {
    #[default]
    Nullable,
    Required,
    Repeated,
}

/// A column (or nested field) definition
///
/// Struct-shaped types carry their children in `fields`; array-shaped types
/// carry their element in `items`. Elements have no name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDef {
    #[serde(default)]
    pub name: String,

    /// Logical type tag, resolved against the dialect type table
    #[serde(rename = "type")]
    pub type_tag: String,

    #[serde(default)]
    pub mode: ColumnMode,

    #[serde(default = "default_true")]
    pub is_activated: bool,

    #[serde(default)]
    pub description: Option<String>,

    /// Max length for length-shaped types
    #[serde(default)]
    pub length: Option<u64>,

    #[serde(default)]
    pub precision: Option<u32>,

    #[serde(default)]
    pub scale: Option<u32>,

    #[serde(default)]
    pub fields: Vec<ColumnDef>,

    #[serde(default)]
    pub items: Option<Box<ColumnDef>>,
}

impl ColumnDef {
    /// A live nullable column with no parameters.
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            mode: ColumnMode::Nullable,
            is_activated: true,
            description: None,
            length: None,
            precision: None,
            scale: None,
            fields: Vec::new(),
            items: None,
        }
    }

    pub fn with_mode(mut self, mode: ColumnMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn required(self) -> Self {
        self.with_mode(ColumnMode::Required)
    }

    pub fn repeated(self) -> Self {
        self.with_mode(ColumnMode::Repeated)
    }

    pub fn deactivated(mut self) -> Self {
        self.is_activated = false;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_precision(mut self, precision: u32, scale: Option<u32>) -> Self {
        self.precision = Some(precision);
        self.scale = scale;
        self
    }

    pub fn with_fields(mut self, fields: Vec<ColumnDef>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_items(mut self, items: ColumnDef) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Copy holding only the type, mode and nested schema.
    ///
    /// Name, description and activation are reset, which is what
    /// `SET DATA TYPE` needs.
    pub fn type_only(&self) -> ColumnDef {
        ColumnDef {
            name: String::new(),
            type_tag: self.type_tag.clone(),
            mode: self.mode,
            is_activated: true,
            description: None,
            length: self.length,
            precision: self.precision,
            scale: self.scale,
            fields: self.fields.clone(),
            items: self.items.clone(),
        }
    }
}
