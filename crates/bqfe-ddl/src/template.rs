//! Statement templates and the template renderer
//!
//! Every optional slot is wrapped in `{% if slot %}` together with its
//! leading separator, so an empty fragment leaves no orphan keyword, space or
//! blank line behind.

use crate::error::DdlResult;
use minijinja::{Environment, Value};

pub const CREATE_SCHEMA: &str = "CREATE SCHEMA {% if if_not_exists %}IF NOT EXISTS {% endif %}{{ name }}\
{% if options %}\n{{ options }}{% endif %}";

pub const ALTER_SCHEMA: &str = "ALTER SCHEMA {{ name }} SET {{ options }}";

pub const DROP_SCHEMA: &str = "DROP SCHEMA IF EXISTS {{ name }}";

pub const CREATE_TABLE: &str = "CREATE {% if or_replace %}OR REPLACE {% endif %}\
{% if temporary %}TEMPORARY {% endif %}{% if external %}EXTERNAL {% endif %}\
TABLE {% if if_not_exists %}IF NOT EXISTS {% endif %}{{ name }}\
{% if columns %} ({{ columns }}){% endif %}\
{% if partitioning %}\n{{ partitioning }}{% endif %}\
{% if clustering %}\n{{ clustering }}{% endif %}\
{% if options %}\n{{ options }}{% endif %}";

pub const ALTER_TABLE: &str = "ALTER TABLE {{ name }} SET {{ options }}";

pub const DROP_TABLE: &str = "DROP TABLE IF EXISTS {{ name }}";

pub const ADD_COLUMN: &str = "ALTER TABLE {{ table }} ADD COLUMN IF NOT EXISTS {{ column }}";

pub const DROP_COLUMN: &str = "ALTER TABLE {{ table }} DROP COLUMN IF EXISTS {{ column }}";

pub const ALTER_COLUMN_TYPE: &str =
    "ALTER TABLE {{ table }} ALTER COLUMN {{ column }} SET DATA TYPE {{ data_type }}";

pub const ALTER_COLUMN_DROP_NOT_NULL: &str =
    "ALTER TABLE {{ table }} ALTER COLUMN {{ column }} DROP NOT NULL";

pub const ALTER_COLUMN_OPTIONS: &str =
    "ALTER TABLE {{ table }} ALTER COLUMN {{ column }} SET {{ options }}";

pub const CREATE_VIEW: &str = "CREATE {% if or_replace %}OR REPLACE {% endif %}\
{% if materialized %}MATERIALIZED {% endif %}\
VIEW {% if if_not_exists %}IF NOT EXISTS {% endif %}{{ name }}\
{% if columns %} ({{ columns }}){% endif %}\
{% if partitioning %}\n{{ partitioning }}{% endif %}\
{% if clustering %}\n{{ clustering }}{% endif %}\
{% if options %}\n{{ options }}{% endif %}\
{% if select %}\nAS {{ select }}{% endif %}";

pub const ALTER_VIEW: &str =
    "ALTER {% if materialized %}MATERIALIZED {% endif %}VIEW {{ name }} SET {{ options }}";

pub const DROP_VIEW: &str =
    "DROP {% if materialized %}MATERIALIZED {% endif %}VIEW IF EXISTS {{ name }}";

/// Fills statement templates with rendered fragments
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Render `template` against `ctx` (built with [`minijinja::context!`]).
    pub fn render(&self, template: &str, ctx: Value) -> DdlResult<String> {
        Ok(self.env.render_str(template, ctx)?)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
