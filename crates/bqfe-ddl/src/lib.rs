//! bqfe-ddl - DDL synthesis for BigQuery
//!
//! Renders the schema model from `bqfe-core` into CREATE/ALTER/DROP
//! statements: column types, `OPTIONS(...)`, partitioning and clustering,
//! with deactivated elements emitted as comments. All rendering is pure;
//! a [`DdlProvider`] can be shared freely across threads.

pub mod activation;
pub mod column;
pub mod delta;
pub mod error;
pub mod options;
pub mod partitioning;
pub mod provider;
pub mod script;
pub mod template;

pub use activation::{comment_if_deactivated, order_columns, CommentStyle, Fragment};
pub use column::{render_column, render_column_type, unsupported_types, UNSUPPORTED_TYPE_PREFIX};
pub use error::{DdlError, DdlResult};
pub use options::OptionsBuilder;
pub use partitioning::{is_activated_partition, render_clustering, render_partitioning};
pub use provider::{generate_view_select, DdlProvider};
pub use script::{alter_script, create_script, terminate_statement, ScriptBuilder};
