//! bqfe-core - Core library for bqfe
//!
//! This crate provides the schema model handed over by the hydration step,
//! the dialect type tables, and BigQuery name resolution used by the DDL
//! renderers.

pub mod dialect;
pub mod error;
pub mod model;
pub mod naming;
pub(crate) mod serde_helpers;

pub use dialect::{Dialect, TypeDescriptor, TypeShape};
pub use error::{CoreError, CoreResult};
pub use model::{
    ChangeOperation, ChangeSet, ClusteringKey, ColumnDef, ColumnMode, Database, DatabaseDef,
    DatasetRef, Label, PartitionKey, PartitionMode, PartitioningSpec, RangeOptions, RoundingMode,
    SchemaDocument, Table, TableType, TimeUnit, View, ViewKey,
};
