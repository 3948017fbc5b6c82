//! CLI command implementations

pub(crate) mod alter;
pub(crate) mod common;
pub(crate) mod generate;
pub(crate) mod types;
