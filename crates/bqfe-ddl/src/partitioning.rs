//! Partitioning and clustering clauses

use crate::activation::{comment_if_deactivated, Fragment};
use bqfe_core::model::{ClusteringKey, PartitionMode, PartitioningSpec};
use bqfe_core::naming::quote_ident;

/// Ingestion-time pseudo column
const PARTITION_TIME: &str = "_PARTITIONTIME";

/// Render the `PARTITION BY` clause.
///
/// Returns an empty string when partitioning is off or the chosen mode lacks
/// a required field.
pub fn render_partitioning(spec: &PartitioningSpec) -> String {
    match spec.mode {
        PartitionMode::None => String::new(),
        PartitionMode::IngestionTime => {
            format!("PARTITION BY {}({PARTITION_TIME})", spec.time_unit)
        }
        PartitionMode::TimeUnitColumn => match partition_column(spec) {
            Some(column) => format!("PARTITION BY {}({column})", spec.time_unit),
            None => {
                log::debug!("Time-unit partitioning without a column; clause omitted");
                String::new()
            }
        },
        PartitionMode::IntegerRange => {
            let range = spec.range.filter(|range| range.has_bounds());
            match (partition_column(spec), range) {
                (Some(column), Some(range)) => {
                    let mut bounds = format!(
                        "{}, {}",
                        range.start.unwrap_or_default(),
                        range.end.unwrap_or_default()
                    );
                    if let Some(interval) = range.interval {
                        bounds.push_str(&format!(", {interval}"));
                    }
                    format!("PARTITION BY RANGE_BUCKET({column}, GENERATE_ARRAY({bounds}))")
                }
                _ => {
                    log::debug!("Integer-range partitioning without column or bounds; clause omitted");
                    String::new()
                }
            }
        }
    }
}

fn partition_column(spec: &PartitioningSpec) -> Option<String> {
    spec.column
        .as_ref()
        .filter(|key| !key.name.is_empty())
        .map(|key| quote_ident(&key.name))
}

/// Whether the partitioning clause renders live.
///
/// Column-based modes need their column present and activated; range mode
/// additionally needs both bounds. Ingestion time and no partitioning are
/// always live.
pub fn is_activated_partition(spec: &PartitioningSpec) -> bool {
    let column_live = spec
        .column
        .as_ref()
        .is_some_and(|key| !key.name.is_empty() && key.is_activated);
    match spec.mode {
        PartitionMode::None | PartitionMode::IngestionTime => true,
        PartitionMode::TimeUnitColumn => column_live,
        PartitionMode::IntegerRange => {
            column_live && spec.range.is_some_and(|range| range.has_bounds())
        }
    }
}

/// Partitioning clause tagged with its activation state.
pub fn partition_fragment(spec: &PartitioningSpec) -> Fragment {
    Fragment::new(render_partitioning(spec), is_activated_partition(spec))
}

/// Render the `CLUSTER BY` clause.
///
/// Under a live parent, deactivated keys are inline-commented after the live
/// ones and the clause is deactivated as a whole when no key is live. Under a
/// deactivated parent every key renders plainly, since the parent statement
/// is commented out as a unit.
pub fn render_clustering(keys: &[ClusteringKey], is_parent_activated: bool) -> Fragment {
    let keys: Vec<&ClusteringKey> = keys.iter().filter(|k| !k.name.is_empty()).collect();
    if keys.is_empty() {
        return Fragment::default();
    }
    let join = |keys: &[&ClusteringKey]| {
        keys.iter()
            .map(|k| quote_ident(&k.name))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if !is_parent_activated {
        return Fragment::live(format!("CLUSTER BY {}", join(&keys)));
    }

    let (live, dead): (Vec<&ClusteringKey>, Vec<&ClusteringKey>) =
        keys.into_iter().partition(|k| k.is_activated);

    if live.is_empty() {
        return Fragment::new(format!("CLUSTER BY {}", join(&dead)), false);
    }

    let mut clause = format!("CLUSTER BY {}", join(&live));
    if !dead.is_empty() {
        clause.push(' ');
        clause.push_str(&comment_if_deactivated(&join(&dead), false, true));
    }
    Fragment::live(clause)
}

#[cfg(test)]
#[path = "partitioning_test.rs"]
mod tests;
