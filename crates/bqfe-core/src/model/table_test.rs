use super::*;

#[test]
fn test_parse_table_yaml() {
    let yaml = r#"
name: orders
columns:
  - name: id
    type: integer
    mode: required
  - name: note
    type: string
    is_activated: false
partitioning:
  mode: time_unit_column
  column:
    name: created_at
  time_unit: month
  filter_required: true
clustering:
  - name: customer_id
  - name: region
    is_activated: false
expiration: "2030-01-01T00:00:00Z"
default_rounding_mode: ROUND_HALF_EVEN
labels:
  - key: env
    value: prod
"#;
    let table: Table = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(table.name, "orders");
    assert!(table.is_activated);
    assert_eq!(table.columns.len(), 2);
    assert!(!table.columns[1].is_activated);
    assert_eq!(table.partitioning.mode, PartitionMode::TimeUnitColumn);
    assert_eq!(table.partitioning.time_unit, TimeUnit::Month);
    assert!(table.partitioning.column.as_ref().unwrap().is_activated);
    assert!(!table.clustering[1].is_activated);
    assert_eq!(
        table.default_rounding_mode,
        Some(RoundingMode::RoundHalfEven)
    );
    assert_eq!(table.labels[0], Label::new("env", "prod"));
    assert!(table.requires_partition_filter());
}

#[test]
fn test_unknown_table_key_rejected() {
    let yaml = "name: t\nbogus_option: 1\n";
    assert!(serde_yaml::from_str::<Table>(yaml).is_err());
}

#[test]
fn test_external_never_requires_partition_filter() {
    let mut table = Table::new("ext").with_partitioning(
        PartitioningSpec::time_unit_column("created_at", TimeUnit::Day).with_filter_required(true),
    );
    assert!(table.requires_partition_filter());

    table.table_type = TableType::External;
    assert!(!table.requires_partition_filter());
}

#[test]
fn test_unpartitioned_never_requires_partition_filter() {
    let table =
        Table::new("t").with_partitioning(PartitioningSpec::default().with_filter_required(true));
    assert!(!table.requires_partition_filter());
}

#[test]
fn test_partitioning_needs_mode_fields() {
    assert!(!PartitioningSpec::default().is_partitioned());
    assert!(PartitioningSpec::ingestion_time(TimeUnit::Hour).is_partitioned());
    assert!(PartitioningSpec::time_unit_column("ts", TimeUnit::Day).is_partitioned());

    let no_column = PartitioningSpec {
        mode: PartitionMode::TimeUnitColumn,
        ..Default::default()
    };
    assert!(!no_column.is_partitioned());

    let no_bounds = PartitioningSpec::integer_range("bucket", RangeOptions::default());
    assert!(!no_bounds.is_partitioned());
}

#[test]
fn test_incomplete_partitioning_never_requires_partition_filter() {
    let table = Table::new("t1").with_partitioning(PartitioningSpec {
        mode: PartitionMode::TimeUnitColumn,
        column: None,
        filter_required: true,
        ..Default::default()
    });
    assert!(!table.requires_partition_filter());
}

#[test]
fn test_time_unit_display() {
    assert_eq!(TimeUnit::Hour.to_string(), "HOUR");
    assert_eq!(TimeUnit::default().to_string(), "DAY");
}

#[test]
fn test_range_bounds() {
    assert!(!RangeOptions::default().has_bounds());
    let range = RangeOptions {
        start: Some(0),
        end: Some(100),
        interval: None,
    };
    assert!(range.has_bounds());
}

#[test]
fn test_default_table_is_activated() {
    assert!(Table::default().is_activated);
    let parsed: Table = serde_yaml::from_str("name: t\n").unwrap();
    assert_eq!(parsed, Table::new("t"));
}
