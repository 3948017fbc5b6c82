use super::*;
use bqfe_core::model::{
    PartitionKey, PartitionMode, PartitioningSpec, RangeOptions, RoundingMode, TableType, TimeUnit,
};
use chrono::TimeZone;
use std::collections::HashSet;

/// Pull every single-quoted literal out of `text`, undoing backslash escapes.
fn quoted_literals(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\'' {
            continue;
        }
        let mut literal = String::new();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some('n') => literal.push('\n'),
                    Some('r') => literal.push('\r'),
                    Some(other) => literal.push(other),
                    None => break,
                },
                '\'' => break,
                other => literal.push(other),
            }
        }
        out.push(literal);
    }
    out
}

fn parse_labels(literal: &str) -> HashSet<(String, String)> {
    let values = quoted_literals(literal);
    values
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

#[test]
fn test_empty_builder_yields_empty_string() {
    assert_eq!(OptionsBuilder::new().build(), "");
}

#[test]
fn test_absent_empty_and_false_values_are_omitted() {
    let options = OptionsBuilder::new()
        .string("friendly_name", None)
        .string("description", Some(""))
        .string("kms_key_name", Some("   "))
        .flag("require_partition_filter", false)
        .number("refresh_interval_minutes", None)
        .number("default_table_expiration_days", Some(f64::NAN))
        .integer::<u32>("partition_expiration_days", None)
        .labels(&[]);
    assert!(options.is_empty());
    assert_eq!(options.build(), "");
}

#[test]
fn test_options_keep_insertion_order() {
    let options = OptionsBuilder::new()
        .string("friendly_name", Some("Orders"))
        .string("description", Some("All orders"))
        .flag("require_partition_filter", true)
        .build();
    assert_eq!(
        options,
        "OPTIONS(friendly_name='Orders', description='All orders', require_partition_filter=true)"
    );
}

#[test]
fn test_string_values_are_escaped() {
    let options = OptionsBuilder::new()
        .string("description", Some("user's \\ note"))
        .build();
    assert_eq!(options, r"OPTIONS(description='user\'s \\ note')");
}

#[test]
fn test_timestamp_literal() {
    let ts = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(timestamp_literal(&ts), "TIMESTAMP '2030-01-02 03:04:05 UTC'");
}

#[test]
fn test_number_formatting() {
    let options = OptionsBuilder::new()
        .number("a", Some(7.0))
        .number("b", Some(0.5))
        .build();
    assert_eq!(options, "OPTIONS(a=7, b=0.5)");
}

#[test]
fn test_labels_literal() {
    let labels = vec![Label::new("env", "prod"), Label::new("team", "data")];
    assert_eq!(
        labels_literal(&labels),
        "[('env', 'prod'), ('team', 'data')]"
    );
    assert_eq!(labels_literal(&[]), "");
    assert_eq!(labels_literal(&[Label::new("", "orphan")]), "");
}

#[test]
fn test_labels_parse_back_to_same_set() {
    let label_sets = vec![
        vec![Label::new("env", "prod")],
        vec![
            Label::new("team", "data eng"),
            Label::new("cost-center", "it's, complicated"),
            Label::new("path", r"c:\temp"),
            Label::new("empty", ""),
        ],
        vec![Label::new("a", "(x, y)"), Label::new("b", "'quoted'")],
    ];

    for labels in label_sets {
        let literal = labels_literal(&labels);
        let expected: HashSet<(String, String)> = labels
            .iter()
            .map(|l| (l.key.clone(), l.value.clone()))
            .collect();
        assert_eq!(parse_labels(&literal), expected, "literal: {literal}");
    }
}

#[test]
fn test_table_options_full_order() {
    let mut table = Table::new("orders").with_partitioning(
        PartitioningSpec::time_unit_column("created_at", TimeUnit::Day).with_filter_required(true),
    );
    table.friendly_name = Some("Orders".into());
    table.description = Some("All orders".into());
    table.expiration = Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
    table.partitioning.expiration_days = Some(30);
    table.default_rounding_mode = Some(RoundingMode::RoundHalfEven);
    table.encryption_key = Some("projects/p/locations/l/keyRings/r/cryptoKeys/k".into());
    table.labels = vec![Label::new("env", "prod")];

    assert_eq!(
        table_options(&table),
        "OPTIONS(friendly_name='Orders', description='All orders', \
         expiration_timestamp=TIMESTAMP '2030-01-01 00:00:00 UTC', \
         partition_expiration_days=30, default_rounding_mode='ROUND_HALF_EVEN', \
         require_partition_filter=true, \
         kms_key_name='projects/p/locations/l/keyRings/r/cryptoKeys/k', \
         labels=[('env', 'prod')])"
    );
}

#[test]
fn test_table_options_external_drops_partition_settings() {
    let mut table = Table::new("ext").with_partitioning(
        PartitioningSpec::time_unit_column("created_at", TimeUnit::Day).with_filter_required(true),
    );
    table.partitioning.expiration_days = Some(10);
    table.table_type = TableType::External;
    assert_eq!(table_options(&table), "");
}

#[test]
fn test_table_options_filter_without_partitioning_dropped() {
    let table =
        Table::new("t").with_partitioning(PartitioningSpec::default().with_filter_required(true));
    assert_eq!(table_options(&table), "");
}

#[test]
fn test_table_options_incomplete_partitioning_drops_partition_settings() {
    let mut table = Table::new("t1").with_partitioning(PartitioningSpec {
        mode: PartitionMode::TimeUnitColumn,
        column: None,
        filter_required: true,
        expiration_days: Some(5),
        ..Default::default()
    });
    assert_eq!(table_options(&table), "");

    table.partitioning = PartitioningSpec {
        mode: PartitionMode::IntegerRange,
        column: Some(PartitionKey::new("bucket")),
        range: Some(RangeOptions {
            start: Some(0),
            end: None,
            interval: Some(10),
        }),
        filter_required: true,
        ..Default::default()
    };
    assert_eq!(table_options(&table), "");
}

#[test]
fn test_schema_options() {
    let mut db = Database::new("sales");
    db.description = Some("Sales".into());
    db.default_expiration_days = Some(7.0);
    db.encryption_key = Some("key".into());
    db.labels = vec![Label::new("team", "revenue")];
    assert_eq!(
        schema_options(&db),
        "OPTIONS(description='Sales', default_table_expiration_days=7, \
         default_kms_key_name='key', labels=[('team', 'revenue')])"
    );
    assert_eq!(schema_options(&Database::new("bare")), "");
}

#[test]
fn test_view_refresh_options_only_for_materialized() {
    let mut view = View::new("v");
    view.enable_refresh = true;
    view.refresh_interval_minutes = Some(60.0);
    assert_eq!(view_options(&view), "");

    view.materialized = true;
    assert_eq!(
        view_options(&view),
        "OPTIONS(enable_refresh=true, refresh_interval_minutes=60)"
    );

    view.enable_refresh = false;
    assert_eq!(view_options(&view), "");
}

#[test]
fn test_column_options() {
    let column = ColumnDef::new("c", "string");
    assert_eq!(column_options(&column), "");
    let column = column.with_description("desc");
    assert_eq!(column_options(&column), "OPTIONS(description='desc')");
}
