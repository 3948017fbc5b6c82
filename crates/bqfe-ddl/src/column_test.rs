use super::*;

fn bq() -> &'static Dialect {
    Dialect::bigquery()
}

#[test]
fn test_scalar_columns() {
    assert_eq!(render_column(&ColumnDef::new("id", "integer"), bq()), "id INT64");
    assert_eq!(render_column(&ColumnDef::new("ok", "BOOLEAN"), bq()), "ok BOOL");
    assert_eq!(render_column(&ColumnDef::new("ts", "timestamp"), bq()), "ts TIMESTAMP");
}

#[test]
fn test_required_column() {
    let column = ColumnDef::new("id", "INTEGER").required();
    assert_eq!(render_column(&column, bq()), "id INT64 NOT NULL");
}

#[test]
fn test_repeated_column_wraps_in_array() {
    let column = ColumnDef::new("tags", "string").repeated();
    assert_eq!(render_column(&column, bq()), "tags ARRAY<STRING>");
}

#[test]
fn test_parameterized_types() {
    let name = ColumnDef::new("name", "string").with_length(100);
    assert_eq!(render_column(&name, bq()), "name STRING(100)");

    let price = ColumnDef::new("price", "numeric").with_precision(10, Some(2));
    assert_eq!(render_column(&price, bq()), "price NUMERIC(10, 2)");

    let big = ColumnDef::new("big", "bignumeric").with_precision(40, None);
    assert_eq!(render_column(&big, bq()), "big BIGNUMERIC(40)");

    let mut scale_only = ColumnDef::new("s", "numeric");
    scale_only.scale = Some(3);
    assert_eq!(render_column(&scale_only, bq()), "s NUMERIC");
}

#[test]
fn test_quoted_column_name() {
    let column = ColumnDef::new("order", "string");
    assert_eq!(render_column(&column, bq()), "`order` STRING");
}

#[test]
fn test_description_option() {
    let column = ColumnDef::new("note", "string").with_description("user's note");
    assert_eq!(
        render_column(&column, bq()),
        r"note STRING OPTIONS(description='user\'s note')"
    );
}

#[test]
fn test_struct_fields_match_standalone_rendering() {
    let fields = vec![
        ColumnDef::new("sku", "string"),
        ColumnDef::new("qty", "integer").required(),
        ColumnDef::new("price", "numeric").with_precision(9, Some(2)),
    ];
    let column = ColumnDef::new("item", "record").with_fields(fields.clone());
    let rendered = render_column(&column, bq());

    let inner = rendered
        .strip_prefix("item STRUCT<")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap();
    let parts: Vec<&str> = inner.split(", ").collect();
    assert_eq!(parts.len(), fields.len());
    for (part, field) in parts.iter().zip(&fields) {
        assert_eq!(*part, render_column(field, bq()));
    }
}

#[test]
fn test_repeated_struct() {
    let column = ColumnDef::new("items", "struct")
        .repeated()
        .with_fields(vec![ColumnDef::new("sku", "string")]);
    assert_eq!(render_column(&column, bq()), "items ARRAY<STRUCT<sku STRING>>");
}

#[test]
fn test_nested_struct() {
    let column = ColumnDef::new("a", "struct").with_fields(vec![ColumnDef::new("b", "struct")
        .with_fields(vec![ColumnDef::new("c", "date")])]);
    assert_eq!(render_column(&column, bq()), "a STRUCT<b STRUCT<c DATE>>");
}

#[test]
fn test_array_type_tag_uses_items() {
    let column = ColumnDef::new("scores", "array")
        .with_items(ColumnDef::new("", "float64"))
        .required();
    assert_eq!(render_column(&column, bq()), "scores ARRAY<FLOAT64> NOT NULL");
}

#[test]
fn test_array_of_struct_items() {
    let column = ColumnDef::new("points", "array").with_items(
        ColumnDef::new("", "struct").with_fields(vec![
            ColumnDef::new("x", "int64"),
            ColumnDef::new("y", "int64"),
        ]),
    );
    assert_eq!(
        render_column(&column, bq()),
        "points ARRAY<STRUCT<x INT64, y INT64>>"
    );
}

#[test]
fn test_unsupported_type_marker() {
    let column = ColumnDef::new("id", "uuid");
    let rendered = render_column(&column, bq());
    assert_eq!(rendered, "id <unsupported type: uuid>");
    assert!(rendered.contains(UNSUPPORTED_TYPE_PREFIX));
    assert_eq!(unsupported_types(&column, bq()), vec!["uuid".to_string()]);
}

#[test]
fn test_unsupported_nested_type_does_not_abort_siblings() {
    let column = ColumnDef::new("s", "struct").with_fields(vec![
        ColumnDef::new("ok", "string"),
        ColumnDef::new("bad", "money"),
    ]);
    assert_eq!(
        render_column(&column, bq()),
        "s STRUCT<ok STRING, bad <unsupported type: money>>"
    );
    assert_eq!(unsupported_types(&column, bq()), vec!["money".to_string()]);
}

#[test]
fn test_array_without_items_is_flagged() {
    let column = ColumnDef::new("xs", "array");
    assert_eq!(render_column(&column, bq()), "xs <unsupported type: array>");
    assert_eq!(unsupported_types(&column, bq()), vec!["array".to_string()]);
}

#[test]
fn test_supported_column_has_no_unsupported_types() {
    let column = ColumnDef::new("id", "int64");
    assert!(unsupported_types(&column, bq()).is_empty());
}

#[test]
fn test_render_column_type_ignores_name_and_description() {
    let column = ColumnDef::new("amount", "numeric")
        .with_precision(12, Some(4))
        .with_description("ignored")
        .required();
    assert_eq!(render_column_type(&column, bq()), "NUMERIC(12, 4) NOT NULL");
}
