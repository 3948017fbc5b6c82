use super::*;

#[test]
fn test_quote_ident_bare() {
    assert_eq!(quote_ident("users"), "users");
    assert_eq!(quote_ident("_tmp1"), "_tmp1");
}

#[test]
fn test_quote_ident_needs_backticks() {
    assert_eq!(quote_ident("my-project"), "`my-project`");
    assert_eq!(quote_ident("1st"), "`1st`");
    assert_eq!(quote_ident("has space"), "`has space`");
}

#[test]
fn test_quote_ident_reserved_keyword_any_case() {
    assert_eq!(quote_ident("order"), "`order`");
    assert_eq!(quote_ident("PARTITION"), "`PARTITION`");
}

#[test]
fn test_quote_ident_escapes_backtick() {
    assert_eq!(quote_ident("we`ird"), r"`we\`ird`");
}

#[test]
fn test_quote_ident_empty() {
    assert_eq!(quote_ident(""), "``");
}

#[test]
fn test_full_name_all_segments() {
    assert_eq!(
        full_name(Some("proj"), Some("sales"), "orders"),
        "proj.sales.orders"
    );
}

#[test]
fn test_full_name_skips_absent_segments() {
    assert_eq!(full_name(None, Some("sales"), "orders"), "sales.orders");
    assert_eq!(full_name(Some("proj"), None, "orders"), "proj.orders");
    assert_eq!(full_name(Some(""), Some(""), "orders"), "orders");
}

#[test]
fn test_full_name_delimits_each_segment() {
    assert_eq!(
        full_name(Some("acme-prod"), Some("raw data"), "events"),
        "`acme-prod`.`raw data`.events"
    );
}

#[test]
fn test_escape_quotes() {
    assert_eq!(escape_quotes("hello"), "hello");
    assert_eq!(escape_quotes("user's note"), r"user\'s note");
    assert_eq!(escape_quotes(r"C:\tmp"), r"C:\\tmp");
    assert_eq!(escape_quotes("a\nb"), r"a\nb");
}

#[test]
fn test_quote_string() {
    assert_eq!(quote_string("it's"), r"'it\'s'");
    assert_eq!(quote_string(""), "''");
}
