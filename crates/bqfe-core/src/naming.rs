//! Identifier and string-literal quoting for BigQuery DDL
//!
//! Identifiers are emitted bare when BigQuery accepts them unquoted and are
//! back-tick delimited otherwise. String literals are single-quoted with
//! backslash escapes.

/// GoogleSQL reserved keywords; these must be back-ticked to be used as names.
const RESERVED_KEYWORDS: &[&str] = &[
    "ALL", "AND", "ANY", "ARRAY", "AS", "ASC", "ASSERT_ROWS_MODIFIED", "AT", "BETWEEN", "BY",
    "CASE", "CAST", "COLLATE", "CONTAINS", "CREATE", "CROSS", "CUBE", "CURRENT", "DEFAULT",
    "DEFINE", "DESC", "DISTINCT", "ELSE", "END", "ENUM", "ESCAPE", "EXCEPT", "EXCLUDE",
    "EXISTS", "EXTRACT", "FALSE", "FETCH", "FOLLOWING", "FOR", "FROM", "FULL", "GROUP",
    "GROUPING", "GROUPS", "HASH", "HAVING", "IF", "IGNORE", "IN", "INNER", "INTERSECT",
    "INTERVAL", "INTO", "IS", "JOIN", "LATERAL", "LEFT", "LIKE", "LIMIT", "LOOKUP", "MERGE",
    "NATURAL", "NEW", "NO", "NOT", "NULL", "NULLS", "OF", "ON", "OR", "ORDER", "OUTER", "OVER",
    "PARTITION", "PRECEDING", "PROTO", "QUALIFY", "RANGE", "RECURSIVE", "RESPECT", "RIGHT",
    "ROLLUP", "ROWS", "SELECT", "SET", "SOME", "STRUCT", "TABLESAMPLE", "THEN", "TO", "TREAT",
    "TRUE", "UNBOUNDED", "UNION", "UNNEST", "USING", "WHEN", "WHERE", "WINDOW", "WITH", "WITHIN",
];

/// Returns `true` if `ident` can appear in DDL without back-ticks.
pub fn is_bare_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED_KEYWORDS
            .iter()
            .any(|kw| kw.eq_ignore_ascii_case(ident))
}

/// Quote a single identifier segment.
///
/// # Examples
/// ```
/// use bqfe_core::naming::quote_ident;
/// assert_eq!(quote_ident("orders"), "orders");
/// assert_eq!(quote_ident("my-project"), "`my-project`");
/// assert_eq!(quote_ident("select"), "`select`");
/// ```
pub fn quote_ident(ident: &str) -> String {
    if is_bare_identifier(ident) {
        return ident.to_string();
    }
    let escaped = ident.replace('\\', "\\\\").replace('`', "\\`");
    format!("`{escaped}`")
}

/// Build a fully qualified name from optional project and dataset segments.
///
/// Absent or empty segments are skipped, so no stray `.` is ever produced.
///
/// # Examples
/// ```
/// use bqfe_core::naming::full_name;
/// assert_eq!(full_name(None, None, "t1"), "t1");
/// assert_eq!(full_name(Some("my-proj"), Some("sales"), "orders"), "`my-proj`.sales.orders");
/// assert_eq!(full_name(Some(""), Some("sales"), "orders"), "sales.orders");
/// ```
pub fn full_name(project: Option<&str>, dataset: Option<&str>, object: &str) -> String {
    [project, dataset, Some(object)]
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(".")
}

/// Escape text for use inside a single-quoted string literal.
pub fn escape_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap text in a single-quoted, escaped string literal.
pub fn quote_string(text: &str) -> String {
    format!("'{}'", escape_quotes(text))
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
