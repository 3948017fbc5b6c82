//! Activation filter: deactivated schema elements render as comments
//!
//! Renderers produce [`Fragment`]s that carry their activation flag; the
//! statement assembler applies comment syntax once, when it places the
//! fragment into a statement.

/// How a deactivated fragment is commented out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* text */`, for fragments embedded mid-statement
    Inline,
    /// `-- text` on every line, for clauses and whole statements
    WholeLine,
}

/// Rendered text together with its activation flag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    pub text: String,
    pub is_activated: bool,
}

impl Fragment {
    pub fn new(text: impl Into<String>, is_activated: bool) -> Self {
        Self {
            text: text.into(),
            is_activated,
        }
    }

    pub fn live(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Final text, commented out in `style` when deactivated.
    pub fn render(&self, style: CommentStyle) -> String {
        comment_if_deactivated(&self.text, self.is_activated, style == CommentStyle::Inline)
    }
}

/// Comment out `statement` unless it is activated.
///
/// `is_part_of_line` selects the inline `/* */` form; otherwise every line is
/// prefixed with `-- `. Empty text stays empty.
pub fn comment_if_deactivated(statement: &str, is_activated: bool, is_part_of_line: bool) -> String {
    if is_activated || statement.is_empty() {
        return statement.to_string();
    }
    if is_part_of_line {
        format!("/* {} */", statement.replace("*/", "* /"))
    } else {
        statement
            .lines()
            .map(|line| format!("-- {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Join column lines: activated first, then deactivated, each group in its
/// original order. Deactivated lines are inline-commented.
pub fn order_columns(columns: &[Fragment]) -> String {
    let activated = columns.iter().filter(|c| c.is_activated);
    let deactivated = columns.iter().filter(|c| !c.is_activated);

    activated
        .chain(deactivated)
        .filter(|c| !c.is_empty())
        .map(|c| c.render(CommentStyle::Inline))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Returns `true` when every non-blank line is a `--` comment.
pub(crate) fn is_fully_commented(statement: &str) -> bool {
    let mut lines = statement.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut any = false;
    let all = lines.all(|line| {
        any = true;
        line.starts_with("--")
    });
    any && all
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
