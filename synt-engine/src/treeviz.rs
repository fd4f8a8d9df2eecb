//! Plain-text tree format
//!
//! One line per row, two spaces of indentation per level, with a small
//! icon telling the row kinds apart:
//!
//!     Null:            ∅
//!     Scalar literal:  ◦
//!     Variant tag:     ◈
//!     Record:          ⊞
//!     Sequence header: ☰
//!
//! Example:
//!
//!   ◈ If
//!     ◦ cond: X
//!     ☰ then [2]
//!     ◦ A
//!     ◦ B
//!
//! Useful for non-interactive dumps and for test assertions against
//! rendered structure.

use crate::render::{Row, RowContent, ScalarDisplay};

fn icon(content: &RowContent) -> &'static str {
    match content {
        RowContent::Null => "∅",
        RowContent::Literal(_) => "◦",
        RowContent::Tag { .. } => "◈",
        RowContent::Record => "⊞",
        RowContent::SequenceHeader { .. } => "☰",
    }
}

fn content_text(content: &RowContent) -> String {
    match content {
        RowContent::Null => "null".to_string(),
        RowContent::Literal(ScalarDisplay::TagToken(s)) => s.clone(),
        RowContent::Literal(ScalarDisplay::Quoted(s)) => format!("\"{}\"", s),
        RowContent::Literal(ScalarDisplay::Number(n)) => n.clone(),
        RowContent::Literal(ScalarDisplay::Bool(b)) => b.to_string(),
        RowContent::Tag { name, inline: None } => name.clone(),
        RowContent::Tag {
            name,
            inline: Some(value),
        } => format!("{} {}", name, value),
        RowContent::Record => String::new(),
        RowContent::SequenceHeader { field, len } => format!("{} [{}]", field, len),
    }
}

/// Format a row sequence as indented text, one line per row.
pub fn rows_to_text(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        let indent = "  ".repeat(row.depth);
        let mut line = format!("{}{}", indent, icon(&row.content));
        if let Some(label) = &row.label {
            line.push_str(&format!(" {}:", label));
        }
        let text = content_text(&row.content);
        if !text.is_empty() {
            line.push(' ');
            line.push_str(&text);
        }
        if row.has_children && !row.expanded {
            line.push_str(" …");
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
