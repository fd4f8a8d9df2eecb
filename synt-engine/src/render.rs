//! Tree renderer
//!
//! Walks a value depth-first, pre-order, and produces the flat row
//! sequence the display layers consume. Each row carries its depth for
//! indentation, its structural path (the expansion store's key), an
//! optional field label, and a content variant describing what to show.
//!
//! The walk carries explicit frames on a heap-allocated stack instead
//! of recursing, so the input tree's depth is bounded by memory rather
//! than the call stack.
//!
//! Rendering is pure: the same `(value, expansion snapshot)` always
//! yields the same rows, and the store is only read, never written.

use crate::classify::{classify, is_tag_like, ClassifiedNode, EnumPayload, FieldSet, Scalar};
use crate::expansion::{ExpansionStore, NodePath};
use crate::value::Value;

/// How a scalar row is displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarDisplay {
    /// Uppercase-initial string, shown as a bare tag token.
    TagToken(String),
    /// Any other string, shown quoted.
    Quoted(String),
    Number(String),
    Bool(bool),
}

impl ScalarDisplay {
    fn of(scalar: Scalar<'_>) -> ScalarDisplay {
        match scalar {
            Scalar::Bool(b) => ScalarDisplay::Bool(b),
            Scalar::Number(n) => ScalarDisplay::Number(n.to_string()),
            Scalar::String(s) if is_tag_like(s) => ScalarDisplay::TagToken(s.to_string()),
            Scalar::String(s) => ScalarDisplay::Quoted(s.to_string()),
        }
    }
}

/// What a single row shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    /// Explicit null marker.
    Null,
    /// Scalar literal.
    Literal(ScalarDisplay),
    /// Tagged variant marker; `inline` carries the synthetic payload's
    /// literal when the variant wraps a single non-mapping value.
    Tag {
        name: String,
        inline: Option<String>,
    },
    /// Plain record row; no marker of its own.
    Record,
    /// `field [len]` header introducing the elements of a sequence field.
    SequenceHeader { field: String, len: usize },
}

/// One display row of the presented tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Nesting level, for indentation.
    pub depth: usize,
    /// Structural position; key into the expansion store.
    pub path: NodePath,
    /// Field name this node was reached through. Root nodes and
    /// sequence elements carry no label.
    pub label: Option<String>,
    pub content: RowContent,
    /// True when the row can expand into child rows.
    pub has_children: bool,
    /// Expansion state at render time; meaningful only with children.
    pub expanded: bool,
}

enum Frame<'a> {
    Node {
        value: &'a Value,
        label: Option<String>,
        depth: usize,
        path: NodePath,
    },
    Header {
        field: String,
        len: usize,
        depth: usize,
        path: NodePath,
    },
}

/// Render a single root value into rows.
pub fn render_tree(root: &Value, expansion: &ExpansionStore) -> Vec<Row> {
    let mut rows = Vec::new();
    render_into(root, None, 0, NodePath::root(), expansion, &mut rows);
    rows
}

/// Render the node reached under `label` at `depth`/`path`, appending
/// its rows (and, where expanded, its descendants') to `rows`.
pub fn render_into(
    value: &Value,
    label: Option<String>,
    depth: usize,
    path: NodePath,
    expansion: &ExpansionStore,
    rows: &mut Vec<Row>,
) {
    let mut stack = vec![Frame::Node {
        value,
        label,
        depth,
        path,
    }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Header {
                field,
                len,
                depth,
                path,
            } => {
                rows.push(Row {
                    depth,
                    path,
                    label: None,
                    content: RowContent::SequenceHeader { field, len },
                    has_children: false,
                    expanded: false,
                });
            }
            Frame::Node {
                value,
                label,
                depth,
                path,
            } => match classify(value) {
                ClassifiedNode::Null => rows.push(Row {
                    depth,
                    path,
                    label,
                    content: RowContent::Null,
                    has_children: false,
                    expanded: false,
                }),
                ClassifiedNode::Scalar(scalar) => rows.push(Row {
                    depth,
                    path,
                    label,
                    content: RowContent::Literal(ScalarDisplay::of(scalar)),
                    has_children: false,
                    expanded: false,
                }),
                ClassifiedNode::Enum {
                    tag,
                    payload: EnumPayload::Value(payload),
                } => {
                    // Synthetic single-value wrap: inline, never descends
                    rows.push(Row {
                        depth,
                        path,
                        label,
                        content: RowContent::Tag {
                            name: tag.to_string(),
                            inline: Some(inline_literal(payload)),
                        },
                        has_children: false,
                        expanded: false,
                    });
                }
                ClassifiedNode::Enum {
                    tag,
                    payload: EnumPayload::Fields(fields),
                } => {
                    let has_children = !fields.is_empty();
                    let expanded = expansion.is_expanded(&path);
                    if has_children && expanded {
                        push_fields(&mut stack, FieldSet::Named(fields), depth, &path);
                    }
                    rows.push(Row {
                        depth,
                        path,
                        label,
                        content: RowContent::Tag {
                            name: tag.to_string(),
                            inline: None,
                        },
                        has_children,
                        expanded,
                    });
                }
                ClassifiedNode::Struct { fields } => {
                    let has_children = !fields.is_empty();
                    let expanded = expansion.is_expanded(&path);
                    if has_children && expanded {
                        push_fields(&mut stack, fields, depth, &path);
                    }
                    rows.push(Row {
                        depth,
                        path,
                        label,
                        content: RowContent::Record,
                        has_children,
                        expanded,
                    });
                }
            },
        }
    }
}

/// Queue a node's fields for rendering. Fields are pushed in reverse so
/// the stack pops them back in document order.
fn push_fields<'a>(
    stack: &mut Vec<Frame<'a>>,
    fields: FieldSet<'a>,
    depth: usize,
    parent: &NodePath,
) {
    match fields {
        FieldSet::Named(entries) => {
            for (name, value) in entries.iter().rev() {
                push_field(stack, name, value, depth, parent);
            }
        }
        FieldSet::Indexed(items) => {
            for (index, value) in items.iter().enumerate().rev() {
                push_field(stack, &index.to_string(), value, depth, parent);
            }
        }
    }
}

fn push_field<'a>(
    stack: &mut Vec<Frame<'a>>,
    name: &str,
    value: &'a Value,
    depth: usize,
    parent: &NodePath,
) {
    match value {
        // An empty sequence field contributes nothing: no header, no rows
        Value::Sequence(items) if items.is_empty() => {}
        Value::Sequence(items) => {
            let field_path = parent.field(name);
            for (index, item) in items.iter().enumerate().rev() {
                stack.push(Frame::Node {
                    value: item,
                    label: None,
                    depth: depth + 1,
                    path: field_path.index(index),
                });
            }
            stack.push(Frame::Header {
                field: name.to_string(),
                len: items.len(),
                depth: depth + 1,
                path: field_path,
            });
        }
        other => stack.push(Frame::Node {
            value: other,
            label: Some(name.to_string()),
            depth: depth + 1,
            path: parent.field(name),
        }),
    }
}

/// One-line literal for a synthetic enum payload, shown on the tag's
/// own row. Nested containers inside a sequence payload are elided to
/// keep the line flat.
fn inline_literal(value: &Value) -> String {
    match value {
        Value::Sequence(items) => {
            let parts: Vec<String> = items.iter().map(inline_atom).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Mapping(entries) => {
            let parts: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{}: {}", key, inline_atom(value)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        other => inline_atom(other),
    }
}

fn inline_atom(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "[…]".to_string(),
        Value::Mapping(_) => "{…}".to_string(),
    }
}
