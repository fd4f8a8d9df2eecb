//! Presentation orchestrator
//!
//! Top-level entry over an analysis result's tree. The analyzer hands
//! back either a single root value or an ordered list of top-level
//! statements; statements render independently, each under its own
//! top-level index in the position space so their expansion states
//! cannot collide. An absent or null tree yields no rows at all - the
//! display layer shows its empty state instead of classifying nothing.

use crate::expansion::{ExpansionStore, NodePath};
use crate::render::{render_into, Row};
use crate::value::Value;

/// Produce the full row sequence for an analysis result's tree.
pub fn present(ast: Option<&Value>, expansion: &ExpansionStore) -> Vec<Row> {
    let mut rows = Vec::new();
    match ast {
        None | Some(Value::Null) => {}
        Some(Value::Sequence(statements)) => {
            for (index, statement) in statements.iter().enumerate() {
                render_into(
                    statement,
                    None,
                    0,
                    NodePath::statement(index),
                    expansion,
                    &mut rows,
                );
            }
        }
        Some(root) => render_into(root, None, 0, NodePath::root(), expansion, &mut rows),
    }
    rows
}
