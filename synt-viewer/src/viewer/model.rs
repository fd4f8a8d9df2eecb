//! Data model for the viewer
//!
//! The Model struct holds the pure application state:
//! - The analyzer result (tokens, tree, optional error)
//! - The expansion store for the presented tree
//! - Current selection (a tree position or a token index)
//!
//! This separation of concerns makes testing easier: the model is pure
//! data and can be tested independently of rendering and UI logic. The
//! visible row sequence is recomputed from the result and the store on
//! every pass rather than cached, so rendering stays a pure function of
//! the model.

use synt_engine::analysis::{AnalysisResult, Token};
use synt_engine::expansion::{ExpansionStore, NodePath};
use synt_engine::present::present;
use synt_engine::render::Row;

/// Which viewer currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Tree viewer (syntax tree) has focus
    #[default]
    TreeViewer,
    /// Token viewer (flat token table) has focus
    TokenViewer,
}

impl Focus {
    /// Toggle focus to the other viewer
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::TreeViewer => Focus::TokenViewer,
            Focus::TokenViewer => Focus::TreeViewer,
        }
    }
}

/// Current selection in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A tree row, addressed by its structural position
    Tree(NodePath),
    /// A token index in the token table
    Token(usize),
}

/// The core data model
#[derive(Debug, Clone)]
pub struct Model {
    result: AnalysisResult,
    expansion: ExpansionStore,
    selection: Selection,
}

#[allow(dead_code)]
impl Model {
    /// Create a new model from an analyzer result
    pub fn new(result: AnalysisResult) -> Self {
        Model {
            result,
            expansion: ExpansionStore::new(),
            selection: Selection::Tree(NodePath::root()),
        }
    }

    /// The analyzer result currently on display
    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn tokens(&self) -> &[Token] {
        &self.result.tokens
    }

    /// The analyzer's error message, if it reported one
    pub fn error(&self) -> Option<&str> {
        self.result.error.as_deref()
    }

    /// Rows currently visible, honoring expansion state.
    ///
    /// Recomputed on every call: row content is a pure function of the
    /// result and the expansion snapshot, never cached.
    pub fn visible_rows(&self) -> Vec<Row> {
        present(self.result.ast.as_ref(), &self.expansion)
    }

    /// Whether the node at `path` currently shows its children
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.expansion.is_expanded(path)
    }

    /// Toggle whether the node at `path` shows its children
    pub fn toggle_expansion(&mut self, path: &NodePath) {
        self.expansion.toggle(path);
    }

    /// Get the current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a tree row
    pub fn select_row(&mut self, path: NodePath) {
        self.selection = Selection::Tree(path);
    }

    /// Select a token by index
    pub fn select_token(&mut self, index: usize) {
        self.selection = Selection::Token(index);
    }

    /// Get the selected tree position if in tree mode
    pub fn selected_path(&self) -> Option<&NodePath> {
        match &self.selection {
            Selection::Tree(path) => Some(path),
            _ => None,
        }
    }

    /// Get the selected token index if in token mode
    pub fn selected_token(&self) -> Option<usize> {
        match &self.selection {
            Selection::Token(index) => Some(*index),
            _ => None,
        }
    }

    /// Replace the analyzer result.
    ///
    /// Presentation state does not carry over: the expansion store is
    /// rebuilt with defaults and the selection returns to the root.
    pub fn replace_result(&mut self, result: AnalysisResult) {
        self.result = result;
        self.expansion.reset();
        self.selection = Selection::Tree(NodePath::root());
    }
}
