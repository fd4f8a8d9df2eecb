//! Expansion state for tree positions
//!
//! Tracks, per position in the presented tree, whether a node's
//! children are currently shown. Positions are structural paths rather
//! than object identities, so state survives re-renders of the same
//! value. The store holds only explicit user toggles; everything else
//! falls back to a depth-derived default. It is discarded wholesale
//! whenever a new analysis result replaces the root value.

use std::collections::HashMap;
use std::fmt;

/// Positions shallower than this default to expanded.
pub const DEFAULT_EXPANDED_DEPTH: usize = 3;

/// One step of a tree position: a named field or a sequence element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathStep {
    Field(String),
    Index(usize),
}

/// Structural address of a node relative to the tree root.
///
/// `[Field("then"), Index(1)]` is the second element of the `then`
/// sequence field of the root node. Top-level statements of a statement
/// list are addressed as `[Index(i)]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct NodePath {
    steps: Vec<PathStep>,
}

impl NodePath {
    /// The empty path: the root node itself.
    pub fn root() -> Self {
        NodePath { steps: Vec::new() }
    }

    /// Address of the `index`-th top-level statement.
    pub fn statement(index: usize) -> Self {
        NodePath {
            steps: vec![PathStep::Index(index)],
        }
    }

    /// Extend the path through a named field.
    pub fn field(&self, name: &str) -> Self {
        let mut steps = self.steps.clone();
        steps.push(PathStep::Field(name.to_string()));
        NodePath { steps }
    }

    /// Extend the path to a sequence element.
    pub fn index(&self, index: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(PathStep::Index(index));
        NodePath { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Presentation depth of this position.
    ///
    /// Index steps address anonymous siblings that sit at their parent
    /// field's depth, so only field steps count. Top-level statements
    /// are at depth 0, matching the renderer's depth counter.
    pub fn depth(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, PathStep::Field(_)))
            .count()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .steps
            .iter()
            .map(|step| match step {
                PathStep::Field(name) => name.clone(),
                PathStep::Index(index) => index.to_string(),
            })
            .collect();
        write!(f, "{}", parts.join("→"))
    }
}

/// Per-position expand/collapse state.
///
/// Reads fall back to the depth default; writes record an explicit
/// override for one position. `reset` returns every position to its
/// default, which is how a replaced root value starts fresh.
#[derive(Debug, Clone)]
pub struct ExpansionStore {
    overrides: HashMap<NodePath, bool>,
    default_depth: usize,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::with_default_depth(DEFAULT_EXPANDED_DEPTH)
    }

    /// A store whose positions default to expanded below `depth`.
    pub fn with_default_depth(depth: usize) -> Self {
        ExpansionStore {
            overrides: HashMap::new(),
            default_depth: depth,
        }
    }

    /// A store where every position reads as expanded; used for full
    /// non-interactive dumps.
    pub fn expanded_everywhere() -> Self {
        Self::with_default_depth(usize::MAX)
    }

    /// Whether the node at `path` currently shows its children.
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        match self.overrides.get(path) {
            Some(&expanded) => expanded,
            None => path.depth() < self.default_depth,
        }
    }

    /// Flip the stored state for `path`, deriving the default first if
    /// no entry exists yet.
    pub fn toggle(&mut self, path: &NodePath) {
        let current = self.is_expanded(path);
        self.overrides.insert(path.clone(), !current);
    }

    /// Drop every override. Invoked whenever the root value changes.
    pub fn reset(&mut self) {
        self.overrides.clear();
    }
}

impl Default for ExpansionStore {
    fn default() -> Self {
        Self::new()
    }
}
