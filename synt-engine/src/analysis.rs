//! Analyzer result boundary
//!
//! The external analyzer returns one record per submission: the token
//! stream, the syntax tree, and an optional error message. Error and
//! partial results coexist - a failed parse still carries its tokens
//! (and possibly a partial tree), and the presentation renders whatever
//! arrived instead of suppressing it.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A lexical token as reported by the external analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token class name, e.g. `Keyword` or `Identifier`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Source text of the token.
    pub value: String,
    pub line: usize,
    pub column: usize,
}

/// Everything the analyzer returns for one submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub ast: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// True when the analyzer reported no tree at all.
    pub fn has_tree(&self) -> bool {
        matches!(&self.ast, Some(ast) if !ast.is_null())
    }
}
