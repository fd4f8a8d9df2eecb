//! Loading analyzer results from disk
//!
//! `ResultLoader` reads a serialized analyzer result from a file or a
//! string and deserializes it. Used by both the viewer binary and
//! tests.

use crate::analysis::AnalysisResult;
use std::fs;
use std::path::Path;

/// Error that can occur when loading an analyzer result
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the file
    Io(String),
    /// Malformed JSON in the result payload
    Json(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(err: serde_json::Error) -> Self {
        LoaderError::Json(err.to_string())
    }
}

/// Analyzer result loader
///
/// # Example
///
/// ```rust
/// use synt_engine::loader::ResultLoader;
///
/// let result = ResultLoader::from_string(r#"{"tokens": [], "ast": {"Num": 1}}"#)
///     .parse()
///     .unwrap();
/// assert!(result.has_tree());
/// ```
pub struct ResultLoader {
    source: String,
}

impl ResultLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(ResultLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        ResultLoader {
            source: source.into(),
        }
    }

    /// Deserialize the source into an `AnalysisResult`
    pub fn parse(&self) -> Result<AnalysisResult, LoaderError> {
        Ok(serde_json::from_str(&self.source)?)
    }

    /// Get a reference to the raw source string
    pub fn source_ref(&self) -> &str {
        &self.source
    }
}
