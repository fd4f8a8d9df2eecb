//! # synt-engine
//!
//! Presentation engine for syntax analyzer output.
//!
//! An external analyzer submits source code and returns a flat token
//! sequence plus a syntax tree whose shape depends on the grammar
//! production that emitted each node. This crate turns that schema-free
//! tree into a deterministic, collapsible row presentation:
//!
//! - [`value`] - the closed set of shapes a node can take
//! - [`classify`] - decides whether a mapping reads as a tagged variant
//!   or a plain record
//! - [`expansion`] - per-position expand/collapse state
//! - [`render`] - walks a value and produces display rows
//! - [`present`] - top-level dispatch over single roots and statement lists
//! - [`analysis`] / [`loader`] - the analyzer result boundary
//! - [`treeviz`] - plain-text dump of a row sequence
//!
//! The engine is synchronous and pure: rendering is a function of the
//! value and an expansion snapshot, and the expansion store is the only
//! mutable state, owned by the caller.

pub mod analysis;
pub mod classify;
pub mod expansion;
pub mod loader;
pub mod present;
pub mod render;
pub mod treeviz;
pub mod value;
