//! Stringprops retrieval layer.
//!
//! Two ways to ask for records, one evaluation path:
//!
//! - **Structured**: build a [`FilterSpec`] (usually from request
//!   parameters), validate it, and run it through [`engine::apply`].
//! - **Free text**: hand a phrase to [`interpret`], which heuristically
//!   produces a `FilterSpec` via an ordered rule table, then evaluate the
//!   same way.
//!
//! Everything in this crate is pure and reentrant. The engine evaluates
//! snapshots produced by the store without taking any lock, and the
//! interpreter is a deterministic function of its input text.

pub mod engine;
mod error;
mod interpreter;
mod spec;

pub use crate::engine::{apply, matches};
pub use crate::error::QueryError;
pub use crate::interpreter::{interpret, rule_names};
pub use crate::spec::{parse_contains_character, FilterSpec};
