//! Canonical track schema: template loading and input validation.
//!
//! The schema is an explicit rule set describing which elements a track
//! descriptor must carry, how often each may appear, and what value
//! class it must have. [`validate`] walks the rules against an input
//! tree in one pass and materializes a normalized copy for extraction.

mod template;
mod validate;

pub use template::{canonical_schema, parse_schema, Arity, NodeKind, ScalarKind, SchemaNode};
pub use validate::{validate, validate_against};
