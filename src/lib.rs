//! # continuous-track
//!
//! Schema-validated configuration extraction for continuous-track
//! (crawler / tank-tread) drives in simulation models.
//!
//! ## Features
//!
//! - **Schema-driven**: descriptors are checked against a canonical,
//!   embedded schema before anything is extracted
//! - **Typed properties**: sprocket, trajectory, and pattern sections
//!   become strongly-typed, immutable values
//! - **Model-aware**: joint references resolve against the host
//!   simulation model and their kinematic type is verified
//! - **Verbatim geometry**: collision and visual sub-trees are carried
//!   as deep copies, never interpreted
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use continuous_track::{JointKind, StaticModel, TrackProperties};
//!
//! // The host simulation owns the joints; StaticModel stands in here.
//! let mut model = StaticModel::new();
//! model
//!     .insert("sprocket_joint", JointKind::Rotational)
//!     .insert("front_idler", JointKind::Rotational);
//!
//! // Validate and extract in one atomic pass.
//! let props = continuous_track::load_properties(&model, "track.toml")?;
//!
//! println!(
//!     "{} segments, {} elements per round",
//!     props.trajectory.len(),
//!     props.pattern.elements_per_round,
//! );
//! ```
//!
//! Construction either yields a fully valid property set or fails with
//! a violation naming the offending element and constraint — never a
//! silently-defaulted value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary with heapless path buffers
#![allow(clippy::result_large_err)]

// Core modules
pub mod error;
pub mod model;
pub mod props;
pub mod schema;
pub mod tree;

// Re-exports for ergonomic API
pub use error::{ConstraintError, Error, JointError, Result, SchemaError};
pub use model::{Joint, JointKind, Model, StaticJoint, StaticModel};
pub use props::{
    load_properties, parse_properties, Pattern, PatternElement, Segment, Sprocket,
    TrackProperties, Trajectory,
};
pub use schema::{canonical_schema, validate};
pub use tree::{DescriptorTree, Node};
