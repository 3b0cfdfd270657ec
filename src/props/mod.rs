//! Extracted track drive properties.
//!
//! [`TrackProperties`] is the single entry point: it validates a raw
//! descriptor against the canonical schema, then extracts the three
//! sections in a fixed order. Construction is atomic — the first
//! failure aborts the whole build and no partial property set is ever
//! observable.

mod loader;
mod pattern;
mod sprocket;
mod trajectory;

pub use loader::{load_properties, parse_properties};
pub use pattern::{Pattern, PatternElement};
pub use sprocket::Sprocket;
pub use trajectory::{Segment, Trajectory};

use crate::error::{Error, JointError, Result};
use crate::model::{Joint, JointKind, Model};
use crate::schema;
use crate::tree::{DescriptorTree, Node};

/// Validated, immutable property set of one continuous track drive.
///
/// The referenced joints stay owned by the model, which must outlive
/// this value. Rebuilding from changed configuration means
/// constructing a new instance; nothing is updated in place.
#[derive(Debug, Clone)]
pub struct TrackProperties<'m, J> {
    /// Driving wheel.
    pub sprocket: Sprocket<'m, J>,
    /// Belt path around the guide joints.
    pub trajectory: Trajectory<'m, J>,
    /// Repeating belt geometry.
    pub pattern: Pattern,
}

impl<'m, J: Joint> TrackProperties<'m, J> {
    /// Build properties from a raw descriptor tree.
    ///
    /// # Errors
    ///
    /// Fails with a `SchemaError` if the descriptor does not conform
    /// to the canonical schema, a `JointError` if a referenced joint
    /// is missing or of the wrong kind, or a `ConstraintError` if a
    /// numeric invariant is violated.
    pub fn from_tree<M>(model: &'m M, tree: &DescriptorTree) -> Result<Self>
    where
        M: Model<Joint = J>,
    {
        let validated = schema::validate(tree)?;
        let root = validated.root();

        let sprocket = sprocket::extract(model, &root.child("sprocket")?)?;
        let trajectory = trajectory::extract(model, &root.child("trajectory")?)?;
        let pattern = pattern::extract(&root.child("pattern")?)?;

        Ok(Self {
            sprocket,
            trajectory,
            pattern,
        })
    }
}

/// Resolve a joint reference and check its kinematic type.
pub(crate) fn resolve_joint<'m, M: Model>(
    model: &'m M,
    node: &Node<'_>,
    tag: &str,
    accepts: fn(JointKind) -> bool,
    expected: &'static str,
) -> Result<&'m M::Joint> {
    let name = node.text(tag)?;
    let joint = model.joint_by_name(name).ok_or_else(|| {
        Error::Joint(JointError::NotFound {
            path: node.tag_path(tag),
            name: heapless::String::try_from(name).unwrap_or_default(),
        })
    })?;

    let found = joint.kind();
    if !accepts(found) {
        return Err(Error::Joint(JointError::WrongKind {
            path: node.tag_path(tag),
            name: heapless::String::try_from(name).unwrap_or_default(),
            expected,
            found,
        }));
    }
    Ok(joint)
}
