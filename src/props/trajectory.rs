//! Trajectory section extraction.

use crate::error::{ConstraintError, Error, Result};
use crate::model::{JointKind, Model};
use crate::tree::Node;

/// One leg of the belt path.
#[derive(Debug, Clone)]
pub struct Segment<'m, J> {
    /// Guide joint for this leg, owned by the model. Rotational or
    /// translational.
    pub joint: &'m J,
    /// Belt-path distance at which this leg ends. Strictly positive.
    pub end_position: f64,
}

/// Ordered belt path around the guide joints.
///
/// Segment order follows document order of the configuration; it is
/// the order the belt wraps the vehicle, not an incidental detail.
#[derive(Debug, Clone)]
pub struct Trajectory<'m, J> {
    /// Path legs. The schema guarantees at least one.
    pub segments: Vec<Segment<'m, J>>,
}

impl<'m, J> Trajectory<'m, J> {
    /// Number of path legs.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the trajectory has no legs.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

pub(crate) fn extract<'m, M: Model>(
    model: &'m M,
    node: &Node<'_>,
) -> Result<Trajectory<'m, M::Joint>> {
    let mut segments = Vec::new();
    for segment in node.children("segment")? {
        let joint = super::resolve_joint(
            model,
            &segment,
            "joint",
            JointKind::guides_belt,
            "a rotational or translational",
        )?;

        let end_position = segment.real("end_position")?;
        if end_position <= 0.0 {
            return Err(Error::Constraint(ConstraintError::NonPositiveEndPosition {
                path: segment.tag_path("end_position"),
                value: end_position,
            }));
        }

        segments.push(Segment {
            joint,
            end_position,
        });
    }
    Ok(Trajectory { segments })
}
