//! Sprocket section extraction.

use crate::error::Result;
use crate::model::{JointKind, Model};
use crate::tree::Node;

/// The powered wheel that drives the belt.
#[derive(Debug, Clone)]
pub struct Sprocket<'m, J> {
    /// Driving joint, owned by the model. Always rotational.
    pub joint: &'m J,
    /// Pitch diameter of the sprocket wheel.
    pub pitch_diameter: f64,
}

pub(crate) fn extract<'m, M: Model>(
    model: &'m M,
    node: &Node<'_>,
) -> Result<Sprocket<'m, M::Joint>> {
    let joint = super::resolve_joint(model, node, "joint", JointKind::is_rotational, "a rotational")?;

    // TODO: decide whether zero or negative pitch diameters should be
    // rejected the way segment end positions are.
    let pitch_diameter = node.real("pitch_diameter")?;

    Ok(Sprocket {
        joint,
        pitch_diameter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, JointError};
    use crate::model::{Joint, StaticModel};
    use crate::tree::DescriptorTree;

    fn make_node_tree() -> DescriptorTree {
        DescriptorTree::parse("joint = \"drive\"\npitch_diameter = 0.55\n").unwrap()
    }

    #[test]
    fn test_extract_rotational_joint() {
        let mut model = StaticModel::new();
        model.insert("drive", JointKind::Rotational);

        let tree = make_node_tree();
        let sprocket = extract(&model, &tree.root()).unwrap();
        assert_eq!(sprocket.joint.name(), "drive");
        assert_eq!(sprocket.pitch_diameter, 0.55);
    }

    #[test]
    fn test_missing_joint() {
        let model = StaticModel::new();
        let tree = make_node_tree();
        let err = extract(&model, &tree.root()).unwrap_err();
        assert!(matches!(err, Error::Joint(JointError::NotFound { .. })));
    }

    #[test]
    fn test_non_rotational_joint_rejected() {
        let mut model = StaticModel::new();
        model.insert("drive", JointKind::Translational);

        let tree = make_node_tree();
        let err = extract(&model, &tree.root()).unwrap_err();
        assert!(matches!(
            err,
            Error::Joint(JointError::WrongKind {
                found: JointKind::Translational,
                ..
            })
        ));
    }

    #[test]
    fn test_pitch_diameter_taken_as_is() {
        let mut model = StaticModel::new();
        model.insert("drive", JointKind::Rotational);

        // non-positive pitch diameters currently pass through
        let tree = DescriptorTree::parse("joint = \"drive\"\npitch_diameter = -1.0\n").unwrap();
        let sprocket = extract(&model, &tree.root()).unwrap();
        assert_eq!(sprocket.pitch_diameter, -1.0);
    }
}
