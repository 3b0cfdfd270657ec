//! External kinematic model interface.
//!
//! The simulation model owns its joints; this library only borrows
//! lookup results. A model must therefore outlive any property set
//! built against it.

use core::fmt;

/// Kinematic classification of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointKind {
    /// Rotates about a single axis (hinge).
    Rotational,
    /// Slides along a single axis (prismatic).
    Translational,
    /// Any other joint type (ball, fixed, universal, ...).
    Other,
}

impl JointKind {
    /// Whether a joint of this kind can drive the sprocket.
    #[inline]
    pub fn is_rotational(self) -> bool {
        matches!(self, JointKind::Rotational)
    }

    /// Whether a joint of this kind can guide the belt along a
    /// trajectory segment.
    #[inline]
    pub fn guides_belt(self) -> bool {
        matches!(self, JointKind::Rotational | JointKind::Translational)
    }
}

impl fmt::Display for JointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointKind::Rotational => write!(f, "rotational"),
            JointKind::Translational => write!(f, "translational"),
            JointKind::Other => write!(f, "other"),
        }
    }
}

/// One joint owned by the external model.
pub trait Joint {
    /// Joint name, unique within its model.
    fn name(&self) -> &str;

    /// Kinematic classification.
    fn kind(&self) -> JointKind;
}

/// Joint registry of the simulation model the track belongs to.
pub trait Model {
    /// Joint type owned by this model.
    type Joint: Joint;

    /// Look up a joint by name.
    fn joint_by_name(&self, name: &str) -> Option<&Self::Joint>;
}

/// A named joint held by a [`StaticModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticJoint {
    name: String,
    kind: JointKind,
}

impl Joint for StaticJoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> JointKind {
        self.kind
    }
}

/// Minimal in-memory model, useful for tests and standalone tools.
#[derive(Debug, Clone, Default)]
pub struct StaticModel {
    joints: Vec<StaticJoint>,
}

impl StaticModel {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self { joints: Vec::new() }
    }

    /// Add a joint. A joint registered earlier under the same name
    /// shadows this one during lookup.
    pub fn insert(&mut self, name: &str, kind: JointKind) -> &mut Self {
        self.joints.push(StaticJoint {
            name: name.into(),
            kind,
        });
        self
    }

    /// Number of registered joints.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Check if the model has no joints.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Iterate over registered joints.
    pub fn iter(&self) -> impl Iterator<Item = &StaticJoint> {
        self.joints.iter()
    }
}

impl Model for StaticModel {
    type Joint = StaticJoint;

    fn joint_by_name(&self, name: &str) -> Option<&StaticJoint> {
        self.joints.iter().find(|j| j.name == name)
    }
}
