//! Integration tests for the continuous-track library.
//!
//! These tests verify the complete workflow from descriptor text to an
//! extracted, immutable property set.

use continuous_track::{
    parse_properties, ConstraintError, DescriptorTree, Error, Joint, JointError, JointKind,
    SchemaError, StaticModel, TrackProperties,
};

// =============================================================================
// Test configuration data
// =============================================================================

const FULL_DESCRIPTOR: &str = r#"
[sprocket]
joint = "sprocket_joint"
pitch_diameter = 0.55

[trajectory]
[[trajectory.segment]]
joint = "front_idler"
end_position = 1.25

[[trajectory.segment]]
joint = "road_slider"
end_position = 2.5

[[trajectory.segment]]
joint = "rear_idler"
end_position = 3.75

[pattern]
elements_per_round = 5

[[pattern.element]]
[[pattern.element.collision]]
shape = "box"
size = [0.1, 0.2, 0.05]
[[pattern.element.collision]]
shape = "cylinder"
radius = 0.03

[[pattern.element]]
[[pattern.element.visual]]
mesh = "link.dae"
"#;

fn make_model() -> StaticModel {
    let mut model = StaticModel::new();
    model
        .insert("sprocket_joint", JointKind::Rotational)
        .insert("front_idler", JointKind::Rotational)
        .insert("rear_idler", JointKind::Rotational)
        .insert("road_slider", JointKind::Translational)
        .insert("hull_weld", JointKind::Other);
    model
}

// =============================================================================
// Conforming input: validation and extraction
// =============================================================================

#[test]
fn conforming_descriptor_builds_full_property_set() {
    let model = make_model();
    let props = parse_properties(&model, FULL_DESCRIPTOR).expect("descriptor should extract");

    assert_eq!(props.sprocket.joint.name(), "sprocket_joint");
    assert_eq!(props.sprocket.pitch_diameter, 0.55);

    assert_eq!(props.trajectory.len(), 3);
    assert_eq!(props.pattern.elements_per_round, 5);
    assert_eq!(props.pattern.elements.len(), 2);
}

#[test]
fn validation_makes_required_fields_reachable() {
    let tree = DescriptorTree::parse(FULL_DESCRIPTOR).unwrap();
    let validated = continuous_track::validate(&tree).expect("conforming input validates");

    let root = validated.root();
    assert!(root.child("sprocket").is_ok());
    assert!(root.child("trajectory").is_ok());
    assert!(root.child("pattern").is_ok());
    assert_eq!(
        root.child("sprocket").unwrap().real("pitch_diameter").unwrap(),
        0.55
    );
}

#[test]
fn from_tree_matches_parse_properties() {
    let model = make_model();
    let tree = DescriptorTree::parse(FULL_DESCRIPTOR).unwrap();
    let props = TrackProperties::from_tree(&model, &tree).unwrap();
    assert_eq!(props.trajectory.len(), 3);
}

// =============================================================================
// Schema violations abort before extraction
// =============================================================================

#[test]
fn missing_required_field_fails_validation() {
    let model = make_model();
    let input = FULL_DESCRIPTOR.replace("pitch_diameter = 0.55", "");

    let err = parse_properties(&model, &input).unwrap_err();
    assert!(matches!(
        err,
        Error::Schema(SchemaError::MissingElement { .. })
    ));
}

#[test]
fn schema_violation_wins_over_extraction_errors() {
    // an unknown element plus a missing joint: validation runs first,
    // so the schema violation is reported
    let model = StaticModel::new();
    let input = format!("{}\n[turret]\nyaw = 1.0\n", FULL_DESCRIPTOR);

    let err = parse_properties(&model, &input).unwrap_err();
    assert!(matches!(
        err,
        Error::Schema(SchemaError::UnknownElement { .. })
    ));
}

// =============================================================================
// Joint resolution
// =============================================================================

#[test]
fn unresolved_sprocket_joint_aborts_construction() {
    let input = FULL_DESCRIPTOR.replace("\"sprocket_joint\"", "\"phantom\"");
    let model = make_model();

    let err = parse_properties(&model, &input).unwrap_err();
    match err {
        Error::Joint(JointError::NotFound { name, .. }) => {
            assert_eq!(name.as_str(), "phantom");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn sprocket_extraction_failure_reported_before_pattern_failure() {
    // sprocket joint is missing and elements_per_round is zero;
    // the fixed extraction order reports the sprocket first
    let input = FULL_DESCRIPTOR
        .replace("\"sprocket_joint\"", "\"phantom\"")
        .replace("elements_per_round = 5", "elements_per_round = 0");
    let model = make_model();

    let err = parse_properties(&model, &input).unwrap_err();
    assert!(matches!(err, Error::Joint(JointError::NotFound { .. })));
}

#[test]
fn fixed_joint_cannot_guide_a_segment() {
    let input = FULL_DESCRIPTOR.replace("\"road_slider\"", "\"hull_weld\"");
    let model = make_model();

    let err = parse_properties(&model, &input).unwrap_err();
    match err {
        Error::Joint(JointError::WrongKind {
            name,
            found,
            ..
        }) => {
            assert_eq!(name.as_str(), "hull_weld");
            assert_eq!(found, JointKind::Other);
        }
        other => panic!("expected WrongKind, got {:?}", other),
    }
}

#[test]
fn translational_joint_cannot_drive_the_sprocket() {
    let input = FULL_DESCRIPTOR.replace("joint = \"sprocket_joint\"", "joint = \"road_slider\"");
    let model = make_model();

    let err = parse_properties(&model, &input).unwrap_err();
    assert!(matches!(
        err,
        Error::Joint(JointError::WrongKind {
            found: JointKind::Translational,
            ..
        })
    ));
}

// =============================================================================
// Numeric constraints
// =============================================================================

#[test]
fn zero_and_negative_end_positions_are_rejected() {
    let model = make_model();
    for bad in ["0.0", "-2.5"] {
        let input = FULL_DESCRIPTOR.replace("end_position = 2.5", &format!("end_position = {}", bad));
        let err = parse_properties(&model, &input).unwrap_err();
        assert!(matches!(
            err,
            Error::Constraint(ConstraintError::NonPositiveEndPosition { .. })
        ));
    }
}

#[test]
fn tiny_positive_end_position_round_trips_exactly() {
    let model = make_model();
    let input = FULL_DESCRIPTOR.replace("end_position = 2.5", "end_position = 0.001");

    let props = parse_properties(&model, &input).unwrap();
    assert_eq!(props.trajectory.segments[1].end_position, 0.001);
}

#[test]
fn zero_elements_per_round_is_rejected() {
    let model = make_model();
    let input = FULL_DESCRIPTOR.replace("elements_per_round = 5", "elements_per_round = 0");

    let err = parse_properties(&model, &input).unwrap_err();
    assert!(matches!(
        err,
        Error::Constraint(ConstraintError::ZeroElementsPerRound { .. })
    ));
}

// =============================================================================
// Pattern catalog shape and ordering
// =============================================================================

#[test]
fn pattern_catalog_counts_match_document() {
    let model = make_model();
    let props = parse_properties(&model, FULL_DESCRIPTOR).unwrap();

    let pattern = &props.pattern;
    assert_eq!(pattern.elements_per_round, 5);
    assert_eq!(pattern.elements.len(), 2);
    assert_eq!(pattern.elements[0].collisions.len(), 2);
    assert_eq!(pattern.elements[0].visuals.len(), 0);
    assert_eq!(pattern.elements[1].collisions.len(), 0);
    assert_eq!(pattern.elements[1].visuals.len(), 1);
}

#[test]
fn segment_order_matches_document_order() {
    let model = make_model();
    let props = parse_properties(&model, FULL_DESCRIPTOR).unwrap();

    let names: Vec<_> = props
        .trajectory
        .segments
        .iter()
        .map(|s| s.joint.name())
        .collect();
    assert_eq!(names, ["front_idler", "road_slider", "rear_idler"]);

    let ends: Vec<_> = props
        .trajectory
        .segments
        .iter()
        .map(|s| s.end_position)
        .collect();
    assert_eq!(ends, [1.25, 2.5, 3.75]);
}

#[test]
fn collision_order_matches_document_order() {
    let model = make_model();
    let props = parse_properties(&model, FULL_DESCRIPTOR).unwrap();

    let shapes: Vec<_> = props.pattern.elements[0]
        .collisions
        .iter()
        .map(|c| c.root().text("shape").unwrap().to_string())
        .collect();
    assert_eq!(shapes, ["box", "cylinder"]);
}

// =============================================================================
// Clone isolation of opaque sub-trees
// =============================================================================

#[test]
fn opaque_copies_equal_their_source_but_own_their_storage() {
    let model = make_model();
    let tree = DescriptorTree::parse(FULL_DESCRIPTOR).unwrap();
    let props = TrackProperties::from_tree(&model, &tree).unwrap();

    // structurally equal to the source sub-tree
    let source = tree
        .root()
        .child("pattern")
        .unwrap()
        .children("element")
        .unwrap()[0]
        .children("collision")
        .unwrap()[0]
        .to_tree();
    let extracted = &props.pattern.elements[0].collisions[0];
    assert_eq!(extracted, &source);

    // mutating a copy leaves the extracted sub-tree untouched
    let mut copy = extracted.clone();
    copy.as_table_mut()
        .insert("shape".into(), toml::Value::String("sphere".into()));
    assert_eq!(extracted.root().text("shape").unwrap(), "box");
    assert_ne!(&copy, extracted);
}

#[test]
fn extracted_subtrees_survive_the_input_tree() {
    let model = make_model();
    let props = {
        let tree = DescriptorTree::parse(FULL_DESCRIPTOR).unwrap();
        TrackProperties::from_tree(&model, &tree).unwrap()
    };
    assert_eq!(
        props.pattern.elements[1].visuals[0]
            .root()
            .text("mesh")
            .unwrap(),
        "link.dae"
    );
}
