use clash3d::collision::{
    BackendDescriptor, CollisionDetector, CollisionResult, Contact, DetectionOption,
};
use clash3d::math::{Isometry, Real, Vector};
use clash3d::query::DefaultNarrowPhase;
use clash3d::scene::{ShapeFrame, SharedShape, SimpleFrame};
use std::sync::Arc;

fn ground() -> Arc<dyn ShapeFrame> {
    SimpleFrame::new_shared(SharedShape::plane(Vector::z(), 0.0), Isometry::identity())
}

/// The normal of `contact`, oriented from the ground toward the other object.
fn upward_normal(
    detector: &CollisionDetector,
    ground: &Arc<dyn ShapeFrame>,
    contact: &Contact,
) -> Vector<Real> {
    let object1 = detector.collision_object(contact.collision_object1).unwrap();
    if Arc::ptr_eq(object1.frame(), ground) {
        -contact.normal
    } else {
        contact.normal
    }
}

#[test]
fn box_resting_on_the_ground() {
    let mut detector = CollisionDetector::new();
    let ground = ground();
    let cube = SimpleFrame::new_shared(
        SharedShape::box_shape(Vector::repeat(1.0)),
        Isometry::translation(2.0, -1.0, 0.4),
    );
    let group = detector.create_group_with_frames([ground.clone(), cube]);
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &DetectionOption::default(), &mut result));
    // The four bottom vertices.
    assert_eq!(result.num_contacts(), 4);

    for contact in result.contacts() {
        assert_relative_eq!(
            upward_normal(&detector, &ground, contact),
            Vector::z(),
            epsilon = 1.0e-12
        );
        assert_relative_eq!(contact.penetration_depth, 0.1, epsilon = 1.0e-12);
        assert_relative_eq!(contact.point.z, -0.05, epsilon = 1.0e-12);
    }
}

#[test]
fn slab_approximation_matches_the_half_space_near_the_origin() {
    let mut points = Vec::new();

    for backend in [BackendDescriptor::REFERENCE, BackendDescriptor::MESH_ONLY] {
        let mut detector = CollisionDetector::with_backend(backend, DefaultNarrowPhase);
        let ground = ground();
        let ball = SimpleFrame::new_shared(
            SharedShape::sphere(0.5),
            Isometry::translation(0.0, 0.0, 0.495),
        );
        let group = detector.create_group_with_frames([ground.clone(), ball]);
        let mut result = CollisionResult::new();

        assert!(detector.detect(group, &DetectionOption::default(), &mut result));
        // With the slab, both triangles of the top face report the same contact: only one is kept.
        assert_eq!(result.num_contacts(), 1);

        let contact = result.contacts()[0];
        assert_relative_eq!(
            upward_normal(&detector, &ground, &contact),
            Vector::z(),
            epsilon = 1.0e-9
        );
        assert_relative_eq!(contact.penetration_depth, 0.005, epsilon = 1.0e-9);
        points.push(contact.point);
    }

    assert_relative_eq!(points[0], points[1], epsilon = 1.0e-9);
}

#[test]
fn mesh_only_box_crosses_both_faces_of_the_slab() {
    // Boxes are tessellated by this backend: each side triangle of the box goes through the
    // top and the bottom faces of the slab.
    let mut detector =
        CollisionDetector::with_backend(BackendDescriptor::MESH_ONLY, DefaultNarrowPhase);
    let ground = ground();
    let cube = SimpleFrame::new_shared(
        SharedShape::box_shape(Vector::repeat(1.0)),
        Isometry::translation(200.0, 20.0, 0.4),
    );
    let group = detector.create_group_with_frames([ground.clone(), cube]);
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &DetectionOption::default(), &mut result));
    assert!(result.num_contacts() > 0);

    for contact in result.contacts() {
        assert_relative_eq!(
            upward_normal(&detector, &ground, contact),
            Vector::z(),
            epsilon = 1.0e-6
        );
        let depth = contact.penetration_depth;
        assert!(
            (depth - 0.1).abs() <= 1.0e-6 || (depth - 0.09).abs() <= 1.0e-6,
            "unexpected depth {}",
            depth
        );
    }

    assert!(result
        .contacts()
        .iter()
        .any(|c| (c.penetration_depth - 0.1).abs() <= 1.0e-6));
}

#[test]
fn cylinder_overlapping_a_ball() {
    let mut detector = CollisionDetector::new();
    let cylinder = SimpleFrame::new_shared(SharedShape::cylinder(0.5, 1.0), Isometry::identity());
    let ball = SimpleFrame::new_shared(
        SharedShape::sphere(0.5),
        Isometry::translation(0.6, 0.0, 0.0),
    );
    let group = detector.create_group_with_frames([cylinder, ball]);
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &DetectionOption::default(), &mut result));
    assert_eq!(result.num_contacts(), 1);

    let contact = result.contacts()[0];
    assert_relative_eq!(contact.normal.x.abs(), 1.0, epsilon = 1.0e-2);
    assert_relative_eq!(contact.penetration_depth, 0.4, epsilon = 1.0e-2);
    assert_relative_eq!(contact.point.x, 0.3, epsilon = 1.0e-2);
}
