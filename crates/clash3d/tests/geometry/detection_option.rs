use crate::CountingNarrowPhase;
use clash3d::collision::{
    BackendDescriptor, BlacklistFilter, CollisionDetector, CollisionError, CollisionObject,
    CollisionResult, DetectionOption,
};
use clash3d::math::{Isometry, Point, Real, Vector};
use clash3d::query::{ContactBuffer, ContactPoint, ContactRequest, NarrowPhase, Unsupported};
use clash3d::scene::{ShapeFrame, SharedShape, SimpleFrame};
use clash3d::shape::CollisionGeometry;
use std::sync::Arc;

fn ball_at(x: Real) -> Arc<dyn ShapeFrame> {
    SimpleFrame::new_shared(SharedShape::sphere(0.5), Isometry::translation(x, 0.0, 0.0))
}

/// Three pairs of overlapping balls: (0, 1), (1, 2) and (2, 3).
fn ball_chain() -> Vec<Arc<dyn ShapeFrame>> {
    vec![ball_at(0.0), ball_at(0.6), ball_at(1.2), ball_at(1.8)]
}

#[test]
fn rejecting_filter_skips_the_narrow_phase() {
    let mut detector = CollisionDetector::with_backend(
        BackendDescriptor::REFERENCE,
        CountingNarrowPhase::default(),
    );
    let group = detector.create_group_with_frames(ball_chain());
    let option = DetectionOption::default()
        .with_filter(|_: &CollisionObject, _: &CollisionObject| false);
    let mut result = CollisionResult::new();

    assert!(!detector.detect(group, &option, &mut result));
    assert!(!result.is_collision());
    assert_eq!(detector.narrow_phase().calls.get(), 0);
}

#[test]
fn blacklisted_pairs_are_not_tested() {
    let mut detector = CollisionDetector::with_backend(
        BackendDescriptor::REFERENCE,
        CountingNarrowPhase::default(),
    );
    let frames = ball_chain();
    let group = detector.create_group_with_frames(frames.clone());

    let mut blacklist = BlacklistFilter::new();
    assert!(blacklist.add_pair(&frames[1], &frames[0]));
    let option = DetectionOption::default().with_filter(blacklist);
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &option, &mut result));
    assert_eq!(detector.narrow_phase().calls.get(), 2);
    assert_eq!(result.num_contacts(), 2);

    let h0 = detector.add_shape_frame(group, frames[0].clone()).unwrap();
    assert!(result
        .contacts()
        .iter()
        .all(|c| c.collision_object1 != h0 && c.collision_object2 != h0));
}

#[test]
fn detection_stops_at_max_contacts() {
    let mut detector = CollisionDetector::with_backend(
        BackendDescriptor::REFERENCE,
        CountingNarrowPhase::default(),
    );
    let group = detector.create_group_with_frames(ball_chain());
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &DetectionOption::new(1), &mut result));
    assert_eq!(result.num_contacts(), 1);
    assert_eq!(detector.narrow_phase().calls.get(), 1);

    detector.narrow_phase().calls.set(0);
    assert!(detector.detect(group, &DetectionOption::new(2), &mut result));
    assert_eq!(result.num_contacts(), 2);
    assert_eq!(detector.narrow_phase().calls.get(), 2);

    detector.narrow_phase().calls.set(0);
    assert!(detector.detect(group, &DetectionOption::default(), &mut result));
    assert_eq!(result.num_contacts(), 3);
    assert_eq!(detector.narrow_phase().calls.get(), 3);
}

#[test]
fn cost_computation_tests_every_pair() {
    let mut detector = CollisionDetector::with_backend(
        BackendDescriptor::REFERENCE,
        CountingNarrowPhase::default(),
    );
    let group =
        detector.create_group_with_frames([ball_at(0.0), ball_at(0.6), ball_at(1.1)]);
    let option = DetectionOption {
        max_num_contacts: 1,
        enable_cost: true,
        max_num_cost_sources: 1,
        ..DetectionOption::default()
    };
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &option, &mut result));
    assert_eq!(detector.narrow_phase().calls.get(), 2);
    assert_eq!(result.num_contacts(), 2);

    // Overlaps of 0.4 and 0.5 along x, 1 along y and z: only the costliest one is kept.
    assert_eq!(result.num_cost_sources(), 1);
    let source = &result.cost_sources()[0];
    assert_relative_eq!(source.total_cost, 0.5, epsilon = 1.0e-9);
    assert_relative_eq!(source.aabb.mins.x, 0.6, epsilon = 1.0e-9);
    assert_relative_eq!(source.aabb.maxs.x, 1.1, epsilon = 1.0e-9);

    // Without cost computation, no cost source is reported.
    assert!(detector.detect(group, &DetectionOption::default(), &mut result));
    assert_eq!(result.num_cost_sources(), 0);
}

#[test]
fn hits_without_contact_data() {
    let mut detector = CollisionDetector::new();
    let group = detector.create_group_with_frames(ball_chain());
    let option = DetectionOption {
        enable_contact: false,
        ..DetectionOption::default()
    };
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &option, &mut result));
    assert_eq!(result.num_contacts(), 3);
    assert!(result.contacts().iter().all(|c| !c.has_geometry()));
    assert!(result
        .contacts()
        .iter()
        .all(|c| c.collision_object1 != c.collision_object2));
}

#[test]
fn mismatched_backends_are_never_tested() {
    let mut reference = CollisionDetector::new();
    let foreign_group = reference.create_group_with_frames(ball_chain());

    let mut detector = CollisionDetector::with_backend(
        BackendDescriptor::MESH_ONLY,
        CountingNarrowPhase::default(),
    );
    let group = detector.create_group_with_frames(ball_chain());
    let option = DetectionOption::default();
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &option, &mut result));
    detector.narrow_phase().calls.set(0);

    assert!(!detector.detect(foreign_group, &option, &mut result));
    assert!(!result.is_collision());
    assert!(!detector.detect_between(group, foreign_group, &option, &mut result));
    assert!(!result.is_collision());
    assert_eq!(
        detector.try_detect_between(group, foreign_group, &option, &mut result),
        Err(CollisionError::BackendMismatch {
            expected: "reference-mesh",
            found: "reference",
        })
    );
    assert_eq!(detector.narrow_phase().calls.get(), 0);
}

/// A narrow-phase reporting a single contact with a fixed world-space normal for any pair.
struct FixedNormal(Vector<Real>);

impl NarrowPhase for FixedNormal {
    fn collide(
        &self,
        _: &CollisionGeometry,
        pos1: &Isometry<Real>,
        _: &CollisionGeometry,
        _: &Isometry<Real>,
        request: &ContactRequest,
        out: &mut ContactBuffer,
    ) -> Result<bool, Unsupported> {
        if request.enable_contact {
            let point = Point::from(pos1.translation.vector);
            out.push(ContactPoint::new(point, self.0, 0.1));
        }
        Ok(true)
    }
}

#[test]
fn contact_normal_is_the_opposite_of_the_narrow_phase_normal() {
    let normal = Vector::new(1.0, -2.0, 0.5).normalize();
    let mut detector =
        CollisionDetector::with_backend(BackendDescriptor::REFERENCE, FixedNormal(normal));
    let group = detector.create_group_with_frames([ball_at(0.0), ball_at(0.5)]);
    let mut result = CollisionResult::new();

    assert!(detector.detect(group, &DetectionOption::default(), &mut result));
    assert_eq!(result.num_contacts(), 1);
    assert_eq!(result.contacts()[0].normal, -normal);
}
