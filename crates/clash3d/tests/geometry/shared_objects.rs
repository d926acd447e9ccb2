use clash3d::collision::{CollisionDetector, CollisionResult, DetectionOption};
use clash3d::math::{Isometry, Vector};
use clash3d::scene::{ShapeFrame, SharedShape, SimpleFrame};
use std::sync::Arc;

#[test]
fn a_frame_in_two_groups_is_one_object() {
    let mut detector = CollisionDetector::new();
    let shape = SharedShape::sphere(0.5);
    let frame = SimpleFrame::new_shared(shape.clone(), Isometry::identity());
    let group1 = detector.create_group();
    let group2 = detector.create_group();

    let h1 = detector.add_shape_frame(group1, frame.clone()).unwrap();
    let h2 = detector.add_shape_frame(group2, frame.clone()).unwrap();
    assert_eq!(h1, h2);
    assert_eq!(detector.num_collision_objects(), 1);
    assert_eq!(detector.geometry_cache().reference_count(&shape), 1);

    // An object is never tested against itself.
    let mut result = CollisionResult::new();
    assert!(!detector.detect_between(group1, group2, &DetectionOption::default(), &mut result));

    assert_eq!(detector.remove_shape_frame(group1, &frame), Ok(true));
    assert!(detector.collision_object(h1).is_some());
    assert!(detector.has_shape_frame(group2, &frame));

    detector.destroy_group(group2).unwrap();
    assert!(detector.collision_object(h1).is_none());
    assert_eq!(detector.num_collision_objects(), 0);
    assert!(detector.geometry_cache().is_empty());
}

#[test]
fn frames_sharing_a_shape_share_its_geometry() {
    let mut detector = CollisionDetector::new();
    let shape = SharedShape::cylinder(0.2, 1.0);
    let frames: Vec<Arc<dyn ShapeFrame>> = (0..3)
        .map(|i| {
            SimpleFrame::new_shared(shape.clone(), Isometry::translation(i as f64, 0.0, 0.0))
        })
        .collect();
    let group = detector.create_group_with_frames(frames.clone());

    assert_eq!(detector.num_collision_objects(), 3);
    assert_eq!(detector.geometry_cache().len(), 1);
    assert_eq!(detector.geometry_cache().reference_count(&shape), 3);

    let geometries: Vec<_> = detector
        .collision_group(group)
        .unwrap()
        .objects()
        .map(|h| detector.collision_object(h).unwrap().geometry().unwrap().clone())
        .collect();
    assert!(Arc::ptr_eq(&geometries[0], &geometries[1]));
    assert!(Arc::ptr_eq(&geometries[1], &geometries[2]));

    detector.remove_all_shape_frames(group).unwrap();
    assert_eq!(detector.num_shape_frames(group), 0);
    assert!(detector.geometry_cache().is_empty());
}

#[test]
fn cross_group_detection() {
    let mut detector = CollisionDetector::new();
    let a = SimpleFrame::new_shared(SharedShape::sphere(0.5), Isometry::identity());
    let b = SimpleFrame::new_shared(SharedShape::sphere(0.5), Isometry::translation(0.8, 0.0, 0.0));
    let c = SimpleFrame::new_shared(SharedShape::sphere(0.5), Isometry::translation(0.0, 0.8, 0.0));
    let group1 = detector.create_group_with_frames([a.clone(), b.clone()]);
    let group2 = detector.create_group_with_frames([c]);
    let option = DetectionOption::default();
    let mut result = CollisionResult::new();

    assert!(detector.detect_between(group1, group2, &option, &mut result));
    // Only a-c: a-b is within the first group and b-c is too far apart.
    assert_eq!(result.num_contacts(), 1);
    let contact = result.contacts()[0];
    let object1 = detector.collision_object(contact.collision_object1).unwrap();
    assert!(Arc::ptr_eq(object1.frame(), &a));
    // From the second object toward the first one.
    assert_relative_eq!(contact.normal, -Vector::y(), epsilon = 1.0e-12);
}

#[test]
fn shape_replacement_is_picked_up() {
    struct SwitchingFrame {
        shapes: [SharedShape; 2],
        current: std::sync::atomic::AtomicUsize,
    }

    impl ShapeFrame for SwitchingFrame {
        fn shape(&self) -> SharedShape {
            self.shapes[self.current.load(std::sync::atomic::Ordering::Relaxed)].clone()
        }

        fn world_transform(&self) -> Isometry<f64> {
            Isometry::identity()
        }
    }

    let small = SharedShape::sphere(0.1);
    let large = SharedShape::sphere(2.0);
    let switching = Arc::new(SwitchingFrame {
        shapes: [small.clone(), large.clone()],
        current: Default::default(),
    });
    let other = SimpleFrame::new_shared(
        SharedShape::sphere(0.5),
        Isometry::translation(1.0, 0.0, 0.0),
    );

    let mut detector = CollisionDetector::new();
    let group =
        detector.create_group_with_frames([switching.clone() as Arc<dyn ShapeFrame>, other]);
    let option = DetectionOption::default();
    let mut result = CollisionResult::new();

    assert!(!detector.detect(group, &option, &mut result));
    assert_eq!(detector.geometry_cache().reference_count(&small), 1);

    switching
        .current
        .store(1, std::sync::atomic::Ordering::Relaxed);
    assert!(detector.detect(group, &option, &mut result));
    assert_eq!(detector.geometry_cache().reference_count(&small), 0);
    assert_eq!(detector.geometry_cache().reference_count(&large), 1);
}

#[test]
fn dropping_the_detector_releases_every_claim() {
    let shape = SharedShape::box_shape(Vector::repeat(0.5));
    let frame = SimpleFrame::new_shared(shape.clone(), Isometry::identity());
    let baseline = Arc::strong_count(&shape.0);

    {
        let mut detector = CollisionDetector::new();
        let group1 = detector.create_group_with_frames([frame.clone()]);
        let _group2 = detector.create_group_with_frames([frame.clone()]);
        let _group3 = detector.create_group();
        let mut result = CollisionResult::new();
        assert!(!detector.detect(group1, &DetectionOption::default(), &mut result));
        assert!(Arc::strong_count(&shape.0) > baseline);
    }

    assert_eq!(Arc::strong_count(&shape.0), baseline);
}
