use clash3d::collision::{CollisionError, GeometryCache};
use clash3d::math::Vector;
use clash3d::scene::SharedShape;
use std::sync::Arc;

#[test]
fn reference_count_tracks_claims_and_releases() {
    let shapes = [
        SharedShape::sphere(0.5),
        SharedShape::box_shape(Vector::new(1.0, 2.0, 3.0)),
        // Equal to the first one, but another instance.
        SharedShape::sphere(0.5),
    ];
    let mut expected = [0usize; 3];
    let mut cache = GeometryCache::default();
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..1000 {
        let i = rng.rand_range(0..3) as usize;

        if rng.rand_range(0..2) == 0 {
            assert!(cache.claim(&shapes[i]).is_some());
            expected[i] += 1;
        } else if expected[i] == 0 {
            assert_eq!(
                cache.release(&shapes[i]),
                Err(CollisionError::UnknownShapeRelease)
            );
        } else {
            cache.release(&shapes[i]).unwrap();
            expected[i] -= 1;
        }

        for (shape, count) in shapes.iter().zip(expected) {
            assert_eq!(cache.reference_count(shape), count);
            assert_eq!(cache.contains(shape), count > 0);
        }
        assert_eq!(cache.len(), expected.iter().filter(|c| **c > 0).count());
    }
}

#[test]
fn distinct_instances_never_share_a_geometry() {
    let mut cache = GeometryCache::default();
    let a = SharedShape::sphere(0.5);
    let b = SharedShape::sphere(0.5);

    let ga = cache.claim(&a).unwrap();
    let ga2 = cache.claim(&a.clone()).unwrap();
    let gb = cache.claim(&b).unwrap();

    assert!(Arc::ptr_eq(&ga, &ga2));
    assert!(!Arc::ptr_eq(&ga, &gb));
    assert_eq!(cache.len(), 2);
}

#[test]
fn last_release_drops_the_geometry() {
    let mut cache = GeometryCache::default();
    let shape = SharedShape::cylinder(0.5, 1.0);
    let geometry = cache.claim(&shape).unwrap();
    assert_eq!(Arc::strong_count(&geometry), 2);

    cache.release(&shape).unwrap();
    assert_eq!(Arc::strong_count(&geometry), 1);
    assert!(cache.is_empty());
    assert_eq!(
        cache.release(&shape),
        Err(CollisionError::UnknownShapeRelease)
    );
}
