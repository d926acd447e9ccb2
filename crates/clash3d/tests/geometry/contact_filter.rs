use clash3d::collision::{
    filter_contacts, CollisionDetector, CollisionObjectHandle, Contact, RawContact,
};
use clash3d::math::{Isometry, Point, Real, Vector};
use clash3d::scene::{SharedShape, SimpleFrame};
use clash3d::shape::FeatureId;

fn object_handles(
    detector: &mut CollisionDetector,
) -> (CollisionObjectHandle, CollisionObjectHandle) {
    let group = detector.create_group();
    let shape = SharedShape::sphere(1.0);
    let h1 = detector
        .add_shape_frame(group, SimpleFrame::new_shared(shape.clone(), Isometry::identity()))
        .unwrap();
    let h2 = detector
        .add_shape_frame(group, SimpleFrame::new_shared(shape, Isometry::identity()))
        .unwrap();
    (h1, h2)
}

fn raw_contacts(
    points: &[Point<Real>],
    normal: Vector<Real>,
    objects: (CollisionObjectHandle, CollisionObjectHandle),
) -> Vec<RawContact> {
    points
        .iter()
        .enumerate()
        .map(|(i, pt)| RawContact {
            point: *pt,
            normal,
            penetration_depth: 0.01 * i as Real,
            feature1: FeatureId::Vertex(i as u32),
            feature2: FeatureId::Face(0),
            object1: objects.0,
            object2: objects.1,
        })
        .collect()
}

fn refilter(contacts: &[Contact]) -> Vec<Contact> {
    let raw: Vec<_> = contacts.iter().map(RawContact::from).collect();
    filter_contacts(&raw)
}

#[test]
fn coincident_contacts_collapse_to_the_later_one() {
    let mut detector = CollisionDetector::new();
    let objects = object_handles(&mut detector);
    let raw = raw_contacts(
        &[
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.0000005),
            Point::new(1.0, 0.0, 0.0),
        ],
        Vector::z(),
        objects,
    );

    let filtered = filter_contacts(&raw);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].point, raw[1].point);
    assert_eq!(filtered[0].feature1, FeatureId::Vertex(1));
    assert_eq!(filtered[1].point, raw[2].point);
}

#[test]
fn collinear_contacts_keep_the_off_line_point() {
    let mut detector = CollisionDetector::new();
    let objects = object_handles(&mut detector);
    let raw = raw_contacts(
        &[
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ],
        Vector::z(),
        objects,
    );

    let filtered = filter_contacts(&raw);
    // One of the three collinear points is gone.
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().any(|c| c.point == Point::new(0.0, 1.0, 0.0)));
    assert_eq!(
        filtered
            .iter()
            .filter(|c| c.point.y == 0.0 && c.point.z == 0.0)
            .count(),
        2
    );
}

#[test]
fn exported_normal_is_negated() {
    let mut detector = CollisionDetector::new();
    let objects = object_handles(&mut detector);
    let normal = Vector::new(0.3, -0.4, 1.2).normalize();
    let raw = raw_contacts(&[Point::new(1.0, 2.0, 3.0)], normal, objects);

    let filtered = filter_contacts(&raw);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].normal, -normal);
    assert_eq!(filtered[0].collision_object1, objects.0);
    assert_eq!(filtered[0].collision_object2, objects.1);
    assert_eq!(filtered[0].penetration_depth, raw[0].penetration_depth);
}

#[test]
fn filtering_is_idempotent() {
    let mut detector = CollisionDetector::new();
    let objects = object_handles(&mut detector);
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..200 {
        let n = rng.rand_range(0..12) as usize;
        let points: Vec<_> = (0..n)
            .map(|_| {
                // Points on a coarse grid, some of them nudged below the duplicate tolerance,
                // so that duplicates and collinear triples are common.
                let mut coord = || rng.rand_range(0..3) as Real;
                let mut pt = Point::new(coord(), coord(), coord());
                if rng.rand_range(0..4) == 0 {
                    pt.z += rng.rand_float() * 1.0e-4;
                }
                pt
            })
            .collect();
        let normal = Vector::new(rng.rand_float(), rng.rand_float(), 1.0).normalize();
        let raw = raw_contacts(&points, normal, objects);

        let once = filter_contacts(&raw);
        let twice = refilter(&once);
        assert_eq!(once, twice);
        assert!(once.len() <= raw.len());
    }
}
