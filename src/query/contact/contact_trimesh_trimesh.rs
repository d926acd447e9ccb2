use crate::math::{Isometry, Real};
use crate::query::{contact, ContactBuffer};
use crate::shape::{FeatureId, TriMesh};

/// Contacts between two triangle meshes.
///
/// Every pair of triangles with overlapping AABBs is tested as a pair of support maps, and
/// reports at most one contact identified by `FeatureId::Face(i)` and `FeatureId::Face(j)`.
pub fn contact_trimesh_trimesh(
    pos12: &Isometry<Real>,
    mesh1: &TriMesh,
    mesh2: &TriMesh,
    out: &mut ContactBuffer,
) {
    let pos21 = pos12.inverse();
    let aabb2 = mesh2.aabb(pos12);

    for i in mesh1.triangles_intersecting_aabb(&aabb2) {
        let tri1 = mesh1.triangle(i);
        let query = mesh1.triangle_aabb(i).transform_by(&pos21);

        for j in mesh2.triangles_intersecting_aabb(&query) {
            let tri2 = mesh2.triangle(j).transformed(pos12);
            let start = out.len();
            contact::contact_support_map_support_map(
                &Isometry::identity(),
                &tri1,
                &tri2,
                out,
            );

            for c in &mut out[start..] {
                *c = c.with_features(FeatureId::Face(i), FeatureId::Face(j));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::contact_trimesh_trimesh;
    use crate::math::{Isometry, Point, Vector};
    use crate::query::ContactBuffer;
    use crate::shape::{FeatureId, TriMesh, Triangle};

    fn square_at(z: f64) -> TriMesh {
        let tris = [
            Triangle::new(
                Point::new(-1.0, -1.0, z),
                Point::new(1.0, -1.0, z),
                Point::new(1.0, 1.0, z),
            ),
            Triangle::new(
                Point::new(-1.0, -1.0, z),
                Point::new(1.0, 1.0, z),
                Point::new(-1.0, 1.0, z),
            ),
        ];
        TriMesh::from_triangle_soup(&tris).unwrap()
    }

    fn fin() -> TriMesh {
        // A vertical triangle in the plane `y = 0`, pointing downward.
        let tri = Triangle::new(
            Point::new(-0.2, 0.0, 0.5),
            Point::new(0.0, 0.0, -0.1),
            Point::new(0.2, 0.0, 0.5),
        );
        TriMesh::from_triangle_soup(&[tri]).unwrap()
    }

    #[test]
    fn fin_piercing_a_floor() {
        let mut out = ContactBuffer::new();
        contact_trimesh_trimesh(
            &Isometry::translation(0.5, -0.5, 0.0),
            &square_at(0.0),
            &fin(),
            &mut out,
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].feature1, FeatureId::Face(0));
        assert_eq!(out[0].feature2, FeatureId::Face(0));
        assert_relative_eq!(out[0].normal, Vector::z(), epsilon = 1.0e-6);
        assert_relative_eq!(out[0].depth, 0.1, epsilon = 1.0e-6);
    }

    #[test]
    fn parallel_meshes_do_not_touch() {
        let mut out = ContactBuffer::new();
        contact_trimesh_trimesh(
            &Isometry::translation(0.0, 0.0, 0.5),
            &square_at(0.0),
            &square_at(0.0),
            &mut out,
        );
        assert!(out.is_empty());
    }
}
