use crate::bounding_volume::details::support_map_aabb;
use crate::math::{Isometry, Real};
use crate::query::{contact, ContactBuffer};
use crate::shape::{FeatureId, SupportMap, TriMesh};

/// Contacts between a triangle mesh and a support-mapped shape.
///
/// Each triangle is tested against the shape as a support map of its own. Reports one
/// contact per triangle overlapping the shape, with `FeatureId::Face(i)` identifying the
/// triangle.
pub fn contact_trimesh_support_map<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    mesh: &TriMesh,
    other: &G,
    out: &mut ContactBuffer,
) {
    let query = support_map_aabb(pos12, other);

    for i in mesh.triangles_intersecting_aabb(&query) {
        let tri = mesh.triangle(i);
        let start = out.len();
        contact::contact_support_map_support_map(pos12, &tri, other, out);

        for c in &mut out[start..] {
            c.feature1 = FeatureId::Face(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::contact_trimesh_support_map;
    use crate::math::{Isometry, Point, Vector};
    use crate::query::ContactBuffer;
    use crate::shape::{Cuboid, Cylinder, FeatureId, TriMesh, Triangle};

    fn floor() -> TriMesh {
        let tris = [
            Triangle::new(
                Point::new(-1.0, -1.0, 0.0),
                Point::new(1.0, -1.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
            ),
            Triangle::new(
                Point::new(-1.0, -1.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
                Point::new(-1.0, 1.0, 0.0),
            ),
        ];
        TriMesh::from_triangle_soup(&tris).unwrap()
    }

    #[test]
    fn cylinder_standing_on_a_floor_mesh() {
        let mut out = ContactBuffer::new();
        contact_trimesh_support_map(
            &Isometry::translation(0.5, -0.5, 0.4),
            &floor(),
            &Cylinder::new(0.5, 0.2),
            &mut out,
        );

        // The disk of the cylinder lies above the first triangle only.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].feature1, FeatureId::Face(0));
        assert_relative_eq!(out[0].normal, Vector::z(), epsilon = 1.0e-6);
        assert_relative_eq!(out[0].depth, 0.1, epsilon = 1.0e-6);
    }

    #[test]
    fn overlapping_aabbs_are_not_enough() {
        // The AABB of the second triangle covers the whole floor, but the cuboid is far from it.
        let mut out = ContactBuffer::new();
        contact_trimesh_support_map(
            &Isometry::translation(0.9, -0.9, 0.02),
            &floor(),
            &Cuboid::new(Vector::repeat(0.05)),
            &mut out,
        );

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].feature1, FeatureId::Face(0));
        assert_relative_eq!(out[0].normal, Vector::z(), epsilon = 1.0e-6);
        assert_relative_eq!(out[0].depth, 0.03, epsilon = 1.0e-6);
    }
}
