use crate::math::{Isometry, Real};
use crate::query::{ContactBuffer, ContactPoint};
use crate::shape::{FeatureId, HalfSpace, TriMesh};

/// Contacts between a halfspace and a triangle mesh.
///
/// Every vertex of the mesh lying inside of the halfspace is reported. Vertices shared by
/// several triangles of a triangle soup are reported once per copy.
pub fn contact_halfspace_trimesh(
    pos12: &Isometry<Real>,
    halfspace: &HalfSpace,
    mesh: &TriMesh,
    out: &mut ContactBuffer,
) {
    for (i, vertex) in mesh.vertices().iter().enumerate() {
        let vertex = pos12 * vertex;
        let distance = halfspace.signed_distance(&vertex);

        if distance <= 0.0 {
            let point = vertex - *halfspace.normal * (distance * 0.5);
            out.push(
                ContactPoint::new(point, *halfspace.normal, -distance)
                    .with_features(FeatureId::Face(0), FeatureId::Vertex(i as u32)),
            );
        }
    }
}
