use crate::math::{Isometry, Real};
use crate::query::{ContactBuffer, ContactPoint};
use crate::shape::{Cuboid, FeatureId, HalfSpace};

/// Contacts between a halfspace and a cuboid.
///
/// Every vertex of the cuboid lying inside of the halfspace is reported, so a box resting
/// flat on the ground yields four contacts.
pub fn contact_halfspace_cuboid(
    pos12: &Isometry<Real>,
    halfspace: &HalfSpace,
    cuboid: &Cuboid,
    out: &mut ContactBuffer,
) {
    for (vertex, fid) in cuboid.vertices() {
        let vertex = pos12 * vertex;
        let distance = halfspace.signed_distance(&vertex);

        if distance <= 0.0 {
            let point = vertex - *halfspace.normal * (distance * 0.5);
            out.push(
                ContactPoint::new(point, *halfspace.normal, -distance)
                    .with_features(FeatureId::Face(0), fid),
            );
        }
    }
}
