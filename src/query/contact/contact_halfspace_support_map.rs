use crate::math::{Isometry, Real};
use crate::query::{ContactBuffer, ContactPoint};
use crate::shape::{FeatureId, HalfSpace, SupportMap};

/// Contact between a halfspace and a support-mapped shape (Ball, Ellipsoid, Cylinder, etc.)
///
/// Reports at most one contact, at the deepest point of the support-mapped shape.
pub fn contact_halfspace_support_map<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    halfspace: &HalfSpace,
    other: &G,
    out: &mut ContactBuffer,
) {
    let deepest = other.support_point_toward(pos12, &-halfspace.normal);
    let distance = halfspace.signed_distance(&deepest);

    if distance <= 0.0 {
        let point = deepest - *halfspace.normal * (distance * 0.5);
        out.push(
            ContactPoint::new(point, *halfspace.normal, -distance)
                .with_features(FeatureId::Face(0), FeatureId::Unknown),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::contact_halfspace_support_map;
    use crate::math::{Isometry, Point, Vector};
    use crate::query::ContactBuffer;
    use crate::shape::{Ball, Cylinder, HalfSpace};

    #[test]
    fn ball_resting_in_ground() {
        let ground = HalfSpace::new(Vector::z_axis(), 0.0);
        let mut out = ContactBuffer::new();
        contact_halfspace_support_map(
            &Isometry::translation(0.0, 0.0, 0.9),
            &ground,
            &Ball::new(1.0),
            &mut out,
        );

        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].depth, 0.1, epsilon = 1.0e-12);
        assert_relative_eq!(out[0].normal, Vector::z());
        assert_relative_eq!(out[0].point, Point::new(0.0, 0.0, -0.05), epsilon = 1.0e-12);
    }

    #[test]
    fn raised_plane_and_lying_cylinder() {
        let plane = HalfSpace::new(Vector::z_axis(), 1.0);
        let cylinder = Cylinder::new(2.0, 0.5);
        // The cylinder axis is along `x`, so its lowest point is at `z - radius`.
        let lying = Isometry::new(
            Vector::new(0.0, 0.0, 1.4),
            Vector::y() * core::f64::consts::FRAC_PI_2,
        );
        let mut out = ContactBuffer::new();
        contact_halfspace_support_map(&lying, &plane, &cylinder, &mut out);

        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].depth, 0.1, epsilon = 1.0e-9);

        out.clear();
        let above = Isometry::new(
            Vector::new(0.0, 0.0, 1.6),
            Vector::y() * core::f64::consts::FRAC_PI_2,
        );
        contact_halfspace_support_map(&above, &plane, &cylinder, &mut out);
        assert!(out.is_empty());
    }
}
