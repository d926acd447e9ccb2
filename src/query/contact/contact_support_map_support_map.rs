use crate::math::{Isometry, Real};
use crate::query::epa::EPA;
use crate::query::gjk::{self, Simplex};
use crate::query::{ContactBuffer, ContactPoint};
use crate::shape::SupportMap;

/// Contact between two support-mapped shapes (Ball, Cuboid, Ellipsoid, Cylinder, etc.)
///
/// Reports at most one contact, along the direction of minimal penetration computed by
/// GJK and EPA. Touching shapes report a contact with a zero depth.
pub fn contact_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    out: &mut ContactBuffer,
) where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut simplex = Simplex::new();

    if !gjk::intersection(pos12, g1, g2, &mut simplex) {
        return;
    }

    if let Some((p1, p2, normal)) = EPA::new().closest_points(pos12, g1, g2, &simplex) {
        let depth = (p1 - p2).dot(&normal).max(0.0);
        out.push(ContactPoint::new(na::center(&p1, &p2), *normal, depth));
    }
}

#[cfg(test)]
mod tests {
    use super::contact_support_map_support_map;
    use crate::math::{Isometry, Vector};
    use crate::query::ContactBuffer;
    use crate::shape::{Ball, Cylinder, Ellipsoid};

    #[test]
    fn cylinder_and_ball_side_by_side() {
        let cylinder = Cylinder::new(0.5, 0.5);
        let ball = Ball::new(0.5);
        let mut out = ContactBuffer::new();

        contact_support_map_support_map(
            &Isometry::translation(0.6, 0.0, 0.0),
            &cylinder,
            &ball,
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].normal, Vector::x(), epsilon = 1.0e-2);
        assert_relative_eq!(out[0].depth, 0.4, epsilon = 1.0e-2);
        assert_relative_eq!(out[0].point.x, 0.3, epsilon = 1.0e-2);

        out.clear();
        contact_support_map_support_map(
            &Isometry::translation(1.2, 0.0, 0.0),
            &cylinder,
            &ball,
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn ball_against_the_long_axis_of_an_ellipsoid() {
        let ellipsoid = Ellipsoid::new(Vector::new(1.0, 0.5, 0.5));
        let mut out = ContactBuffer::new();

        contact_support_map_support_map(
            &Isometry::translation(-1.3, 0.0, 0.0),
            &ellipsoid,
            &Ball::new(0.5),
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].normal, -Vector::x(), epsilon = 1.0e-2);
        assert_relative_eq!(out[0].depth, 0.2, epsilon = 1.0e-2);
    }
}
