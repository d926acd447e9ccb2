use crate::math::{Isometry, Real, Vector};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::shape::SupportMap;

/// The maximum number of support points computed before giving up.
const MAX_ITERATIONS: usize = 100;

/// The squared norm under which a search direction is considered null.
pub(crate) fn eps_tol() -> Real {
    crate::math::DEFAULT_EPSILON * 100.0
}

/// Tests whether two support-mapped shapes intersect.
///
/// `pos12` is the pose of `g2` relative to `g1`. Touching shapes are considered intersecting.
/// When this returns `true`, `simplex` holds CSO points enclosing the origin (possibly on
/// its boundary), which is the starting point of [`crate::query::epa::EPA`].
pub fn intersection<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut dir = pos12.translation.vector;

    if dir.norm_squared() <= eps_tol() {
        dir = Vector::x();
    }

    simplex.reset(CSOPoint::from_shapes(pos12, g1, g2, &dir));

    for _ in 0..MAX_ITERATIONS {
        match simplex.reduce() {
            None => return true,
            Some(new_dir) => dir = new_dir,
        }

        if dir.norm_squared() <= eps_tol() {
            // The origin lies on a vertex of the simplex.
            return true;
        }

        let support = CSOPoint::from_shapes(pos12, g1, g2, &dir);
        let progress = support.point.coords.dot(&dir);

        if progress < 0.0 {
            return false;
        }

        let best = simplex
            .points()
            .iter()
            .map(|pt| pt.point.coords.dot(&dir))
            .fold(Real::MIN, Real::max);

        if progress - best <= eps_tol() * dir.norm() {
            // No progress toward the origin: the shapes are at best touching.
            return progress <= eps_tol();
        }

        simplex.push(support);
    }

    log::debug!("GJK did not converge after {} iterations.", MAX_ITERATIONS);
    false
}

#[cfg(test)]
mod tests {
    use super::intersection;
    use crate::math::{Isometry, Vector};
    use crate::query::gjk::Simplex;
    use crate::shape::{Ball, Cuboid, Cylinder, Ellipsoid};

    #[test]
    fn overlapping_and_separated_support_maps() {
        let cylinder = Cylinder::new(0.5, 0.5);
        let ball = Ball::new(0.5);
        let mut simplex = Simplex::new();

        assert!(intersection(
            &Isometry::translation(0.6, 0.0, 0.0),
            &cylinder,
            &ball,
            &mut simplex
        ));
        assert!(!intersection(
            &Isometry::translation(1.1, 0.0, 0.0),
            &cylinder,
            &ball,
            &mut simplex
        ));
        // Diagonally above the rim of the cylinder, outside of it.
        assert!(!intersection(
            &Isometry::translation(1.0, 0.0, 1.0),
            &cylinder,
            &ball,
            &mut simplex
        ));
    }

    #[test]
    fn concentric_shapes_intersect() {
        let mut simplex = Simplex::new();
        assert!(intersection(
            &Isometry::identity(),
            &Cuboid::new(Vector::repeat(1.0)),
            &Ellipsoid::new(Vector::new(1.0, 0.5, 0.2)),
            &mut simplex
        ));
    }
}
