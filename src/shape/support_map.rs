//! The support function shared by every convex geometry.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// A convex geometry described by its support function.
///
/// Given a direction, the support function returns a point of the geometry that is the
/// furthest along it. This is all GJK, EPA and the AABB computation need to know about
/// balls, cuboids, ellipsoids, cylinders and triangles.
pub trait SupportMap {
    /// The support point toward `dir`, in the local frame of the geometry.
    ///
    /// `dir` does not need to be normalized.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The support point toward the unit direction `dir`, in the local frame of the geometry.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// The support point toward the world-space direction `dir`, for the geometry placed at
    /// `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// The support point toward the unit world-space direction `dir`, for the geometry placed
    /// at `transform`.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
