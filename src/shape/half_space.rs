//! Support mapping based HalfSpace shape.
use crate::math::{Point, Real, Vector};
use na::Unit;

/// A half-space delimited by an infinite plane.
///
/// The solid part of the half-space is the set of points `x` such that
/// `normal · x <= offset`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HalfSpace {
    /// The halfspace planar boundary's outward normal.
    pub normal: Unit<Vector<Real>>,
    /// The signed distance from the origin to the planar boundary, along `normal`.
    pub offset: Real,
}

impl HalfSpace {
    /// Builds a new halfspace from its outward normal and the offset of its boundary.
    #[inline]
    pub fn new(normal: Unit<Vector<Real>>, offset: Real) -> HalfSpace {
        HalfSpace { normal, offset }
    }

    /// The signed distance from `pt` to the boundary of this half-space.
    ///
    /// This is negative if `pt` is inside of the half-space.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// The point of the boundary closest to the origin.
    #[inline]
    pub fn boundary_point(&self) -> Point<Real> {
        Point::from(*self.normal * self.offset)
    }
}
