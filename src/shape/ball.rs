use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A ball centered at the origin of its local frame.
///
/// Spheres are always built as balls, as are ellipsoids with three equal semi-axes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The radius of the ball. Positive.
    pub radius: Real,
}

impl Ball {
    /// A ball of the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match Unit::try_new(*dir, crate::math::DEFAULT_EPSILON) {
            Some(dir) => self.local_support_point_toward(&dir),
            None => Point::origin(),
        }
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}
