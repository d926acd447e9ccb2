//! Support mapping based Ellipsoid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use num::Zero;

/// An axis-aligned ellipsoid centered at the origin.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipsoid {
    /// The semi-axes lengths along `x`, `y` and `z`.
    pub radii: Vector<Real>,
}

impl Ellipsoid {
    /// Creates a new ellipsoid from its semi-axes lengths.
    #[inline]
    pub fn new(radii: Vector<Real>) -> Ellipsoid {
        Ellipsoid { radii }
    }
}

impl SupportMap for Ellipsoid {
    // The support point of the ellipsoid `x^T R^-2 x = 1` toward `d` is `R^2 d / |R d|`.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let scaled = dir.component_mul(&self.radii);
        let norm = scaled.norm();

        if norm.is_zero() {
            Point::origin()
        } else {
            Point::from(scaled.component_mul(&self.radii) / norm)
        }
    }
}
